//! The deterministic pipeline stages.
//!
//! A query is a chain of pure stage functions over an immutable snapshot
//! table: filter, date window, aggregation, reshape, normalisation. Every
//! stage returns a new table; none performs I/O or suspends, so the
//! pipeline is trivially safe to run concurrently against the same or
//! different snapshots.

pub mod aggregate;
pub mod filter;
pub mod normalise;
pub mod reshape;
pub mod window;
