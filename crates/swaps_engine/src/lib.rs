//! # swaps_engine: Tabular Time-Series Query & Transform Engine
//!
//! Answers parameterised queries over periodically-refreshed swaps
//! reference data (rate curves, trading volumes, trade distributions)
//! and returns reshaped, unit-normalised time series ready for charting
//! or tabular display.
//!
//! ## Pipeline
//!
//! Each query operation composes the deterministic stages in `stages`
//! over an immutable snapshot fetched through the
//! [`TableStore`](swaps_store::TableStore) boundary:
//!
//! filter → date window → aggregation → reshape → normalisation
//!
//! Stages are pure functions: no I/O, no suspension, no shared mutable
//! state, so concurrent queries need no coordination beyond the store's.
//! Failure is structured (see [`QueryError`]) and never silently
//! recovered inside the pipeline.
//!
//! ## Usage Example
//!
//! ```rust
//! use swaps_core::table::{Table, Value};
//! use swaps_core::types::Date;
//! use swaps_engine::queries::{rate_levels, RateLevelsParams};
//! use swaps_store::{columns, sheets, MemoryStore};
//!
//! let mut table = Table::new([
//!     columns::CURVE_DATE,
//!     columns::SWAP_TYPE,
//!     columns::METRIC,
//!     columns::RATE,
//! ]);
//! table.push_row(vec![
//!     Value::Date(Date::parse("2025-04-15").unwrap()),
//!     Value::from("OIS"),
//!     Value::from("2s10s"),
//!     Value::from(0.0130),
//! ]).unwrap();
//!
//! let mut store = MemoryStore::new();
//! store.insert("usd_swaps", sheets::INTEREST_RATES, table);
//!
//! let records = rate_levels(&store, &RateLevelsParams::default()).unwrap();
//! assert_eq!(records[0].get("ois_2s10s"), Some(&Value::from(1.3)));
//! ```

#![deny(rustdoc::broken_intra_doc_links)]

mod error;
mod record;

pub mod queries;
pub mod stages;

pub use error::QueryError;
pub use record::Record;
