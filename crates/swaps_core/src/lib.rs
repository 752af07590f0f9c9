//! # swaps_core: Data Model for the Swaps Analytics Engine
//!
//! ## Core Layer Role
//!
//! swaps_core is the bottom layer of the workspace, providing:
//! - Typed query selectors: `Currency`, `SwapType`, `Tenor`, `Bucket`,
//!   `Period`, `VolumeStat` (`types`)
//! - Time types: `Date` (`types::time`)
//! - The long-format table data model: `Value`, `Table` (`table`)
//! - Error types: `SelectorError`, `DateError`, `TableError`
//!
//! ## Immutability Principle
//!
//! A `Table` is an immutable snapshot: every transformation in the layers
//! above produces a new `Table` rather than mutating in place, so a query
//! pipeline is a chain of pure functions over already-fetched data.
//!
//! ## Usage Examples
//!
//! ```rust
//! use swaps_core::types::{Currency, Tenor, Date};
//!
//! // Selector parsing
//! let ccy: Currency = "usd".parse().unwrap();
//! assert_eq!(ccy.store_key(), "usd_swaps");
//!
//! let tenor: Tenor = "2s10s".parse().unwrap();
//! assert_eq!(tenor.label(), "2Y - 10Y Spread");
//!
//! // Date operations
//! let date = Date::parse("2025-04-15").unwrap();
//! assert_eq!(date.to_string(), "2025-04-15");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod table;
pub mod types;
