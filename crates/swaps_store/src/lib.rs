//! # swaps_store: Snapshot Store Boundary
//!
//! The engine consumes reference data through the [`TableStore`] trait:
//! `get_table(key, sheet)` returns a fresh [`Table`] snapshot or a
//! [`StoreError::NotFound`]. How the backing data is ingested or refreshed
//! is not this workspace's concern; the engine's contract begins once a
//! table is in hand.
//!
//! The module also owns the naming contract of the three reference sheets
//! (see [`sheets`] and [`columns`]): which sheet backs which query family
//! and what its columns are called.
//!
//! ## Copy-on-read
//!
//! [`MemoryStore::get_table`] returns a clone of the stored snapshot, so a
//! query pipeline can never observe (or cause) mutation of the store's
//! copy, and concurrent queries against one store need no coordination.

use std::collections::HashMap;

use thiserror::Error;

use swaps_core::table::Table;

/// Sheet names of the backing reference tables.
pub mod sheets {
    /// Swap rate levels by curve date, type, and tenor.
    pub const INTEREST_RATES: &str = "Interest Rates";
    /// Traded volumes by spot date, type, and maturity bucket.
    pub const TRADING_DATA: &str = "Trading Data";
    /// Individual trades and the pricing curve for one spot date.
    pub const TRADES_AND_PRICING: &str = "Trades and Pricing Curve";
}

/// Column names of the backing reference tables.
pub mod columns {
    /// Curve observation date (Interest Rates).
    pub const CURVE_DATE: &str = "curve_date";
    /// Swap type category (`"Libor"` / `"OIS"`).
    pub const SWAP_TYPE: &str = "swap.type";
    /// Curve point identifier (Interest Rates).
    pub const METRIC: &str = "metric";
    /// Rate level as a fraction (Interest Rates).
    pub const RATE: &str = "rate";
    /// Trade settlement date (Trading Data, Trades and Pricing Curve).
    pub const SPOT_DATE: &str = "spot_date";
    /// Maturity bucket label (Trading Data).
    pub const BUCKET: &str = "Bucket";
    /// Traded notional (Trading Data).
    pub const NOTIONAL: &str = "notional";
    /// PV01 of the traded notional (Trading Data).
    pub const PV01: &str = "pv01";
    /// Time to maturity in years (Trades and Pricing Curve).
    pub const TIME_TO_MAT: &str = "time.to.mat";
    /// Trade or curve rate as a fraction (Trades and Pricing Curve).
    pub const STRIKE: &str = "strike";
    /// Row category (Trades and Pricing Curve): the pricing curve or a
    /// trade clearing/start classification.
    pub const ROW_TYPE: &str = "type";
    /// Whether the trade is cleared (Trades and Pricing Curve).
    pub const CLEARED: &str = "cleared";
    /// Whether the trade is forward starting (Trades and Pricing Curve).
    pub const FORWARD_STARTING: &str = "forward_starting";

    /// The pricing-curve value of the [`ROW_TYPE`] column.
    pub const PRICING_RATE: &str = "Pricing Rate";
}

/// Store-boundary errors.
///
/// # Variants
/// - `NotFound`: No table is stored under the requested key and sheet
///
/// # Examples
/// ```
/// use swaps_store::StoreError;
///
/// let err = StoreError::NotFound {
///     key: "usd_swaps".to_string(),
///     sheet: "Interest Rates".to_string(),
/// };
/// assert_eq!(
///     format!("{}", err),
///     "No table found for key usd_swaps, sheet Interest Rates"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No table is stored under the requested key and sheet.
    #[error("No table found for key {key}, sheet {sheet}")]
    NotFound {
        /// The requested table key (e.g., `"usd_swaps"`)
        key: String,
        /// The requested sheet name
        sheet: String,
    },
}

/// The store collaborator the engine reads snapshots from.
///
/// Implementations must return a fresh, immutable snapshot per call; the
/// engine never mutates a returned table, and never caches one across
/// requests.
pub trait TableStore {
    /// Fetches the table stored under `key` and `sheet`.
    fn get_table(&self, key: &str, sheet: &str) -> Result<Table, StoreError>;
}

/// An in-memory snapshot store keyed by (table key, sheet name).
///
/// # Examples
///
/// ```
/// use swaps_core::table::Table;
/// use swaps_store::{sheets, MemoryStore, TableStore};
///
/// let mut store = MemoryStore::new();
/// store.insert("usd_swaps", sheets::INTEREST_RATES, Table::new(["curve_date"]));
///
/// assert!(store.get_table("usd_swaps", sheets::INTEREST_RATES).is_ok());
/// assert!(store.get_table("chf_swaps", sheets::INTEREST_RATES).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: HashMap<(String, String), Table>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts (or replaces) the snapshot for a key and sheet.
    pub fn insert(&mut self, key: &str, sheet: &str, table: Table) {
        self.tables
            .insert((key.to_string(), sheet.to_string()), table);
    }

    /// Number of stored snapshots.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// True when no snapshots are stored.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl TableStore for MemoryStore {
    fn get_table(&self, key: &str, sheet: &str) -> Result<Table, StoreError> {
        self.tables
            .get(&(key.to_string(), sheet.to_string()))
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                key: key.to_string(),
                sheet: sheet.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swaps_core::table::Value;

    fn one_row_table() -> Table {
        let mut t = Table::new(["metric"]);
        t.push_row(vec![Value::from("2s10s")]).unwrap();
        t
    }

    #[test]
    fn test_get_existing() {
        let mut store = MemoryStore::new();
        store.insert("usd_swaps", sheets::INTEREST_RATES, one_row_table());

        let table = store
            .get_table("usd_swaps", sheets::INTEREST_RATES)
            .unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_get_unknown_key() {
        let store = MemoryStore::new();
        let result = store.get_table("chf_swaps", sheets::INTEREST_RATES);
        match result {
            Err(StoreError::NotFound { key, sheet }) => {
                assert_eq!(key, "chf_swaps");
                assert_eq!(sheet, sheets::INTEREST_RATES);
            }
            _ => panic!("Expected NotFound error"),
        }
    }

    #[test]
    fn test_get_unknown_sheet() {
        let mut store = MemoryStore::new();
        store.insert("usd_swaps", sheets::INTEREST_RATES, one_row_table());
        assert!(store.get_table("usd_swaps", sheets::TRADING_DATA).is_err());
    }

    #[test]
    fn test_copy_on_read() {
        let mut store = MemoryStore::new();
        store.insert("usd_swaps", sheets::INTEREST_RATES, one_row_table());

        let snapshot = store
            .get_table("usd_swaps", sheets::INTEREST_RATES)
            .unwrap();
        let filtered = snapshot.retain(|_| false);
        assert!(filtered.is_empty());

        // The store's copy is unaffected by downstream transformation.
        let again = store
            .get_table("usd_swaps", sheets::INTEREST_RATES)
            .unwrap();
        assert_eq!(again.len(), 1);
    }

    #[test]
    fn test_insert_replaces() {
        let mut store = MemoryStore::new();
        store.insert("usd_swaps", sheets::TRADING_DATA, one_row_table());
        store.insert("usd_swaps", sheets::TRADING_DATA, Table::new(["metric"]));
        assert_eq!(store.len(), 1);
        let table = store.get_table("usd_swaps", sheets::TRADING_DATA).unwrap();
        assert!(table.is_empty());
    }
}
