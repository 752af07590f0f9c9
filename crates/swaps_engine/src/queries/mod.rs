//! The query operations.
//!
//! One module per operation, each composing the pipeline stages over a
//! snapshot fetched from the store:
//! - `rate_levels`: swap rate levels as a wide time series
//! - `rate_volume`: traded volume series with a 5-day moving average
//! - `trade_distribution`: volume distribution across maturity buckets for
//!   one date
//! - `trades`: trades and the pricing curve for one date
//! - `catalogue`: the available-tenor/bucket/date listings that drive
//!   selector dropdowns

pub mod catalogue;
pub mod rate_levels;
pub mod rate_volume;
pub mod trade_distribution;
pub mod trades;

pub use catalogue::{available_buckets, available_tenors, distribution_dates};
pub use rate_levels::{rate_levels, RateLevelsParams};
pub use rate_volume::{rate_volume, RateVolumeParams};
pub use trade_distribution::{trade_distribution, TradeDistributionParams};
pub use trades::{swap_trades, SwapTradesParams};

use swaps_core::table::Table;
use swaps_core::types::Currency;
use swaps_store::TableStore;

use crate::error::QueryError;

/// Fetches the snapshot backing a currency and sheet.
fn fetch(store: &dyn TableStore, currency: Currency, sheet: &str) -> Result<Table, QueryError> {
    let key = currency.store_key();
    tracing::debug!(key = %key, sheet = %sheet, "fetching snapshot");
    Ok(store.get_table(&key, sheet)?)
}
