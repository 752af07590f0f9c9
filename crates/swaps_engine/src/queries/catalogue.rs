//! Selector catalogues: which tenors, buckets, and dates are actually
//! present for a currency.
//!
//! These back the dropdowns of a caller's parameter layer: the canonical
//! enumeration intersected with the values observed in the snapshot.

use swaps_core::table::TableError;
use swaps_core::types::{Bucket, Currency, Date, SwapTypeChoice, Tenor};
use swaps_store::{columns, sheets, TableStore};

use crate::error::QueryError;
use crate::stages::filter;

use super::fetch;

/// The tenors with rate-level observations for a currency and swap type.
///
/// Returned in canonical catalogue order regardless of observation order.
pub fn available_tenors(
    store: &dyn TableStore,
    currency: Currency,
    swap_type: SwapTypeChoice,
) -> Result<Vec<Tenor>, QueryError> {
    let table = fetch(store, currency, sheets::INTEREST_RATES)?;
    let typed = filter::by_type(&table, columns::SWAP_TYPE, &swap_type.filter())?;

    let present = typed.distinct(columns::METRIC)?;
    Ok(Tenor::ALL
        .iter()
        .filter(|tenor| {
            present
                .iter()
                .any(|value| value.as_str() == Some(tenor.code()))
        })
        .copied()
        .collect())
}

/// The maturity buckets with trading observations for a currency.
///
/// Returned in maturity order regardless of observation order.
pub fn available_buckets(
    store: &dyn TableStore,
    currency: Currency,
) -> Result<Vec<Bucket>, QueryError> {
    let table = fetch(store, currency, sheets::TRADING_DATA)?;

    let present = table.distinct(columns::BUCKET)?;
    Ok(Bucket::ALL
        .iter()
        .filter(|bucket| {
            present
                .iter()
                .any(|value| value.as_str() == Some(bucket.code()))
        })
        .copied()
        .collect())
}

/// The spot dates with trading observations for a currency and swap type,
/// newest first.
pub fn distribution_dates(
    store: &dyn TableStore,
    currency: Currency,
    swap_type: SwapTypeChoice,
) -> Result<Vec<Date>, QueryError> {
    let table = fetch(store, currency, sheets::TRADING_DATA)?;
    let typed = filter::by_type(&table, columns::SWAP_TYPE, &swap_type.filter())?;

    let mut dates = typed
        .distinct(columns::SPOT_DATE)?
        .into_iter()
        .map(|value| {
            value.as_date().ok_or_else(|| TableError::TypeMismatch {
                column: columns::SPOT_DATE.to_string(),
                expected: "date",
                got: value.type_name(),
            })
        })
        .collect::<Result<Vec<Date>, TableError>>()?;
    dates.sort_unstable();
    dates.reverse();
    Ok(dates)
}
