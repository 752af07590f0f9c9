//! Traded volume series with a trailing moving average.

use swaps_core::table::{Table, Value};
use swaps_core::types::{Bucket, Currency, Period, SwapType, VolumeStat};
use swaps_store::{columns, sheets, TableStore};

use crate::error::QueryError;
use crate::record::Record;
use crate::stages::{aggregate, filter, normalise, window};

use super::fetch;

/// Output column for the Libor leg of the merged series.
pub const LIBOR_VOLUME: &str = "Libor Volume";
/// Output column for the OIS leg of the merged series.
pub const OIS_VOLUME: &str = "OIS Volume";
/// Output column for the trailing moving average of the combined total.
pub const TOTAL_MA_VOLUME: &str = "Total 5-Day MA Volume";

/// The fixed trailing window of the moving average, in periods.
pub const ROLLING_WINDOW: usize = 5;

const TOTAL: &str = "Total";

/// Parameters of a rate-volume query.
///
/// Defaults mirror the service defaults: USD notional volume in the 7-10
/// year bucket over the full retained year.
#[derive(Debug, Clone, PartialEq)]
pub struct RateVolumeParams {
    /// Underlying currency.
    pub currency: Currency,
    /// Volume measurement: notional or PV01.
    pub stat: VolumeStat,
    /// One or more maturity buckets to include.
    pub buckets: Vec<Bucket>,
    /// Lookback window.
    pub period: Period,
}

impl Default for RateVolumeParams {
    fn default() -> Self {
        Self {
            currency: Currency::USD,
            stat: VolumeStat::Notional,
            buckets: vec![Bucket::SevenToTen],
            period: Period::OneYear,
        }
    }
}

/// Swap traded volumes by currency, split by swap type.
///
/// Pipeline: bucket membership filter → per-type group-by-sum over the
/// spot date → outer join with zero fill → row-wise total → 5-period
/// trailing mean (partial windows dropped) → integer rounding → date
/// window. The window runs after aggregation so the moving average near
/// the window edge is computed from the full history.
///
/// Output records carry `spot_date`, `Libor Volume`, `OIS Volume`, and
/// `Total 5-Day MA Volume`, ascending by date.
///
/// # Errors
///
/// [`QueryError::NotFound`] when the currency has no backing table;
/// [`QueryError::EmptyResult`] when fewer than
/// [`ROLLING_WINDOW`] trading dates survive the bucket filter, or the date
/// window keeps nothing.
pub fn rate_volume(
    store: &dyn TableStore,
    params: &RateVolumeParams,
) -> Result<Vec<Record>, QueryError> {
    tracing::debug!(
        currency = %params.currency,
        stat = %params.stat,
        period = %params.period,
        "rate volume query"
    );
    let table = fetch(store, params.currency, sheets::TRADING_DATA)?;

    let bucket_values: Vec<Value> = params
        .buckets
        .iter()
        .map(|b| Value::from(b.code()))
        .collect();
    let selected = filter::is_in(&table, columns::BUCKET, &bucket_values)?;

    let stat_col = params.stat.column();
    let libor = volume_leg(&selected, SwapType::Libor, stat_col, LIBOR_VOLUME)?;
    let ois = volume_leg(&selected, SwapType::Ois, stat_col, OIS_VOLUME)?;

    let joined = aggregate::outer_join(&libor, &ois, columns::SPOT_DATE, 0.0)?;
    let totalled = aggregate::with_sum_column(&joined, TOTAL, &[LIBOR_VOLUME, OIS_VOLUME])?;
    let rolled = aggregate::rolling_mean(&totalled, TOTAL, TOTAL_MA_VOLUME, ROLLING_WINDOW)?;
    let rolled = rolled.drop_column(TOTAL)?;

    let rounded = normalise::round_to_int(
        &rolled,
        &[LIBOR_VOLUME, OIS_VOLUME, TOTAL_MA_VOLUME],
    )?;
    let windowed = window::lookback(&rounded, columns::SPOT_DATE, params.period)?;
    if windowed.is_empty() {
        return Err(QueryError::EmptyResult {
            detail: format!(
                "no {} {} volume for buckets [{}] over {}",
                params.currency,
                params.stat,
                bucket_codes(&params.buckets),
                params.period
            ),
        });
    }

    Ok(Record::from_table(&windowed))
}

/// One swap type's volume series: filter, group by spot date, sum, rename.
fn volume_leg(
    table: &Table,
    swap_type: SwapType,
    stat_col: &str,
    out_col: &str,
) -> Result<Table, QueryError> {
    let leg = filter::equals(
        table,
        columns::SWAP_TYPE,
        &Value::from(swap_type.code()),
    )?;
    let grouped = aggregate::group_sum(&leg, columns::SPOT_DATE, &[stat_col])?;
    Ok(grouped.renamed_column(stat_col, out_col)?)
}

fn bucket_codes(buckets: &[Bucket]) -> String {
    buckets
        .iter()
        .map(Bucket::code)
        .collect::<Vec<&str>>()
        .join(",")
}
