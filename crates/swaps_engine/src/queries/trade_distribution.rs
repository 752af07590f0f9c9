//! Volume distribution across maturity buckets for a single date.

use swaps_core::types::{Currency, Date, SwapTypeChoice, VolumeStat};
use swaps_store::{columns, sheets, TableStore};

use crate::error::QueryError;
use crate::record::Record;
use crate::stages::{aggregate, filter, normalise, reshape};

use super::fetch;

/// Parameters of a trade-distribution query.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeDistributionParams {
    /// Underlying currency.
    pub currency: Currency,
    /// Swap-type selection; the default `Both` aggregates across types.
    pub swap_type: SwapTypeChoice,
    /// Volume measurement: notional or PV01.
    pub stat: VolumeStat,
    /// The spot date to distribute over.
    pub date: Date,
}

impl TradeDistributionParams {
    /// Builds params for a date with the service defaults (USD, both
    /// types, notional).
    pub fn for_date(date: Date) -> Self {
        Self {
            currency: Currency::USD,
            swap_type: SwapTypeChoice::Both,
            stat: VolumeStat::Notional,
            date,
        }
    }
}

/// The traded-volume distribution across maturity buckets on one date.
///
/// Pipeline: swap-type filter → spot-date equality filter → group-by-sum
/// over the bucket → integer rounding → single-row transposition. The one
/// output record maps each present bucket to its volume, with the
/// `"index"` field carrying the selected stat's column name.
///
/// # Errors
///
/// [`QueryError::NotFound`] when the currency has no backing table;
/// [`QueryError::EmptyResult`] when no trading rows exist for the date.
pub fn trade_distribution(
    store: &dyn TableStore,
    params: &TradeDistributionParams,
) -> Result<Vec<Record>, QueryError> {
    tracing::debug!(
        currency = %params.currency,
        swap_type = %params.swap_type,
        date = %params.date,
        "trade distribution query"
    );
    let table = fetch(store, params.currency, sheets::TRADING_DATA)?;

    let typed = filter::by_type(&table, columns::SWAP_TYPE, &params.swap_type.filter())?;
    let dated = filter::on_date(&typed, columns::SPOT_DATE, params.date)?;
    if dated.is_empty() {
        return Err(QueryError::EmptyResult {
            detail: format!(
                "no {} trading data for {}",
                params.swap_type, params.date
            ),
        });
    }

    let grouped = aggregate::group_sum(
        &dated,
        columns::BUCKET,
        &[columns::NOTIONAL, columns::PV01],
    )?;
    let rounded = normalise::round_to_int(&grouped, &[columns::NOTIONAL, columns::PV01])?;

    let stat_col = params.stat.column();
    let other = match params.stat {
        VolumeStat::Notional => columns::PV01,
        VolumeStat::Pv01 => columns::NOTIONAL,
    };
    let selected = rounded.drop_column(other)?;

    let record = reshape::transpose(&selected, columns::BUCKET, stat_col)?;
    Ok(vec![record])
}

#[cfg(test)]
mod tests {
    use super::*;
    use swaps_core::table::{Table, Value};
    use swaps_store::MemoryStore;

    fn store_with_trading(rows: &[(&str, &str, &str, f64, f64)]) -> MemoryStore {
        let mut table = Table::new([
            columns::SPOT_DATE,
            columns::SWAP_TYPE,
            columns::BUCKET,
            columns::NOTIONAL,
            columns::PV01,
        ]);
        for (d, ty, b, n, p) in rows {
            table
                .push_row(vec![
                    Value::Date(Date::parse(d).unwrap()),
                    Value::from(*ty),
                    Value::from(*b),
                    Value::from(*n),
                    Value::from(*p),
                ])
                .unwrap();
        }
        let mut store = MemoryStore::new();
        store.insert("usd_swaps", sheets::TRADING_DATA, table);
        store
    }

    fn april_15() -> Date {
        Date::parse("2025-04-15").unwrap()
    }

    #[test]
    fn test_distribution_single_record() {
        let store = store_with_trading(&[
            ("2025-04-15", "OIS", "7-10", 300.4, 3.0),
            ("2025-04-15", "Libor", "7-10", 100.0, 1.0),
            ("2025-04-15", "OIS", "0-1", 50.0, 0.5),
            ("2025-04-14", "OIS", "7-10", 999.0, 9.9),
        ]);
        let records =
            trade_distribution(&store, &TradeDistributionParams::for_date(april_15())).unwrap();

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.get("index"), Some(&Value::from("notional")));
        // Both types aggregated; the 14th excluded; 400.4 rounds to 400.
        assert_eq!(record.get("7-10"), Some(&Value::Int(400)));
        assert_eq!(record.get("0-1"), Some(&Value::Int(50)));
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn test_type_filter_narrows_distribution() {
        let store = store_with_trading(&[
            ("2025-04-15", "OIS", "7-10", 300.0, 3.0),
            ("2025-04-15", "Libor", "7-10", 100.0, 1.0),
        ]);
        let params = TradeDistributionParams {
            swap_type: SwapTypeChoice::Libor,
            ..TradeDistributionParams::for_date(april_15())
        };
        let records = trade_distribution(&store, &params).unwrap();
        assert_eq!(records[0].get("7-10"), Some(&Value::Int(100)));
    }

    #[test]
    fn test_pv01_stat() {
        let store = store_with_trading(&[("2025-04-15", "OIS", "7-10", 300.0, 3.6)]);
        let params = TradeDistributionParams {
            stat: VolumeStat::Pv01,
            ..TradeDistributionParams::for_date(april_15())
        };
        let records = trade_distribution(&store, &params).unwrap();
        assert_eq!(records[0].get("index"), Some(&Value::from("pv01")));
        assert_eq!(records[0].get("7-10"), Some(&Value::Int(4)));
    }

    #[test]
    fn test_zero_rows_for_date_is_empty_result() {
        let store = store_with_trading(&[("2025-04-14", "OIS", "7-10", 300.0, 3.0)]);
        let err = trade_distribution(&store, &TradeDistributionParams::for_date(april_15()))
            .unwrap_err();
        match err {
            QueryError::EmptyResult { detail } => {
                assert!(detail.contains("2025-04-15"));
                assert!(detail.contains("Both"));
            }
            other => panic!("Expected EmptyResult, got {other:?}"),
        }
    }
}
