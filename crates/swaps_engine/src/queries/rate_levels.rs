//! Swap rate levels as a wide, date-indexed time series.

use swaps_core::table::Value;
use swaps_core::types::{Currency, Period, SwapTypeChoice, Tenor};
use swaps_store::{columns, sheets, TableStore};

use crate::error::QueryError;
use crate::record::Record;
use crate::stages::{filter, normalise, reshape, window};

use super::fetch;

/// Parameters of a rate-levels query.
///
/// Defaults mirror the service defaults: USD OIS 2s10s over the full
/// retained year.
#[derive(Debug, Clone, PartialEq)]
pub struct RateLevelsParams {
    /// Underlying currency.
    pub currency: Currency,
    /// Swap-type selection; `Both` disables the type filter.
    pub swap_type: SwapTypeChoice,
    /// One or more curve points to include.
    pub tenors: Vec<Tenor>,
    /// Lookback window.
    pub period: Period,
}

impl Default for RateLevelsParams {
    fn default() -> Self {
        Self {
            currency: Currency::USD,
            swap_type: SwapTypeChoice::Ois,
            tenors: vec![Tenor::Spread2s10s],
            period: Period::OneYear,
        }
    }
}

/// Swap rate levels by term and currency, as percent values.
///
/// Pipeline: tenor membership filter → date window → rate scaled ×100 and
/// rounded to 4 places → swap-type filter → pivot on curve date ×
/// (type, tenor). Output records carry `curve_date` plus one nullable
/// column per type×tenor combination (`ois_2s10s`, `libor_10`, ...),
/// ascending by date.
///
/// # Errors
///
/// [`QueryError::NotFound`] when the currency has no backing table;
/// [`QueryError::EmptyResult`] when the selection pivots to zero rows;
/// [`QueryError::AmbiguousCell`] on duplicate source observations.
pub fn rate_levels(
    store: &dyn TableStore,
    params: &RateLevelsParams,
) -> Result<Vec<Record>, QueryError> {
    tracing::debug!(
        currency = %params.currency,
        swap_type = %params.swap_type,
        period = %params.period,
        "rate levels query"
    );
    let table = fetch(store, params.currency, sheets::INTEREST_RATES)?;

    let tenor_values: Vec<Value> = params
        .tenors
        .iter()
        .map(|t| Value::from(t.code()))
        .collect();
    let selected = filter::is_in(&table, columns::METRIC, &tenor_values)?;
    let windowed = window::lookback(&selected, columns::CURVE_DATE, params.period)?;
    let scaled = normalise::scale_round(&windowed, columns::RATE, 100.0, 4)?;
    let typed = filter::by_type(&scaled, columns::SWAP_TYPE, &params.swap_type.filter())?;

    let wide = reshape::pivot(
        &typed,
        columns::CURVE_DATE,
        &[columns::SWAP_TYPE, columns::METRIC],
        columns::RATE,
    )?;
    if wide.is_empty() {
        return Err(QueryError::EmptyResult {
            detail: format!(
                "no {} {} rate levels for tenors [{}] over {}",
                params.currency,
                params.swap_type,
                tenor_codes(&params.tenors),
                params.period
            ),
        });
    }

    Ok(normalise::nan_to_null(&wide).into_records())
}

fn tenor_codes(tenors: &[Tenor]) -> String {
    tenors
        .iter()
        .map(Tenor::code)
        .collect::<Vec<&str>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use swaps_core::table::Table;
    use swaps_core::types::Date;
    use swaps_store::MemoryStore;

    fn store_with_levels(rows: &[(&str, &str, &str, f64)]) -> MemoryStore {
        let mut table = Table::new([
            columns::CURVE_DATE,
            columns::SWAP_TYPE,
            columns::METRIC,
            columns::RATE,
        ]);
        for (d, ty, m, r) in rows {
            table
                .push_row(vec![
                    Value::Date(Date::parse(d).unwrap()),
                    Value::from(*ty),
                    Value::from(*m),
                    Value::from(*r),
                ])
                .unwrap();
        }
        let mut store = MemoryStore::new();
        store.insert("usd_swaps", sheets::INTEREST_RATES, table);
        store
    }

    #[test]
    fn test_worked_example() {
        let store = store_with_levels(&[
            ("2025-04-14", "OIS", "2s10s", 0.0123),
            ("2025-04-15", "OIS", "2s10s", 0.0130),
        ]);
        let records = rate_levels(&store, &RateLevelsParams::default()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0].get(columns::CURVE_DATE).unwrap().to_string(),
            "2025-04-14"
        );
        assert_eq!(records[0].get("ois_2s10s"), Some(&Value::from(1.23)));
        assert_eq!(records[1].get("ois_2s10s"), Some(&Value::from(1.3)));
    }

    #[test]
    fn test_unknown_currency_is_not_found() {
        let store = MemoryStore::new();
        let err = rate_levels(&store, &RateLevelsParams::default()).unwrap_err();
        assert!(matches!(err, QueryError::NotFound { .. }));
    }

    #[test]
    fn test_no_matching_tenor_is_empty_result() {
        let store = store_with_levels(&[("2025-04-14", "OIS", "10", 0.03)]);
        let err = rate_levels(&store, &RateLevelsParams::default()).unwrap_err();
        match err {
            QueryError::EmptyResult { detail } => {
                assert!(detail.contains("2s10s"));
                assert!(detail.contains("USD"));
            }
            other => panic!("Expected EmptyResult, got {other:?}"),
        }
    }

    #[test]
    fn test_both_types_pivot_side_by_side() {
        let store = store_with_levels(&[
            ("2025-04-14", "OIS", "2s10s", 0.0123),
            ("2025-04-14", "Libor", "2s10s", 0.0110),
        ]);
        let params = RateLevelsParams {
            swap_type: SwapTypeChoice::Both,
            ..RateLevelsParams::default()
        };
        let records = rate_levels(&store, &params).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("libor_2s10s"), Some(&Value::from(1.1)));
        assert_eq!(records[0].get("ois_2s10s"), Some(&Value::from(1.23)));
    }

    #[test]
    fn test_gap_emits_explicit_null() {
        let store = store_with_levels(&[
            ("2025-04-14", "OIS", "2s10s", 0.0123),
            ("2025-04-14", "OIS", "10", 0.0345),
            ("2025-04-15", "OIS", "2s10s", 0.0130),
        ]);
        let params = RateLevelsParams {
            tenors: vec![Tenor::Spread2s10s, Tenor::Y10],
            ..RateLevelsParams::default()
        };
        let records = rate_levels(&store, &params).unwrap();
        assert_eq!(records.len(), 2);
        // No 10Y observation on the 15th: explicit null, not omission.
        assert_eq!(records[1].get("ois_10"), Some(&Value::Null));
    }

    #[test]
    fn test_period_window_applies() {
        let store = store_with_levels(&[
            ("2024-10-14", "OIS", "2s10s", 0.0100),
            ("2025-04-14", "OIS", "2s10s", 0.0123),
            ("2025-04-15", "OIS", "2s10s", 0.0130),
        ]);
        let params = RateLevelsParams {
            period: Period::OneMonth,
            ..RateLevelsParams::default()
        };
        let records = rate_levels(&store, &params).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0].get(columns::CURVE_DATE).unwrap().to_string(),
            "2025-04-14"
        );
    }
}
