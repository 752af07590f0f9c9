//! Trades and the pricing curve for a single date.

use swaps_core::table::{Table, TableError, Value};
use swaps_core::types::{Currency, Date};
use swaps_store::{columns, sheets, TableStore};

use crate::error::QueryError;
use crate::record::Record;
use crate::stages::{filter, normalise, reshape};

use super::fetch;

/// Parameters of a swap-trades query.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapTradesParams {
    /// Underlying currency.
    pub currency: Currency,
    /// The spot date to query.
    pub date: Date,
    /// Keep only cleared trades.
    pub cleared_only: bool,
    /// Include forward-starting trades.
    pub include_starting: bool,
}

impl SwapTradesParams {
    /// Builds params for a date with the service defaults (USD, all
    /// clearing states, spot starting only).
    pub fn for_date(date: Date) -> Self {
        Self {
            currency: Currency::USD,
            date,
            cleared_only: false,
            include_starting: false,
        }
    }
}

/// Swap trades against the pricing curve for one date.
///
/// The pricing-curve rows (`type == "Pricing Rate"`) are always included;
/// executed trades are selected by the two flags, then everything is
/// pivoted on time-to-maturity with one column per row category. Strikes
/// are scaled ×100 and rounded to 4 places before pivoting; the maturity
/// key is rounded to 2 places after.
///
/// # Errors
///
/// [`QueryError::NotFound`] when the currency has no backing table;
/// [`QueryError::EmptyResult`] when the date has no rows;
/// [`QueryError::AmbiguousCell`] when two selected rows share a maturity
/// and category.
pub fn swap_trades(
    store: &dyn TableStore,
    params: &SwapTradesParams,
) -> Result<Vec<Record>, QueryError> {
    tracing::debug!(
        currency = %params.currency,
        date = %params.date,
        cleared_only = params.cleared_only,
        include_starting = params.include_starting,
        "swap trades query"
    );
    let table = fetch(store, params.currency, sheets::TRADES_AND_PRICING)?;

    let dated = filter::on_date(&table, columns::SPOT_DATE, params.date)?;
    if dated.is_empty() {
        return Err(QueryError::EmptyResult {
            detail: format!("no trades for {}", params.date),
        });
    }
    let scaled = normalise::scale_round(&dated, columns::STRIKE, 100.0, 4)?;

    let selected = select_rows(&scaled, params.cleared_only, params.include_starting)?;
    let wide = reshape::pivot(
        &selected,
        columns::TIME_TO_MAT,
        &[columns::ROW_TYPE],
        columns::STRIKE,
    )?;
    let wide = normalise::wide_round_column(&wide, columns::TIME_TO_MAT, 2)?;

    Ok(normalise::nan_to_null(&wide).into_records())
}

/// Keeps the pricing-curve rows plus the executed trades the flags select.
///
/// The pricing curve enters exactly once; trade rows never re-match it,
/// whatever their flag values.
fn select_rows(
    table: &Table,
    cleared_only: bool,
    include_starting: bool,
) -> Result<Table, QueryError> {
    let type_idx = table.column_index(columns::ROW_TYPE)?;
    let cleared_idx = table.column_index(columns::CLEARED)?;
    let fwd_idx = table.column_index(columns::FORWARD_STARTING)?;

    let mut out = Table::new(table.columns().iter().cloned());
    for row in table.rows() {
        if row[type_idx].as_str() == Some(columns::PRICING_RATE) {
            out.push_row(row.clone())?;
            continue;
        }
        let cleared = flag(columns::CLEARED, &row[cleared_idx])?;
        let forward_starting = flag(columns::FORWARD_STARTING, &row[fwd_idx])?;
        let keep = match (cleared_only, include_starting) {
            (true, true) => cleared,
            (true, false) => cleared && !forward_starting,
            (false, true) => true,
            (false, false) => !forward_starting,
        };
        if keep {
            out.push_row(row.clone())?;
        }
    }
    Ok(out)
}

fn flag(column: &str, value: &Value) -> Result<bool, TableError> {
    value.as_bool().ok_or_else(|| TableError::TypeMismatch {
        column: column.to_string(),
        expected: "bool",
        got: value.type_name(),
    })
}
