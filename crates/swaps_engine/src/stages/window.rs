//! The date-window stage.
//!
//! Resolves a lookback period against the dates actually present in the
//! (already filtered) table. The anchor is always the latest present date,
//! never the wall clock, so a query over stale or partial data reproduces
//! exactly.

use swaps_core::table::{Table, TableError, Value};
use swaps_core::types::{Date, Period};

/// Sorts ascending on the time column and truncates to the period.
///
/// - An empty table is returned unchanged (emptiness is diagnosed by the
///   query operation, not here).
/// - [`Period::OneYear`] is a pass-through: the feed retains at most a
///   year of history.
/// - The month periods keep rows dated on or after the latest present
///   date minus N calendar months.
/// - [`Period::YearToDate`] keeps rows dated on or after January 1 of the
///   latest present date's year.
///
/// The output is always sorted ascending by `time_col`; the time index is
/// strictly the set of dates present in the source rows.
pub fn lookback(table: &Table, time_col: &str, period: Period) -> Result<Table, TableError> {
    let sorted = table.sorted_by(time_col)?;
    if sorted.is_empty() {
        return Ok(sorted);
    }

    let idx = sorted.column_index(time_col)?;
    let anchor = cell_date(time_col, &sorted.rows()[sorted.len() - 1][idx])?;

    let cutoff = match period {
        Period::OneYear => return Ok(sorted),
        Period::YearToDate => anchor.start_of_year(),
        Period::OneMonth | Period::ThreeMonths | Period::SixMonths => {
            // months() is Some for every month period.
            anchor.months_back(period.months().unwrap_or(0))
        }
    };

    // Validate every cell before cutting so a stray non-date cell is a
    // schema error, not a silently dropped row.
    for row in sorted.rows() {
        cell_date(time_col, &row[idx])?;
    }

    Ok(sorted.retain(|row| match row[idx].as_date() {
        Some(d) => d >= cutoff,
        None => false,
    }))
}

fn cell_date(column: &str, value: &Value) -> Result<Date, TableError> {
    value.as_date().ok_or_else(|| TableError::TypeMismatch {
        column: column.to_string(),
        expected: "date",
        got: value.type_name(),
    })
}
