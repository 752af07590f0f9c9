//! Categorical filter predicates.
//!
//! All filters are pure: they return a new filtered table, preserve row
//! order, and never touch the input. Multi-value selection is set
//! membership (`IN`): a row passes when it matches any requested value.

use swaps_core::table::{Table, TableError, Value};
use swaps_core::types::{Date, TypeFilter};

/// Keeps rows whose `column` cell equals `value`.
pub fn equals(table: &Table, column: &str, value: &Value) -> Result<Table, TableError> {
    let idx = table.column_index(column)?;
    Ok(table.retain(|row| &row[idx] == value))
}

/// Keeps rows whose `column` cell is a member of `values`.
///
/// Membership, not conjunction: a superset of `values` always yields a
/// superset of rows.
pub fn is_in(table: &Table, column: &str, values: &[Value]) -> Result<Table, TableError> {
    let idx = table.column_index(column)?;
    Ok(table.retain(|row| values.contains(&row[idx])))
}

/// Applies an explicit swap-type filter to `column`.
///
/// [`TypeFilter::All`] passes every row untouched; [`TypeFilter::Only`]
/// keeps rows equal to the type's wire spelling. The "no filter" case is a
/// tagged variant, never a sentinel value compared against category cells.
pub fn by_type(table: &Table, column: &str, filter: &TypeFilter) -> Result<Table, TableError> {
    match filter {
        TypeFilter::All => Ok(table.clone()),
        TypeFilter::Only(swap_type) => {
            equals(table, column, &Value::from(swap_type.code()))
        }
    }
}

/// Keeps rows whose `column` date cell equals `date`.
pub fn on_date(table: &Table, column: &str, date: Date) -> Result<Table, TableError> {
    equals(table, column, &Value::Date(date))
}
