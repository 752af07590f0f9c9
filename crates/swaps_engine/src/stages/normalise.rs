//! The normalisation stage.
//!
//! Unit scaling, per-column-family rounding, and the final null policy.
//! Rate columns are scaled ×100 (fraction to percent) and rounded to 4
//! places, tenor-in-years to 2 places, volume columns to whole integers.
//! Any non-finite float surviving a join or pivot becomes an explicit
//! absent marker, never zero.

use swaps_core::table::{Table, TableError, Value};

use crate::stages::reshape::WideTable;

/// Rounds to a fixed number of decimal places.
pub fn round_decimals(x: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (x * factor).round() / factor
}

/// Multiplies a numeric column by `factor`, then rounds to `decimals`.
///
/// `Null` cells pass through untouched; a non-numeric cell is a schema
/// error.
pub fn scale_round(
    table: &Table,
    column: &str,
    factor: f64,
    decimals: u32,
) -> Result<Table, TableError> {
    let idx = table.column_index(column)?;
    let mut out = Table::new(table.columns().iter().cloned());
    for row in table.rows() {
        let mut row = row.clone();
        row[idx] = match table.numeric(column, &row[idx])? {
            Some(x) => Value::Num(round_decimals(x * factor, decimals)),
            None => Value::Null,
        };
        out.push_row(row)?;
    }
    Ok(out)
}

/// Rounds numeric columns to the nearest whole integer.
///
/// The cells become [`Value::Int`], matching the integer volume families
/// of the output contract. `Null` cells pass through untouched.
pub fn round_to_int(table: &Table, columns: &[&str]) -> Result<Table, TableError> {
    let idx = columns
        .iter()
        .map(|c| table.column_index(c))
        .collect::<Result<Vec<usize>, TableError>>()?;

    let mut out = Table::new(table.columns().iter().cloned());
    for row in table.rows() {
        let mut row = row.clone();
        for (&i, &name) in idx.iter().zip(columns.iter()) {
            row[i] = match table.numeric(name, &row[i])? {
                Some(x) => Value::Int(x.round() as i64),
                None => Value::Null,
            };
        }
        out.push_row(row)?;
    }
    Ok(out)
}

/// Rounds one wide-table column to a fixed number of decimal places.
///
/// Used on the numeric row-key column of the trades pivot (tenor in
/// years, 2 places). Non-numeric cells pass through untouched.
pub fn wide_round_column(
    wide: &WideTable,
    column: &str,
    decimals: u32,
) -> Result<WideTable, TableError> {
    wide.map_column(column, |v| match v.as_f64() {
        Some(x) => Value::Num(round_decimals(x, decimals)),
        None => v.clone(),
    })
}

/// Converts every non-finite float cell to the explicit absent marker.
///
/// The final null policy: a consumer must be able to tell "no data" from
/// zero, so a NaN or infinity produced upstream is emitted as `Null`,
/// never dropped and never zero-filled.
pub fn nan_to_null(wide: &WideTable) -> WideTable {
    wide.map_cells(|v| match v {
        Value::Num(x) if !x.is_finite() => Value::Null,
        other => other.clone(),
    })
}
