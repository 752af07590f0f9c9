//! The reshape stage: long-to-wide pivoting and its single-row inverse.
//!
//! `pivot` turns long observations into a date-indexed wide table with one
//! column per categorical combination; `transpose` turns a keyed one-column
//! aggregate into a single record for distribution queries. Both order
//! their output by the underlying key values, never by insertion order, so
//! repeated queries always produce the same shape.

use swaps_core::table::{Table, TableError, Value};

use crate::error::QueryError;
use crate::record::Record;

/// A wide, row-key-indexed result table.
///
/// The first column is the row key (typically the time index); the
/// remaining columns are one per categorical combination, in deterministic
/// key order. Missing cells hold [`Value::Null`].
#[derive(Debug, Clone, PartialEq)]
pub struct WideTable {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl WideTable {
    /// The column header; the row-key column comes first.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The rows, ascending by row key.
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the pivot produced no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns a new wide table with one column's cells rewritten.
    pub fn map_column<F>(&self, name: &str, mut f: F) -> Result<WideTable, TableError>
    where
        F: FnMut(&Value) -> Value,
    {
        let idx = self
            .columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| TableError::UnknownColumn {
                name: name.to_string(),
            })?;
        let rows = self
            .rows
            .iter()
            .map(|row| {
                let mut row = row.clone();
                row[idx] = f(&row[idx]);
                row
            })
            .collect();
        Ok(WideTable {
            columns: self.columns.clone(),
            rows,
        })
    }

    /// Returns a new wide table with every cell rewritten.
    pub fn map_cells<F>(&self, f: F) -> WideTable
    where
        F: Fn(&Value) -> Value,
    {
        WideTable {
            columns: self.columns.clone(),
            rows: self
                .rows
                .iter()
                .map(|row| row.iter().map(&f).collect())
                .collect(),
        }
    }

    /// Converts into output records, fields in column order.
    pub fn into_records(self) -> Vec<Record> {
        self.rows
            .into_iter()
            .map(|row| {
                let mut record = Record::new();
                for (name, value) in self.columns.iter().zip(row) {
                    record.push(name.clone(), value);
                }
                record
            })
            .collect()
    }
}

/// Pivots long rows into a wide table.
///
/// Groups rows by `row_key` and produces one column per distinct
/// combination of `col_keys` values, named by the lower-cased `_`-joined
/// key values (internal whitespace collapsed to `_`). Rows are sorted
/// ascending by row key, columns by the key tuple.
///
/// # Errors
///
/// A second source value for one (row key, column) cell fails with
/// [`QueryError::AmbiguousCell`]. With filters narrowing to one
/// observation per cell this is unreachable, but a source feeding
/// duplicates must fail loudly rather than have a figure silently picked
/// or averaged.
pub fn pivot(
    table: &Table,
    row_key: &str,
    col_keys: &[&str],
    value_col: &str,
) -> Result<WideTable, QueryError> {
    let row_idx = table.column_index(row_key)?;
    let key_idx = col_keys
        .iter()
        .map(|c| table.column_index(c))
        .collect::<Result<Vec<usize>, TableError>>()?;
    let value_idx = table.column_index(value_col)?;

    let mut keys: Vec<Value> = table.column_values(row_key)?.cloned().collect();
    keys.sort_by(|a, b| a.total_cmp(b));
    keys.dedup_by(|a, b| a.total_cmp(b).is_eq());

    let mut combos: Vec<Vec<Value>> = table
        .rows()
        .iter()
        .map(|row| key_idx.iter().map(|&i| row[i].clone()).collect())
        .collect();
    combos.sort_by(|a, b| cmp_tuple(a, b));
    combos.dedup_by(|a, b| cmp_tuple(a, b).is_eq());

    let col_names: Vec<String> = combos.iter().map(|combo| column_name(combo)).collect();

    let mut grid = vec![vec![Value::Null; combos.len()]; keys.len()];
    let mut filled = vec![vec![false; combos.len()]; keys.len()];
    for row in table.rows() {
        let combo: Vec<Value> = key_idx.iter().map(|&i| row[i].clone()).collect();
        // Both searches hit: the key lists were collected from these rows.
        let found = (
            keys.binary_search_by(|k| k.total_cmp(&row[row_idx])),
            combos.binary_search_by(|c| cmp_tuple(c, &combo)),
        );
        let (Ok(ri), Ok(ci)) = found else { continue };
        if filled[ri][ci] {
            return Err(QueryError::AmbiguousCell {
                row_key: row[row_idx].to_string(),
                column: col_names[ci].clone(),
            });
        }
        filled[ri][ci] = true;
        grid[ri][ci] = row[value_idx].clone();
    }

    let columns = std::iter::once(row_key.to_string())
        .chain(col_names)
        .collect();
    let rows = keys
        .into_iter()
        .zip(grid)
        .map(|(key, cells)| {
            let mut row = vec![key];
            row.extend(cells);
            row
        })
        .collect();
    Ok(WideTable { columns, rows })
}

/// Transposes a keyed one-column aggregate into a single record.
///
/// The record's `"index"` field carries the value column's name; the
/// remaining fields are the key values (in table row order) mapped to
/// their cells.
pub fn transpose(table: &Table, key_col: &str, value_col: &str) -> Result<Record, QueryError> {
    let key_idx = table.column_index(key_col)?;
    let value_idx = table.column_index(value_col)?;

    let mut record = Record::new();
    record.push("index", Value::from(value_col));
    for row in table.rows() {
        record.push(row[key_idx].to_string(), row[value_idx].clone());
    }
    Ok(record)
}

/// Deterministic output column name for a key combination.
fn column_name(combo: &[Value]) -> String {
    combo
        .iter()
        .map(|v| {
            v.to_string()
                .to_lowercase()
                .split_whitespace()
                .collect::<Vec<&str>>()
                .join("_")
        })
        .collect::<Vec<String>>()
        .join("_")
}

fn cmp_tuple(a: &[Value], b: &[Value]) -> std::cmp::Ordering {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| x.total_cmp(y))
        .find(|o| !o.is_eq())
        .unwrap_or(std::cmp::Ordering::Equal)
}
