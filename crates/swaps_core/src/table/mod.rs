//! The long-format table data model.
//!
//! This module provides:
//! - [`Value`]: a typed table cell with a total order
//! - [`Table`]: an immutable long-format relation (fixed columns, ordered rows)
//! - [`TableError`]: structured schema-level errors
//!
//! A `Table` is a snapshot: the transformation helpers (`retain`,
//! `sorted_by`, `map_column`, `drop_column`) all return a new `Table` and
//! leave the receiver untouched, so a query pipeline never shares mutable
//! state between requests.

mod value;

pub use value::Value;

use thiserror::Error;

/// Schema-level table errors.
///
/// These indicate malformed source data or a programming error in a stage,
/// never a query-shape problem: the caller's selectors are validated
/// before a table is touched.
///
/// # Variants
/// - `UnknownColumn`: A referenced column is not in the table header
/// - `RowWidth`: A pushed row does not match the header arity
/// - `TypeMismatch`: A cell does not have the type a stage requires
///
/// # Examples
/// ```
/// use swaps_core::table::TableError;
///
/// let err = TableError::UnknownColumn { name: "rate".to_string() };
/// assert_eq!(format!("{}", err), "Unknown column: rate");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A referenced column is not present in the table header.
    #[error("Unknown column: {name}")]
    UnknownColumn {
        /// The missing column name
        name: String,
    },

    /// A pushed row does not match the header arity.
    #[error("Row width mismatch: expected {expected} values, got {got}")]
    RowWidth {
        /// Number of header columns
        expected: usize,
        /// Number of values in the rejected row
        got: usize,
    },

    /// A cell does not have the type a stage requires.
    #[error("Type mismatch in column {column}: expected {expected}, got {got}")]
    TypeMismatch {
        /// The offending column name
        column: String,
        /// The required cell type
        expected: &'static str,
        /// The actual cell type
        got: &'static str,
    },
}

/// An in-memory long-format relation with typed cells.
///
/// Columns are fixed per instance; rows are ordered and carry no identity
/// beyond position. All transformation helpers are pure: they build and
/// return a new `Table`.
///
/// # Examples
///
/// ```
/// use swaps_core::table::{Table, Value};
/// use swaps_core::types::Date;
///
/// let mut table = Table::new(["curve_date", "metric", "rate"]);
/// table
///     .push_row(vec![
///         Value::Date(Date::parse("2025-04-15").unwrap()),
///         Value::from("2s10s"),
///         Value::from(0.0123),
///     ])
///     .unwrap();
///
/// assert_eq!(table.len(), 1);
/// let idx = table.column_index("rate").unwrap();
/// assert_eq!(table.rows()[0][idx].as_f64(), Some(0.0123));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Creates an empty table with the given header.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Table {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row, checking its arity against the header.
    ///
    /// # Returns
    /// `Err(TableError::RowWidth)` if the row length does not match the
    /// number of columns.
    pub fn push_row(&mut self, row: Vec<Value>) -> Result<(), TableError> {
        if row.len() != self.columns.len() {
            return Err(TableError::RowWidth {
                expected: self.columns.len(),
                got: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// The column header.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The rows, in order.
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Resolves a column name to its index.
    ///
    /// # Returns
    /// `Err(TableError::UnknownColumn)` when the name is not in the header.
    pub fn column_index(&self, name: &str) -> Result<usize, TableError> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| TableError::UnknownColumn {
                name: name.to_string(),
            })
    }

    /// Iterates over one column's cells, in row order.
    pub fn column_values(&self, name: &str) -> Result<impl Iterator<Item = &Value>, TableError> {
        let idx = self.column_index(name)?;
        Ok(self.rows.iter().map(move |row| &row[idx]))
    }

    /// Returns a new table containing the rows that satisfy the predicate.
    ///
    /// Row order is preserved.
    pub fn retain<F>(&self, mut pred: F) -> Table
    where
        F: FnMut(&[Value]) -> bool,
    {
        Table {
            columns: self.columns.clone(),
            rows: self
                .rows
                .iter()
                .filter(|row| pred(row))
                .cloned()
                .collect(),
        }
    }

    /// Returns a new table sorted ascending on one column.
    ///
    /// The sort is stable and uses [`Value::total_cmp`], so ties keep
    /// their source order.
    pub fn sorted_by(&self, name: &str) -> Result<Table, TableError> {
        let idx = self.column_index(name)?;
        let mut rows = self.rows.clone();
        rows.sort_by(|a, b| a[idx].total_cmp(&b[idx]));
        Ok(Table {
            columns: self.columns.clone(),
            rows,
        })
    }

    /// The distinct values of one column, in first-seen order.
    pub fn distinct(&self, name: &str) -> Result<Vec<Value>, TableError> {
        let idx = self.column_index(name)?;
        let mut seen: Vec<Value> = Vec::new();
        for row in &self.rows {
            if !seen.contains(&row[idx]) {
                seen.push(row[idx].clone());
            }
        }
        Ok(seen)
    }

    /// Returns a new table with one column's cells rewritten.
    pub fn map_column<F>(&self, name: &str, mut f: F) -> Result<Table, TableError>
    where
        F: FnMut(&Value) -> Value,
    {
        let idx = self.column_index(name)?;
        let rows = self
            .rows
            .iter()
            .map(|row| {
                let mut row = row.clone();
                row[idx] = f(&row[idx]);
                row
            })
            .collect();
        Ok(Table {
            columns: self.columns.clone(),
            rows,
        })
    }

    /// Returns a new table with one column renamed.
    pub fn renamed_column(&self, from: &str, to: &str) -> Result<Table, TableError> {
        let idx = self.column_index(from)?;
        let mut columns = self.columns.clone();
        columns[idx] = to.to_string();
        Ok(Table {
            columns,
            rows: self.rows.clone(),
        })
    }

    /// Returns a new table without the named column.
    pub fn drop_column(&self, name: &str) -> Result<Table, TableError> {
        let idx = self.column_index(name)?;
        let columns = self
            .columns
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != idx)
            .map(|(_, c)| c.clone())
            .collect();
        let rows = self
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|(i, _)| *i != idx)
                    .map(|(_, v)| v.clone())
                    .collect()
            })
            .collect();
        Ok(Table { columns, rows })
    }

    /// The numeric content of a cell that a stage requires to be numeric.
    ///
    /// `Null` cells read as `None`; any other non-numeric variant is a
    /// [`TableError::TypeMismatch`].
    pub fn numeric(&self, column: &str, value: &Value) -> Result<Option<f64>, TableError> {
        match value {
            Value::Null => Ok(None),
            v => v
                .as_f64()
                .map(Some)
                .ok_or_else(|| TableError::TypeMismatch {
                    column: column.to_string(),
                    expected: "num",
                    got: v.type_name(),
                }),
        }
    }
}
