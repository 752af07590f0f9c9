//! The aggregation stage.
//!
//! Group-by-sum over a single categorical key, outer joins with numeric
//! fill for merging per-type series, and a trailing rolling mean that
//! never emits partial windows.

use swaps_core::table::{Table, TableError, Value};

/// Groups by one column and sums the given numeric columns.
///
/// Groups are emitted in ascending key order ([`Value::total_cmp`]), so the
/// result is deterministic regardless of source row order. `Null` cells
/// contribute nothing to a sum; a non-numeric cell in a value column is a
/// schema error.
pub fn group_sum(
    table: &Table,
    group_col: &str,
    value_cols: &[&str],
) -> Result<Table, TableError> {
    let key_idx = table.column_index(group_col)?;
    let value_idx = value_cols
        .iter()
        .map(|c| table.column_index(c))
        .collect::<Result<Vec<usize>, TableError>>()?;

    // Sorted accumulator keyed by the group value.
    let mut groups: Vec<(Value, Vec<f64>)> = Vec::new();
    for row in table.rows() {
        let key = &row[key_idx];
        let pos = match groups.binary_search_by(|(k, _)| k.total_cmp(key)) {
            Ok(pos) => pos,
            Err(pos) => {
                groups.insert(pos, (key.clone(), vec![0.0; value_cols.len()]));
                pos
            }
        };
        for (slot, (&col_idx, &name)) in value_idx.iter().zip(value_cols.iter()).enumerate() {
            if let Some(x) = table.numeric(name, &row[col_idx])? {
                groups[pos].1[slot] += x;
            }
        }
    }

    let mut out = Table::new(
        std::iter::once(group_col)
            .chain(value_cols.iter().copied())
            .map(str::to_string),
    );
    for (key, sums) in groups {
        let mut row = vec![key];
        row.extend(sums.into_iter().map(Value::Num));
        out.push_row(row)?;
    }
    Ok(out)
}

/// Full outer join of two keyed tables on `key_col`.
///
/// Both inputs carry the key column plus numeric value columns; the output
/// carries the key, then the left value columns, then the right value
/// columns, with keys in ascending order and missing cells filled with
/// `fill`. Zero fill is the numeric-accumulation policy for merged volume
/// series, distinct from the final null policy, which marks absence
/// explicitly.
pub fn outer_join(
    left: &Table,
    right: &Table,
    key_col: &str,
    fill: f64,
) -> Result<Table, TableError> {
    let left_key = left.column_index(key_col)?;
    let right_key = right.column_index(key_col)?;

    let mut keys: Vec<Value> = left
        .column_values(key_col)?
        .chain(right.column_values(key_col)?)
        .cloned()
        .collect();
    keys.sort_by(|a, b| a.total_cmp(b));
    keys.dedup_by(|a, b| a.total_cmp(b).is_eq());

    let left_values: Vec<String> = side_columns(left, left_key);
    let right_values: Vec<String> = side_columns(right, right_key);

    let mut out = Table::new(
        std::iter::once(key_col.to_string())
            .chain(left_values.iter().cloned())
            .chain(right_values.iter().cloned()),
    );
    for key in keys {
        let mut row = vec![key.clone()];
        row.extend(side_cells(left, left_key, &key, fill));
        row.extend(side_cells(right, right_key, &key, fill));
        out.push_row(row)?;
    }
    Ok(out)
}

fn side_columns(table: &Table, key_idx: usize) -> Vec<String> {
    table
        .columns()
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != key_idx)
        .map(|(_, c)| c.clone())
        .collect()
}

fn side_cells(table: &Table, key_idx: usize, key: &Value, fill: f64) -> Vec<Value> {
    match table
        .rows()
        .iter()
        .find(|row| row[key_idx].total_cmp(key).is_eq())
    {
        Some(row) => row
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != key_idx)
            .map(|(_, v)| v.clone())
            .collect(),
        None => vec![Value::Num(fill); table.columns().len() - 1],
    }
}

/// Appends a column holding the row-wise sum of the addend columns.
pub fn with_sum_column(
    table: &Table,
    name: &str,
    addends: &[&str],
) -> Result<Table, TableError> {
    let addend_idx = addends
        .iter()
        .map(|c| table.column_index(c))
        .collect::<Result<Vec<usize>, TableError>>()?;

    let mut out = Table::new(
        table
            .columns()
            .iter()
            .cloned()
            .chain(std::iter::once(name.to_string())),
    );
    for row in table.rows() {
        let mut sum = 0.0;
        for (&idx, &col) in addend_idx.iter().zip(addends.iter()) {
            if let Some(x) = table.numeric(col, &row[idx])? {
                sum += x;
            }
        }
        let mut row = row.clone();
        row.push(Value::Num(sum));
        out.push_row(row)?;
    }
    Ok(out)
}

/// Trailing rolling mean over `source_col`, appended as `out_col`.
///
/// Rows are consumed in table order (callers sort by the time index
/// first). Rows with fewer than `window` preceding periods are dropped:
/// partial-window values are never emitted, so fewer than `window` input
/// rows produce an empty result.
pub fn rolling_mean(
    table: &Table,
    source_col: &str,
    out_col: &str,
    window: usize,
) -> Result<Table, TableError> {
    let source_idx = table.column_index(source_col)?;

    let mut out = Table::new(
        table
            .columns()
            .iter()
            .cloned()
            .chain(std::iter::once(out_col.to_string())),
    );
    if window == 0 || table.len() < window {
        return Ok(out);
    }

    let values = table
        .rows()
        .iter()
        .map(|row| {
            table
                .numeric(source_col, &row[source_idx])
                .map(|v| v.unwrap_or(0.0))
        })
        .collect::<Result<Vec<f64>, TableError>>()?;

    for (i, row) in table.rows().iter().enumerate().skip(window - 1) {
        let mean = values[i + 1 - window..=i].iter().sum::<f64>() / window as f64;
        let mut row = row.clone();
        row.push(Value::Num(mean));
        out.push_row(row)?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use swaps_core::types::Date;

    fn date(s: &str) -> Value {
        Value::Date(Date::parse(s).unwrap())
    }

    fn trading_rows() -> Table {
        let mut t = Table::new(["spot_date", "notional", "pv01"]);
        for (d, n, p) in [
            ("2025-04-15", 300.0, 3.0),
            ("2025-04-14", 100.0, 1.0),
            ("2025-04-14", 200.0, 2.0),
        ] {
            t.push_row(vec![date(d), Value::from(n), Value::from(p)])
                .unwrap();
        }
        t
    }

    // ========================================
    // group_sum Tests
    // ========================================

    #[test]
    fn test_group_sum_totals_and_order() {
        let g = group_sum(&trading_rows(), "spot_date", &["notional", "pv01"]).unwrap();
        assert_eq!(g.len(), 2);
        assert_eq!(g.columns(), &["spot_date", "notional", "pv01"]);
        // Ascending key order regardless of source order.
        assert_eq!(g.rows()[0][0], date("2025-04-14"));
        assert_eq!(g.rows()[0][1].as_f64(), Some(300.0));
        assert_eq!(g.rows()[0][2].as_f64(), Some(3.0));
        assert_eq!(g.rows()[1][1].as_f64(), Some(300.0));
    }

    #[test]
    fn test_group_sum_null_contributes_nothing() {
        let mut t = Table::new(["spot_date", "notional"]);
        t.push_row(vec![date("2025-04-14"), Value::Null]).unwrap();
        t.push_row(vec![date("2025-04-14"), Value::from(5.0)])
            .unwrap();
        let g = group_sum(&t, "spot_date", &["notional"]).unwrap();
        assert_eq!(g.rows()[0][1].as_f64(), Some(5.0));
    }

    #[test]
    fn test_group_sum_non_numeric_is_schema_error() {
        let mut t = Table::new(["spot_date", "notional"]);
        t.push_row(vec![date("2025-04-14"), Value::from("lots")])
            .unwrap();
        assert!(matches!(
            group_sum(&t, "spot_date", &["notional"]).unwrap_err(),
            TableError::TypeMismatch { .. }
        ));
    }

    // ========================================
    // outer_join Tests
    // ========================================

    #[test]
    fn test_outer_join_zero_fills_missing_dates() {
        let mut libor = Table::new(["spot_date", "Libor Volume"]);
        libor
            .push_row(vec![date("2025-04-14"), Value::from(100.0)])
            .unwrap();
        let mut ois = Table::new(["spot_date", "OIS Volume"]);
        ois.push_row(vec![date("2025-04-15"), Value::from(50.0)])
            .unwrap();

        let joined = outer_join(&libor, &ois, "spot_date", 0.0).unwrap();
        assert_eq!(
            joined.columns(),
            &["spot_date", "Libor Volume", "OIS Volume"]
        );
        assert_eq!(joined.len(), 2);
        assert_eq!(joined.rows()[0][2].as_f64(), Some(0.0));
        assert_eq!(joined.rows()[1][1].as_f64(), Some(0.0));
        assert_eq!(joined.rows()[1][2].as_f64(), Some(50.0));
    }

    #[test]
    fn test_outer_join_matching_keys() {
        let mut libor = Table::new(["spot_date", "Libor Volume"]);
        libor
            .push_row(vec![date("2025-04-14"), Value::from(100.0)])
            .unwrap();
        let mut ois = Table::new(["spot_date", "OIS Volume"]);
        ois.push_row(vec![date("2025-04-14"), Value::from(50.0)])
            .unwrap();

        let joined = outer_join(&libor, &ois, "spot_date", 0.0).unwrap();
        assert_eq!(joined.len(), 1);
        assert_eq!(joined.rows()[0][1].as_f64(), Some(100.0));
        assert_eq!(joined.rows()[0][2].as_f64(), Some(50.0));
    }

    // ========================================
    // with_sum_column Tests
    // ========================================

    #[test]
    fn test_with_sum_column() {
        let mut t = Table::new(["spot_date", "a", "b"]);
        t.push_row(vec![date("2025-04-14"), Value::from(1.0), Value::from(2.0)])
            .unwrap();
        let summed = with_sum_column(&t, "Total", &["a", "b"]).unwrap();
        assert_eq!(summed.columns(), &["spot_date", "a", "b", "Total"]);
        assert_eq!(summed.rows()[0][3].as_f64(), Some(3.0));
    }

    // ========================================
    // rolling_mean Tests
    // ========================================

    fn series(values: &[f64]) -> Table {
        let mut t = Table::new(["spot_date", "Total"]);
        for (i, v) in values.iter().enumerate() {
            let d = Date::from_ymd(2025, 4, (i + 1) as u32).unwrap();
            t.push_row(vec![Value::Date(d), Value::from(*v)]).unwrap();
        }
        t
    }

    #[test]
    fn test_rolling_mean_drops_partial_windows() {
        let t = series(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let rolled = rolling_mean(&t, "Total", "MA", 5).unwrap();
        assert_eq!(rolled.len(), 2);
        assert_eq!(rolled.rows()[0][2].as_f64(), Some(3.0)); // mean(1..=5)
        assert_eq!(rolled.rows()[1][2].as_f64(), Some(4.0)); // mean(2..=6)
    }

    #[test]
    fn test_rolling_mean_fewer_rows_than_window_is_empty() {
        let t = series(&[1.0, 2.0, 3.0, 4.0]);
        let rolled = rolling_mean(&t, "Total", "MA", 5).unwrap();
        assert!(rolled.is_empty());
        assert_eq!(rolled.columns(), &["spot_date", "Total", "MA"]);
    }

    #[test]
    fn test_rolling_mean_exact_window() {
        let t = series(&[2.0, 4.0, 6.0, 8.0, 10.0]);
        let rolled = rolling_mean(&t, "Total", "MA", 5).unwrap();
        assert_eq!(rolled.len(), 1);
        assert_eq!(rolled.rows()[0][2].as_f64(), Some(6.0));
    }
}
