//! The ordered output record.
//!
//! A query's artifact is an ordered sequence of [`Record`]s: row mappings
//! from column name to scalar or explicit absent marker. Fields serialise
//! in insertion order, which the reshape stage guarantees is the
//! deterministic pivot column order, so identical queries produce
//! byte-identical JSON.

use serde::ser::{SerializeMap, Serializer};

use swaps_core::table::{Table, Value};

/// One output row: an ordered mapping from column name to cell.
///
/// # Examples
///
/// ```
/// use swaps_core::table::Value;
/// use swaps_engine::Record;
///
/// let mut record = Record::new();
/// record.push("curve_date", Value::from("2025-04-15"));
/// record.push("ois_2s10s", Value::from(1.3));
///
/// assert_eq!(record.get("ois_2s10s"), Some(&Value::from(1.3)));
/// assert_eq!(
///     serde_json::to_string(&record).unwrap(),
///     r#"{"curve_date":"2025-04-15","ois_2s10s":1.3}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field; field order is emission order.
    pub fn push(&mut self, name: impl Into<String>, value: Value) {
        self.fields.push((name.into(), value));
    }

    /// Looks a field up by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates fields in emission order.
    pub fn iter(&self) -> impl Iterator<Item = &(String, Value)> {
        self.fields.iter()
    }

    /// Builds one record per table row, fields in table column order.
    pub fn from_table(table: &Table) -> Vec<Record> {
        table
            .rows()
            .iter()
            .map(|row| {
                let mut record = Record::new();
                for (name, value) in table.columns().iter().zip(row.iter()) {
                    record.push(name.clone(), value.clone());
                }
                record
            })
            .collect()
    }
}

impl serde::Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_order_is_emission_order() {
        let mut record = Record::new();
        record.push("zebra", Value::from(1.0));
        record.push("alpha", Value::from(2.0));
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"zebra":1.0,"alpha":2.0}"#);
    }

    #[test]
    fn test_null_serialises_explicitly() {
        let mut record = Record::new();
        record.push("libor_10", Value::Null);
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"libor_10":null}"#
        );
    }

    #[test]
    fn test_from_table() {
        let mut table = Table::new(["a", "b"]);
        table
            .push_row(vec![Value::from(1_i64), Value::from("x")])
            .unwrap();
        table
            .push_row(vec![Value::from(2_i64), Value::from("y")])
            .unwrap();

        let records = Record::from_table(&table);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].get("a"), Some(&Value::from(2_i64)));
        assert_eq!(records[1].get("b"), Some(&Value::from("y")));
    }
}
