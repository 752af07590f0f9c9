//! The typed table cell.

use std::cmp::Ordering;

use serde::ser::Serializer;

use crate::types::Date;

/// A single typed cell of a [`Table`](super::Table) or an output record.
///
/// Source tables carry `Str`, `Num`, `Date`, and `Bool` cells. `Int` is
/// produced by integer normalisation (volume columns) and `Null` by pivot
/// gaps and the final null policy, so that consumers can distinguish "no
/// data" from zero.
///
/// # Ordering
///
/// [`Value::total_cmp`] defines the total order used wherever the engine
/// must order deterministically: variants rank `Null < Bool < numeric <
/// Str < Date`, numbers compare numerically across `Int`/`Num` (with
/// `f64::total_cmp`), strings lexicographically, dates in calendar order.
///
/// # Examples
///
/// ```
/// use swaps_core::table::Value;
///
/// let a = Value::from("Libor");
/// let b = Value::from("OIS");
/// assert!(a.total_cmp(&b).is_lt());
///
/// assert_eq!(Value::from(1.5).as_f64(), Some(1.5));
/// assert!(Value::Null.is_null());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A categorical or free-form string.
    Str(String),
    /// A 64-bit float.
    Num(f64),
    /// A 64-bit integer, produced by integer normalisation.
    Int(i64),
    /// A calendar date.
    Date(Date),
    /// A boolean flag.
    Bool(bool),
    /// Explicit absence, distinct from zero and from the empty string.
    Null,
}

impl Value {
    /// Returns the string content, if this is a `Str` cell.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric content of a `Num` or `Int` cell.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Num(x) => Some(*x),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Returns the date content, if this is a `Date` cell.
    pub fn as_date(&self) -> Option<Date> {
        match self {
            Value::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Returns the boolean content, if this is a `Bool` cell.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns true for the explicit absent marker.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The name of the variant, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Str(_) => "str",
            Value::Num(_) => "num",
            Value::Int(_) => "int",
            Value::Date(_) => "date",
            Value::Bool(_) => "bool",
            Value::Null => "null",
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Num(_) | Value::Int(_) => 2,
            Value::Str(_) => 3,
            Value::Date(_) => 4,
        }
    }

    /// Total order over cells: variant rank, then within-variant order.
    ///
    /// `Num` and `Int` compare numerically with each other.
    pub fn total_cmp(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Str(a), Value::Str(b)) => a.cmp(b),
            (Value::Date(a), Value::Date(b)) => a.cmp(b),
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (a, b) if a.rank() == 2 && b.rank() == 2 => {
                // Mixed Int/Num comparison goes through f64.
                let x = a.as_f64().unwrap_or(f64::NAN);
                let y = b.as_f64().unwrap_or(f64::NAN);
                x.total_cmp(&y)
            }
            (a, b) => a.rank().cmp(&b.rank()),
        }
    }
}

impl std::fmt::Display for Value {
    /// Formats the scalar content; used for column naming and diagnostics.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{}", s),
            Value::Num(x) => write!(f, "{}", x),
            Value::Int(i) => write!(f, "{}", i),
            Value::Date(d) => write!(f, "{}", d),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Null => write!(f, "null"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Num(x)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<Date> for Value {
    fn from(d: Date) -> Self {
        Value::Date(d)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl serde::Serialize for Value {
    /// Serialises to the natural JSON scalar; dates become ISO strings and
    /// `Null` becomes JSON null.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Str(s) => serializer.serialize_str(s),
            Value::Num(x) => serializer.serialize_f64(*x),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Date(d) => serializer.serialize_str(&d.to_string()),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Null => serializer.serialize_none(),
        }
    }
}
