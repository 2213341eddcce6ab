//! Sampled foreign-key values

use serde::Serialize;
use std::fmt;

/// A foreign-key value sampled from a child table.
///
/// SQLite columns carry no fixed type, so an orphaned key can be an
/// integer, a real, a string, or a blob. Null never appears here: a null
/// foreign key denotes "no reference" and is excluded by the orphan
/// predicate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum KeyValue {
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl KeyValue {
    /// Convert a SQLite value into a key value, `None` for null.
    pub fn from_sql(value: rusqlite::types::Value) -> Option<Self> {
        use rusqlite::types::Value;
        match value {
            Value::Null => None,
            Value::Integer(v) => Some(KeyValue::Integer(v)),
            Value::Real(v) => Some(KeyValue::Real(v)),
            Value::Text(v) => Some(KeyValue::Text(v)),
            Value::Blob(v) => Some(KeyValue::Blob(v)),
        }
    }
}

impl fmt::Display for KeyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyValue::Integer(v) => write!(f, "{}", v),
            KeyValue::Real(v) => write!(f, "{}", v),
            KeyValue::Text(v) => write!(f, "{}", v),
            KeyValue::Blob(v) => write!(f, "x'{}'", hex::encode(v)),
        }
    }
}
