//! Scalar values exchanged with the store

use super::error::StoreError;
use super::record::Record;
use rusqlite::types::{ToSqlOutput, Value, ValueRef};
use rusqlite::ToSql;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Write as _;

/// Column name → value mapping supplied by a caller, in supplied order
pub type FieldMap = Record;

/// A scalar SQLite value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl SqlValue {
    /// Integer payload, if this is an integer
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            SqlValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Text payload, if this is text
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SqlValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Integer(value)
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        SqlValue::Real(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl TryFrom<serde_json::Value> for SqlValue {
    type Error = StoreError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::Null => Ok(SqlValue::Null),
            serde_json::Value::Bool(b) => Ok(SqlValue::Integer(i64::from(b))),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(SqlValue::Integer(i))
                } else if n.is_u64() {
                    // Integers beyond i64 would only fit as a lossy REAL
                    Err(out_of_range(&n))
                } else {
                    n.as_f64().map(SqlValue::Real).ok_or_else(|| out_of_range(&n))
                }
            }
            serde_json::Value::String(s) => Ok(SqlValue::Text(s)),
            other @ (serde_json::Value::Array(_) | serde_json::Value::Object(_)) => {
                Err(StoreError::validation(format!(
                    "unsupported value {}: only null, boolean, number and string can be stored",
                    other
                )))
            }
        }
    }
}

fn out_of_range(n: &serde_json::Number) -> StoreError {
    StoreError::validation(format!(
        "number {} is out of range for SQLite",
        n
    ))
}

impl<'de> Deserialize<'de> for SqlValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        SqlValue::try_from(value).map_err(D::Error::custom)
    }
}

impl ToSql for SqlValue {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            SqlValue::Null => ToSqlOutput::Owned(Value::Null),
            SqlValue::Integer(i) => ToSqlOutput::from(*i),
            SqlValue::Real(f) => ToSqlOutput::from(*f),
            SqlValue::Text(s) => ToSqlOutput::from(s.as_str()),
        })
    }
}

impl From<ValueRef<'_>> for SqlValue {
    fn from(value: ValueRef<'_>) -> Self {
        match value {
            ValueRef::Null => SqlValue::Null,
            ValueRef::Integer(i) => SqlValue::Integer(i),
            ValueRef::Real(f) => SqlValue::Real(f),
            ValueRef::Text(t) => SqlValue::Text(String::from_utf8_lossy(t).into_owned()),
            // Blobs are rendered as lowercase hex text
            ValueRef::Blob(b) => SqlValue::Text(b.iter().fold(
                String::with_capacity(b.len() * 2),
                |mut acc, byte| {
                    let _ = write!(acc, "{:02x}", byte);
                    acc
                },
            )),
        }
    }
}

/// Convert a JSON object of caller fields into a [`FieldMap`]
pub fn fields_from_json(
    object: serde_json::Map<String, serde_json::Value>,
) -> Result<FieldMap, StoreError> {
    object
        .into_iter()
        .map(|(key, value)| {
            SqlValue::try_from(value)
                .map(|v| (key.clone(), v))
                .map_err(|e| StoreError::validation(format!("field '{}': {}", key, e)))
        })
        .collect()
}
