//! Bind values for generated statements, coerced from JSON attribute values per column kind.

use crate::schema::ColumnKind;
use serde_json::Value;

/// A value bound to a `$n` placeholder. Every caller-supplied value travels this way.
#[derive(Clone, Debug, PartialEq)]
pub enum BindValue {
    I64(i64),
    Text(String),
}

impl BindValue {
    /// Coerce a JSON value for a column of `kind`. Returns None when the value cannot be
    /// read as that kind: integers accept a JSON integer or a decimal string, text
    /// accepts a JSON string. JSON null is never coerced.
    pub fn coerce(v: &Value, kind: ColumnKind) -> Option<Self> {
        match kind {
            ColumnKind::Integer => parse_number(v).map(BindValue::I64),
            ColumnKind::Text => v.as_str().map(|s| BindValue::Text(s.to_string())),
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            BindValue::I64(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            BindValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<i64> for BindValue {
    fn from(n: i64) -> Self {
        BindValue::I64(n)
    }
}

impl From<&str> for BindValue {
    fn from(s: &str) -> Self {
        BindValue::Text(s.to_string())
    }
}

impl From<String> for BindValue {
    fn from(s: String) -> Self {
        BindValue::Text(s)
    }
}

fn parse_number(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse::<i64>().ok(),
        _ => None,
    }
}
