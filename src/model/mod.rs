//! Domain entities and their factories. A factory returns None for any field set that
//! breaks entity rules; callers decide whether that is a skipped row or a conflict.

pub mod reservation;
pub mod vehicle;

pub use reservation::Reservation;
pub use vehicle::Vehicle;

use serde_json::{Map, Value};

/// One decoded store row, keyed by column name.
pub type Row = Map<String, Value>;

/// Text format of reservation timestamps, in the store and on the wire.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub(crate) fn row_i64(row: &Row, col: &str) -> Option<i64> {
    row.get(col).and_then(Value::as_i64)
}

pub(crate) fn row_str<'a>(row: &'a Row, col: &str) -> Option<&'a str> {
    row.get(col).and_then(Value::as_str)
}

/// Serde adapter for `NaiveDateTime` in `TIMESTAMP_FORMAT`.
pub mod timestamp {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(v: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&v.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let s = String::deserialize(d)?;
        NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}
