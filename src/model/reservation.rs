use super::{row_i64, row_str, timestamp, Row, TIMESTAMP_FORMAT};
use crate::attributes::Attributes;
use crate::sql::BindValue;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A booking of one vehicle by one customer for a time window.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    pub customer_id: i64,
    pub vehicle_id: i64,
    #[serde(with = "timestamp")]
    pub begin: NaiveDateTime,
    #[serde(with = "timestamp")]
    pub end: NaiveDateTime,
    pub pickup: String,
    pub dropoff: String,
    /// Booking state ("Booked", "Cancelled", ...). Kept as text, like the store column.
    pub status: String,
}

impl Reservation {
    /// Entity factory. None when an id is negative, a timestamp does not match
    /// `yyyy-MM-dd HH:mm:ss`, `end` precedes `begin`, or a text field is blank.
    #[allow(clippy::too_many_arguments)]
    pub fn from_fields(
        id: i64,
        customer_id: i64,
        vehicle_id: i64,
        begin: &str,
        end: &str,
        pickup: &str,
        dropoff: &str,
        status: &str,
    ) -> Option<Self> {
        if id < 0 || customer_id < 0 || vehicle_id < 0 {
            return None;
        }
        let begin = NaiveDateTime::parse_from_str(begin, TIMESTAMP_FORMAT).ok()?;
        let end = NaiveDateTime::parse_from_str(end, TIMESTAMP_FORMAT).ok()?;
        if end < begin {
            return None;
        }
        if [pickup, dropoff, status].iter().any(|s| s.trim().is_empty()) {
            return None;
        }
        Some(Reservation {
            id,
            customer_id,
            vehicle_id,
            begin,
            end,
            pickup: pickup.to_string(),
            dropoff: dropoff.to_string(),
            status: status.to_string(),
        })
    }

    pub fn from_row(row: &Row) -> Option<Self> {
        Self::from_fields(
            row_i64(row, "id")?,
            row_i64(row, "customer_id")?,
            row_i64(row, "vehicle_id")?,
            row_str(row, "begin")?,
            row_str(row, "end")?,
            row_str(row, "pickup")?,
            row_str(row, "dropoff")?,
            row_str(row, "status")?,
        )
    }

    pub fn from_attributes(attrs: &Attributes) -> Option<Self> {
        Self::from_fields(
            attrs.id()?,
            attrs.int("customer_id")?,
            attrs.int("vehicle_id")?,
            attrs.text("begin")?,
            attrs.text("end")?,
            attrs.text("pickup")?,
            attrs.text("dropoff")?,
            attrs.text("status")?,
        )
    }

    /// Column values in store representation.
    pub fn to_values(&self) -> Vec<(&'static str, BindValue)> {
        vec![
            ("id", self.id.into()),
            ("customer_id", self.customer_id.into()),
            ("vehicle_id", self.vehicle_id.into()),
            ("begin", self.begin.format(TIMESTAMP_FORMAT).to_string().into()),
            ("end", self.end.format(TIMESTAMP_FORMAT).to_string().into()),
            ("pickup", self.pickup.as_str().into()),
            ("dropoff", self.dropoff.as_str().into()),
            ("status", self.status.as_str().into()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn booked() -> Option<Reservation> {
        Reservation::from_fields(
            48733,
            54,
            1002,
            "2022-12-20 10:00:00",
            "2022-12-20 20:00:00",
            "Berlin Wedding",
            "Berlin Wedding",
            "Booked",
        )
    }

    #[test]
    fn factory_accepts_valid_fields() {
        let r = booked().unwrap();
        assert_eq!(r.id, 48733);
        assert_eq!(r.begin.format(TIMESTAMP_FORMAT).to_string(), "2022-12-20 10:00:00");
    }

    #[test]
    fn factory_rejects_malformed_timestamp() {
        let r = Reservation::from_fields(1, 1, 1, "20/12/2022 10:00:00", "2022-12-20 20:00:00", "a", "b", "Booked");
        assert!(r.is_none());
    }

    #[test]
    fn factory_rejects_negative_reference_and_reversed_window() {
        assert!(Reservation::from_fields(1, -1, 1, "2022-12-20 10:00:00", "2022-12-20 20:00:00", "a", "b", "Booked").is_none());
        assert!(Reservation::from_fields(1, 1, 1, "2022-12-21 10:00:00", "2022-12-20 20:00:00", "a", "b", "Booked").is_none());
        assert!(Reservation::from_fields(1, 1, 1, "2022-12-20 10:00:00", "2022-12-20 20:00:00", "a", " ", "Booked").is_none());
    }

    #[test]
    fn serializes_timestamps_in_store_format() {
        let v = serde_json::to_value(booked().unwrap()).unwrap();
        assert_eq!(v["begin"], json!("2022-12-20 10:00:00"));
        assert_eq!(v["customer_id"], json!(54));
        let back: Reservation = serde_json::from_value(v).unwrap();
        assert_eq!(back, booked().unwrap());
    }

    #[test]
    fn row_missing_column_is_rejected() {
        let mut row = Row::new();
        row.insert("id".into(), json!(1));
        assert!(Reservation::from_row(&row).is_none());
    }
}
