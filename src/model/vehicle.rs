use super::{row_i64, row_str, Row};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i64,
    pub make: String,
    pub model: String,
    pub seats: i64,
    /// e.g. "Sedan", "SUV", "Van"
    pub category: String,
    /// Engine power in kW.
    pub power: i64,
    pub status: String,
}

impl Vehicle {
    pub fn from_fields(
        id: i64,
        make: &str,
        model: &str,
        seats: i64,
        category: &str,
        power: i64,
        status: &str,
    ) -> Option<Self> {
        if id < 0 || seats < 1 || power < 0 {
            return None;
        }
        if make.trim().is_empty() || model.trim().is_empty() {
            return None;
        }
        Some(Vehicle {
            id,
            make: make.to_string(),
            model: model.to_string(),
            seats,
            category: category.to_string(),
            power,
            status: status.to_string(),
        })
    }

    pub fn from_row(row: &Row) -> Option<Self> {
        Self::from_fields(
            row_i64(row, "id")?,
            row_str(row, "make")?,
            row_str(row, "model")?,
            row_i64(row, "seats")?,
            row_str(row, "category")?,
            row_i64(row, "power")?,
            row_str(row, "status")?,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_rules() {
        assert!(Vehicle::from_fields(1001, "VW", "Golf", 4, "Sedan", 110, "Active").is_some());
        assert!(Vehicle::from_fields(1001, "", "Golf", 4, "Sedan", 110, "Active").is_none());
        assert!(Vehicle::from_fields(1001, "VW", "Golf", 0, "Sedan", 110, "Active").is_none());
        assert!(Vehicle::from_fields(-1, "VW", "Golf", 4, "Sedan", 110, "Active").is_none());
    }
}
