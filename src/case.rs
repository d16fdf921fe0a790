//! Attribute key normalization: request keys in any case (UPPER_SNAKE, snake_case, camelCase) -> snake_case column names.

/// Convert a single identifier from camelCase to snake_case.
/// e.g. "customerId" -> "customer_id", "vehicleID" -> "vehicle_id"
pub fn to_snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev: Option<char> = None;
    for c in s.chars() {
        if c.is_uppercase() {
            if matches!(prev, Some(p) if p.is_lowercase() || p.is_ascii_digit()) {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
        prev = Some(c);
    }
    out
}

/// Column name for an attribute key. Keys without lowercase letters ("CUSTOMER_ID", "ID")
/// are only lowercased; mixed-case keys go through camelCase splitting.
pub fn normalize_key(key: &str) -> String {
    let key = key.trim();
    if key.chars().any(char::is_lowercase) {
        to_snake_case(key)
    } else {
        key.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upper_snake_is_lowercased() {
        assert_eq!(normalize_key("CUSTOMER_ID"), "customer_id");
        assert_eq!(normalize_key("ID"), "id");
        assert_eq!(normalize_key("END"), "end");
    }

    #[test]
    fn camel_case_is_split() {
        assert_eq!(normalize_key("customerId"), "customer_id");
        assert_eq!(normalize_key("vehicleID"), "vehicle_id");
        assert_eq!(normalize_key("Dropoff"), "dropoff");
    }

    #[test]
    fn mixed_snake_keeps_single_underscore() {
        assert_eq!(normalize_key("Customer_Id"), "customer_id");
        assert_eq!(normalize_key(" status "), "status");
    }
}
