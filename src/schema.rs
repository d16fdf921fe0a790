//! Fixed entity schemas: table name, primary key and typed columns per entity.

/// Storage kind of a column. Drives attribute coercion and DDL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Text,
}

impl ColumnKind {
    /// Column type used in bootstrap DDL. Valid for both PostgreSQL and SQLite.
    pub fn sql_type(self) -> &'static str {
        match self {
            ColumnKind::Integer => "BIGINT",
            ColumnKind::Text => "TEXT",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ColumnInfo {
    pub name: &'static str,
    pub kind: ColumnKind,
    /// Target table when the column is a foreign key (always references `id`).
    pub references: Option<&'static str>,
}

const fn int(name: &'static str) -> ColumnInfo {
    ColumnInfo { name, kind: ColumnKind::Integer, references: None }
}

const fn text(name: &'static str) -> ColumnInfo {
    ColumnInfo { name, kind: ColumnKind::Text, references: None }
}

const fn fk(name: &'static str, table: &'static str) -> ColumnInfo {
    ColumnInfo { name, kind: ColumnKind::Integer, references: Some(table) }
}

#[derive(Debug)]
pub struct EntitySchema {
    /// Human-readable entity kind used in error messages.
    pub kind: &'static str,
    pub table_name: &'static str,
    pub pk_column: &'static str,
    pub columns: &'static [ColumnInfo],
}

impl EntitySchema {
    pub fn column(&self, name: &str) -> Option<&ColumnInfo> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|c| c.name)
    }
}

pub const CUSTOMER: EntitySchema = EntitySchema {
    kind: "customer",
    table_name: "customer",
    pk_column: "id",
    columns: &[int("id"), text("name"), text("contact"), text("status")],
};

pub const VEHICLE: EntitySchema = EntitySchema {
    kind: "vehicle",
    table_name: "vehicle",
    pk_column: "id",
    columns: &[
        int("id"),
        text("make"),
        text("model"),
        int("seats"),
        text("category"),
        int("power"),
        text("status"),
    ],
};

pub const RESERVATION: EntitySchema = EntitySchema {
    kind: "reservation",
    table_name: "reservation",
    pk_column: "id",
    columns: &[
        int("id"),
        fk("customer_id", "customer"),
        fk("vehicle_id", "vehicle"),
        text("begin"),
        text("end"),
        text("pickup"),
        text("dropoff"),
        text("status"),
    ],
};

/// Tables in dependency order: referenced tables come first.
pub const ALL: &[&EntitySchema] = &[&CUSTOMER, &VEHICLE, &RESERVATION];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reservation_has_eight_columns_with_fk_targets() {
        assert_eq!(RESERVATION.columns.len(), 8);
        assert_eq!(RESERVATION.column("customer_id").and_then(|c| c.references), Some("customer"));
        assert_eq!(RESERVATION.column("vehicle_id").and_then(|c| c.references), Some("vehicle"));
        assert!(RESERVATION.column("make").is_none());
    }

    #[test]
    fn referenced_tables_precede_referencing_ones() {
        for (i, schema) in ALL.iter().enumerate() {
            for target in schema.columns.iter().filter_map(|c| c.references) {
                let pos = ALL.iter().position(|s| s.table_name == target);
                assert!(matches!(pos, Some(p) if p < i), "{} before {}", target, schema.table_name);
            }
        }
    }
}
