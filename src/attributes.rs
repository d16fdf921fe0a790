//! Attribute maps: loosely-typed request fields parsed against a fixed entity schema.
//!
//! Keys are matched case-insensitively and unrecognized keys are ignored. A value that
//! cannot be coerced to its column kind counts as absent; it only fails the
//! completeness checks below, never the parse itself.

use crate::case::normalize_key;
use crate::error::AppError;
use crate::schema::EntitySchema;
use crate::sql::BindValue;
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug)]
pub struct Attributes {
    schema: &'static EntitySchema,
    /// Present values in schema column order.
    values: Vec<(&'static str, BindValue)>,
}

/// Validated input for UPDATE: target id plus the columns to set.
#[derive(Debug)]
pub struct UpdateSet {
    pub id: i64,
    pub sets: Vec<(&'static str, BindValue)>,
}

impl Attributes {
    pub fn parse(schema: &'static EntitySchema, map: &HashMap<String, Value>) -> Self {
        let mut keyed: Vec<(String, &str, &Value)> = map
            .iter()
            .map(|(k, v)| (normalize_key(k), k.as_str(), v))
            .collect();
        // Deterministic pick when two raw keys normalize to the same column.
        keyed.sort_by_key(|(_, raw, _)| *raw);

        let mut values = Vec::new();
        for c in schema.columns {
            let found = keyed
                .iter()
                .filter(|(name, _, _)| name == c.name)
                .find_map(|(_, _, v)| match BindValue::coerce(v, c.kind)? {
                    BindValue::I64(n) if c.name == schema.pk_column && n < 0 => None,
                    value => Some(value),
                });
            if let Some(v) = found {
                values.push((c.name, v));
            }
        }
        Attributes { schema, values }
    }

    pub fn get(&self, column: &str) -> Option<&BindValue> {
        self.values.iter().find(|(name, _)| *name == column).map(|(_, v)| v)
    }

    pub fn int(&self, column: &str) -> Option<i64> {
        self.get(column).and_then(BindValue::as_i64)
    }

    pub fn text(&self, column: &str) -> Option<&str> {
        self.get(column).and_then(BindValue::as_str)
    }

    /// Non-negative primary key, if present.
    pub fn id(&self) -> Option<i64> {
        self.int(self.schema.pk_column)
    }

    pub fn values(&self) -> &[(&'static str, BindValue)] {
        &self.values
    }

    fn missing(&self) -> Vec<&'static str> {
        self.schema
            .column_names()
            .filter(|name| self.get(name).is_none())
            .collect()
    }

    /// Create mode: every schema column, the id included, must resolve. Returns the id.
    pub fn require_complete(&self) -> Result<i64, AppError> {
        let missing = self.missing();
        match self.id() {
            Some(id) if missing.is_empty() => Ok(id),
            _ => Err(AppError::BadRequest(format!(
                "incomplete attributes for {}: missing {}",
                self.schema.kind,
                missing.join(", ")
            ))),
        }
    }

    /// Update mode: a non-negative id and at least one other column.
    pub fn into_update(self) -> Result<UpdateSet, AppError> {
        let Some(id) = self.id() else {
            return Err(AppError::BadRequest(format!(
                "incomplete attributes for {}: missing or invalid id",
                self.schema.kind
            )));
        };
        let pk = self.schema.pk_column;
        let sets: Vec<_> = self.values.into_iter().filter(|(name, _)| *name != pk).collect();
        if sets.is_empty() {
            return Err(AppError::BadRequest(format!(
                "incomplete attributes for {} id {}: nothing to update",
                self.schema.kind, id
            )));
        }
        Ok(UpdateSet { id, sets })
    }
}

/// Delete mode: only the id is checked.
pub fn require_id(schema: &EntitySchema, id: i64) -> Result<i64, AppError> {
    if id < 0 {
        return Err(AppError::BadRequest(format!("invalid {} id: {}", schema.kind, id)));
    }
    Ok(id)
}
