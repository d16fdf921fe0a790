//! HTTP handlers for reservations and vehicles.

pub mod reservations;
pub mod vehicles;

use crate::error::AppError;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// `?ids=1,2,3` on list routes.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub ids: Option<String>,
}

/// Parse a comma-separated id list. Blank segments are skipped.
pub(crate) fn parse_ids(raw: &str) -> Result<Vec<i64>, AppError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>()
                .map_err(|_| AppError::BadRequest(format!("invalid id in ids: '{}'", s)))
        })
        .collect()
}

/// Path ids are checked before any data access.
pub(crate) fn path_id(kind: &str, id: i64) -> Result<i64, AppError> {
    if id < 0 {
        return Err(AppError::BadRequest(format!("{} id: {} negative", kind, id)));
    }
    Ok(id)
}

pub(crate) fn body_to_map(value: Value) -> Result<HashMap<String, Value>, AppError> {
    match value {
        Value::Object(m) => Ok(m.into_iter().collect()),
        _ => Err(AppError::BadRequest("body must be a JSON object".into())),
    }
}
