//! Reservation handlers: list, read, create, update, delete.

use super::{body_to_map, parse_ids, path_id, ListParams};
use crate::error::AppError;
use crate::response::{success_many, success_one, success_one_ok};
use crate::service::ReservationAccess;
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<ListParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = query?;
    let store = state.store.as_ref();
    let found = match params.ids.as_deref() {
        Some(raw) => ReservationAccess::find_all_by_ids(store, &parse_ids(raw)?).await?,
        None => ReservationAccess::find_all(store).await?,
    };
    Ok(success_many(found))
}

pub async fn read(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;
    tracing::info!(id, "GET /reservations/{{id}}");
    let id = path_id("reservation", id)?;
    let found = ReservationAccess::find_by_id(state.store.as_ref(), id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("reservation id {} not found", id)))?;
    Ok(success_one_ok(found))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = body?;
    tracing::info!("POST /reservations");
    let body = body_to_map(body)?;
    let created = ReservationAccess::create(state.store.as_ref(), &body).await?;
    Ok(success_one(created))
}

pub async fn update(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = body?;
    tracing::info!("PUT /reservations");
    let body = body_to_map(body)?;
    ReservationAccess::update(state.store.as_ref(), &body).await?;
    Ok(StatusCode::ACCEPTED)
}

pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;
    tracing::info!(id, "DELETE /reservations/{{id}}");
    let id = path_id("reservation", id)?;
    ReservationAccess::delete(state.store.as_ref(), id).await?;
    Ok(StatusCode::ACCEPTED)
}
