use super::{parse_ids, path_id, ListParams};
use crate::error::AppError;
use crate::response::{success_many, success_one_ok};
use crate::service::VehicleAccess;
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::IntoResponse,
};

pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<ListParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = query?;
    let store = state.store.as_ref();
    let found = match params.ids.as_deref() {
        Some(raw) => VehicleAccess::find_all_by_ids(store, &parse_ids(raw)?).await?,
        None => VehicleAccess::find_all(store).await?,
    };
    Ok(success_many(found))
}

pub async fn read(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;
    tracing::info!(id, "GET /vehicles/{{id}}");
    let id = path_id("vehicle", id)?;
    let found = VehicleAccess::find_by_id(state.store.as_ref(), id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("vehicle id {} not found", id)))?;
    tracing::info!(id = found.id, make = %found.make, "vehicle found");
    Ok(success_one_ok(found))
}
