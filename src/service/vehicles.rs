//! Vehicle data access (read-only).

use super::read::{count_rows, fetch_entities, fetch_entities_by_ids};
use crate::error::AppError;
use crate::model::Vehicle;
use crate::schema::VEHICLE;
use crate::sql::{select_all, select_by_id};
use crate::store::Store;

pub struct VehicleAccess;

impl VehicleAccess {
    pub async fn count(store: &dyn Store) -> Result<u64, AppError> {
        count_rows(store, &VEHICLE).await
    }

    pub async fn find_all(store: &dyn Store) -> Result<Vec<Vehicle>, AppError> {
        fetch_entities(store, &VEHICLE, &select_all(&VEHICLE), Vehicle::from_row).await
    }

    pub async fn find_by_id(store: &dyn Store, id: i64) -> Result<Option<Vehicle>, AppError> {
        let found = fetch_entities(store, &VEHICLE, &select_by_id(&VEHICLE, id), Vehicle::from_row).await?;
        Ok(found.into_iter().next())
    }

    pub async fn find_all_by_ids(store: &dyn Store, ids: &[i64]) -> Result<Vec<Vehicle>, AppError> {
        fetch_entities_by_ids(store, &VEHICLE, ids, Vehicle::from_row).await
    }
}
