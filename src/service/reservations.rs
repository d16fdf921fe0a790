//! Reservation data access: counts, lookups and attribute-map driven writes.

use super::read::{count_rows, fetch_entities, fetch_entities_by_ids};
use crate::attributes::{require_id, Attributes};
use crate::error::AppError;
use crate::model::Reservation;
use crate::schema::RESERVATION;
use crate::sql::{delete, insert, select_all, select_by_id, update};
use crate::store::{classify_write_error, Store};
use serde_json::Value;
use std::collections::HashMap;

pub struct ReservationAccess;

impl ReservationAccess {
    pub async fn count(store: &dyn Store) -> Result<u64, AppError> {
        count_rows(store, &RESERVATION).await
    }

    /// All reservations that pass entity rules, ordered by id.
    pub async fn find_all(store: &dyn Store) -> Result<Vec<Reservation>, AppError> {
        fetch_entities(store, &RESERVATION, &select_all(&RESERVATION), Reservation::from_row).await
    }

    /// Absence is not an error here; callers decide what a missing reservation means.
    pub async fn find_by_id(store: &dyn Store, id: i64) -> Result<Option<Reservation>, AppError> {
        let found = fetch_entities(store, &RESERVATION, &select_by_id(&RESERVATION, id), Reservation::from_row).await?;
        Ok(found.into_iter().next())
    }

    /// Reservations for the ids that exist and pass entity rules; unknown ids are skipped.
    pub async fn find_all_by_ids(store: &dyn Store, ids: &[i64]) -> Result<Vec<Reservation>, AppError> {
        fetch_entities_by_ids(store, &RESERVATION, ids, Reservation::from_row).await
    }

    /// Insert from a complete attribute map. Returns the reservation built from the
    /// normalized input.
    pub async fn create(store: &dyn Store, body: &HashMap<String, Value>) -> Result<Reservation, AppError> {
        let attrs = Attributes::parse(&RESERVATION, body);
        let id = attrs.require_complete()?;
        let reservation = Reservation::from_attributes(&attrs).ok_or_else(|| {
            AppError::Conflict(format!("reservation id {}: attributes rejected by entity rules", id))
        })?;

        let q = insert(&RESERVATION, &reservation.to_values());
        let created = store.execute(&q).await.map_err(|e| {
            let err = classify_write_error(e, &format!("INSERT reservation id {}, id may exist", id));
            tracing::warn!(id, error = %err, "reservation insert failed");
            err
        })?;
        if created != 1 {
            return Err(AppError::BadRequest(format!(
                "reservation not created for id {}: {} rows created",
                id, created
            )));
        }
        tracing::info!(id, customer_id = reservation.customer_id, vehicle_id = reservation.vehicle_id, "reservation created");
        Ok(reservation)
    }

    /// Update the columns present in a partial attribute map; the map must carry the id.
    pub async fn update(store: &dyn Store, body: &HashMap<String, Value>) -> Result<bool, AppError> {
        let upd = Attributes::parse(&RESERVATION, body).into_update()?;
        let id = upd.id;
        let q = update(&RESERVATION, id, &upd.sets);
        let updated = store.execute(&q).await.map_err(|e| {
            let err = classify_write_error(e, &format!("UPDATE reservation id {}", id));
            tracing::warn!(id, error = %err, "reservation update failed");
            err
        })?;
        match updated {
            1 => {
                tracing::info!(id, columns = upd.sets.len(), "reservation updated");
                Ok(true)
            }
            0 => Err(AppError::NotFound(format!("reservation id {} not found, 0 rows updated", id))),
            n => Err(AppError::BadRequest(format!("reservation id {}: {} rows updated", id, n))),
        }
    }

    pub async fn delete(store: &dyn Store, id: i64) -> Result<bool, AppError> {
        let id = require_id(&RESERVATION, id)?;
        let deleted = store.execute(&delete(&RESERVATION, id)).await.map_err(|e| {
            let err = classify_write_error(
                e,
                &format!("DELETE reservation id {}, foreign key dependency may exist", id),
            );
            tracing::warn!(id, error = %err, "reservation delete failed");
            err
        })?;
        match deleted {
            1 => {
                tracing::info!(id, "reservation deleted");
                Ok(true)
            }
            0 => Err(AppError::NotFound(format!("reservation id {} not found, 0 rows deleted", id))),
            n => Err(AppError::BadRequest(format!("reservation id {}: {} rows deleted", id, n))),
        }
    }
}
