//! freerider: reservation and vehicle REST backend over a relational store.
//!
//! Writes arrive as loosely-typed attribute maps, are validated against a fixed entity
//! schema, run as parameterized statements, and fail with a small error taxonomy
//! (bad request, not found, conflict) that the HTTP layer maps to status codes.

pub mod attributes;
pub mod case;
pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod schema;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use model::{Reservation, Vehicle};
pub use routes::{app, common_routes, common_routes_with_ready, reservation_routes, vehicle_routes};
pub use service::{ReservationAccess, VehicleAccess};
pub use state::AppState;
pub use store::{connect, ensure_tables, Store};
