//! Routers: entity CRUD under /v1 plus health/readiness/version.

mod common;
mod entity;

pub use common::{common_routes, common_routes_with_ready};
pub use entity::{app, reservation_routes, vehicle_routes};
