//! Data access per entity, executed through an explicit store handle.

mod read;
mod reservations;
mod vehicles;
pub use reservations::ReservationAccess;
pub use vehicles::VehicleAccess;
