//! Parking reservation manager resource: `/api/ParkingReservationManager`

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
