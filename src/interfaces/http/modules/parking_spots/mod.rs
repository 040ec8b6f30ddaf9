//! Parking spot resource: `/api/ParkingSpot`

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
