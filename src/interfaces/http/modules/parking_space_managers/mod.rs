//! Parking space manager resource: `/api/ParkingSpaceManager`

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
