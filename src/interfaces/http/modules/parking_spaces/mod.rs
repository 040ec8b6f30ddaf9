//! Parking space resource: `/api/ParkingSpace`

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
