//! Parking space aggregate
//!
//! Contains the ParkingSpace entity, its eager-loaded view, and repository interface.

pub mod model;
pub mod repository;

pub use model::{ParkingSpace, ParkingSpaceDetails};
pub use repository::ParkingSpaceRepository;
