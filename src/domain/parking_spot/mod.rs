//! Parking spot aggregate

pub mod model;
pub mod repository;

pub use model::ParkingSpot;
pub use repository::ParkingSpotRepository;
