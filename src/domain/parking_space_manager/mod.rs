//! Parking space manager aggregate

pub mod model;
pub mod repository;

pub use model::{ParkingSpaceManager, ParkingSpaceManagerDetails};
pub use repository::ParkingSpaceManagerRepository;
