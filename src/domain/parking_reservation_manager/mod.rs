//! Parking reservation manager aggregate

pub mod model;
pub mod repository;

pub use model::ParkingReservationManager;
pub use repository::ParkingReservationManagerRepository;
