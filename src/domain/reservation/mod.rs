//! Reservation aggregate
//!
//! Contains the Reservation entity, its eager-loaded view, and repository interface.

pub mod model;
pub mod repository;

pub use model::{Reservation, ReservationDetails};
pub use repository::ReservationRepository;
