//! Availability monitor aggregate
//!
//! One monitor per parking space. The monitor only records what it is told;
//! nothing schedules checks against it.

pub mod model;
pub mod repository;

pub use model::{AvailabilityMonitor, AvailabilityMonitorDetails};
pub use repository::AvailabilityMonitorRepository;
