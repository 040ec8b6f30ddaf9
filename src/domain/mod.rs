//! Domain layer: parking entities, eager-loaded views and repository traits

pub mod audit_log;
pub mod availability_monitor;
pub mod invoice;
pub mod money;
pub mod parking_reservation_manager;
pub mod parking_space;
pub mod parking_space_manager;
pub mod parking_spot;
pub mod payment;
pub mod payment_method;
pub mod repositories;
pub mod reservation;

// Re-export commonly used types
pub use audit_log::{LogEntry, LogRepository};
pub use availability_monitor::{
    AvailabilityMonitor, AvailabilityMonitorDetails, AvailabilityMonitorRepository,
};
pub use invoice::{Invoice, InvoiceRepository};
pub use parking_reservation_manager::{
    ParkingReservationManager, ParkingReservationManagerRepository,
};
pub use parking_space::{ParkingSpace, ParkingSpaceDetails, ParkingSpaceRepository};
pub use parking_space_manager::{
    ParkingSpaceManager, ParkingSpaceManagerDetails, ParkingSpaceManagerRepository,
};
pub use parking_spot::{ParkingSpot, ParkingSpotRepository};
pub use payment::{Payment, PaymentDetails, PaymentRepository};
pub use payment_method::{PaymentMethod, PaymentMethodRepository};
pub use repositories::{DomainResult, RepositoryProvider};
pub use reservation::{Reservation, ReservationDetails, ReservationRepository};

pub use crate::shared::errors::DomainError;
