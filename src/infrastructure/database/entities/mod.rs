//! Database entities module

pub mod audit_log;
pub mod availability_monitor;
pub mod invoice;
pub mod parking_reservation_manager;
pub mod parking_space;
pub mod parking_space_manager;
pub mod parking_spot;
pub mod payment;
pub mod payment_method;
pub mod reservation;

pub use audit_log::Entity as AuditLog;
pub use availability_monitor::Entity as AvailabilityMonitor;
pub use invoice::Entity as Invoice;
pub use parking_reservation_manager::Entity as ParkingReservationManager;
pub use parking_space::Entity as ParkingSpace;
pub use parking_space_manager::Entity as ParkingSpaceManager;
pub use parking_spot::Entity as ParkingSpot;
pub use payment::Entity as Payment;
pub use payment_method::Entity as PaymentMethod;
pub use reservation::Entity as Reservation;
