//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

mod conversions;

pub mod audit_log_repository;
pub mod availability_monitor_repository;
pub mod invoice_repository;
pub mod parking_reservation_manager_repository;
pub mod parking_space_manager_repository;
pub mod parking_space_repository;
pub mod parking_spot_repository;
pub mod payment_method_repository;
pub mod payment_repository;
pub mod repository_provider;
pub mod reservation_repository;

pub use audit_log_repository::SeaOrmLogRepository;
pub use availability_monitor_repository::SeaOrmAvailabilityMonitorRepository;
pub use invoice_repository::SeaOrmInvoiceRepository;
pub use parking_reservation_manager_repository::SeaOrmParkingReservationManagerRepository;
pub use parking_space_manager_repository::SeaOrmParkingSpaceManagerRepository;
pub use parking_space_repository::SeaOrmParkingSpaceRepository;
pub use parking_spot_repository::SeaOrmParkingSpotRepository;
pub use payment_method_repository::SeaOrmPaymentMethodRepository;
pub use payment_repository::SeaOrmPaymentRepository;
pub use repository_provider::SeaOrmRepositoryProvider;
pub use reservation_repository::SeaOrmReservationRepository;
