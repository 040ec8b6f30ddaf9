//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider`: unified access to all per-aggregate repositories
//! - `DomainResult`: standard result type for domain operations

use super::audit_log::LogRepository;
use super::availability_monitor::AvailabilityMonitorRepository;
use super::invoice::InvoiceRepository;
use super::parking_reservation_manager::ParkingReservationManagerRepository;
use super::parking_space::ParkingSpaceRepository;
use super::parking_space_manager::ParkingSpaceManagerRepository;
use super::parking_spot::ParkingSpotRepository;
use super::payment::PaymentRepository;
use super::payment_method::PaymentMethodRepository;
use super::reservation::ReservationRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

// ── RepositoryProvider ──────────────────────────────────────────

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let spot = repos.parking_spots().find_by_id(3).await?;
///     let all = repos.reservations().find_all().await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn parking_spaces(&self) -> &dyn ParkingSpaceRepository;
    fn parking_spots(&self) -> &dyn ParkingSpotRepository;
    fn parking_space_managers(&self) -> &dyn ParkingSpaceManagerRepository;
    fn parking_reservation_managers(&self) -> &dyn ParkingReservationManagerRepository;
    fn availability_monitors(&self) -> &dyn AvailabilityMonitorRepository;
    fn reservations(&self) -> &dyn ReservationRepository;
    fn payment_methods(&self) -> &dyn PaymentMethodRepository;
    fn payments(&self) -> &dyn PaymentRepository;
    fn invoices(&self) -> &dyn InvoiceRepository;
    fn logs(&self) -> &dyn LogRepository;
}
