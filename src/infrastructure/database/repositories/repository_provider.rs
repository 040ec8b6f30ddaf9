//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::repositories::RepositoryProvider;
use crate::domain::{
    AvailabilityMonitorRepository, InvoiceRepository, LogRepository,
    ParkingReservationManagerRepository, ParkingSpaceManagerRepository, ParkingSpaceRepository,
    ParkingSpotRepository, PaymentMethodRepository, PaymentRepository, ReservationRepository,
};

use super::{
    SeaOrmAvailabilityMonitorRepository, SeaOrmInvoiceRepository, SeaOrmLogRepository,
    SeaOrmParkingReservationManagerRepository, SeaOrmParkingSpaceManagerRepository,
    SeaOrmParkingSpaceRepository, SeaOrmParkingSpotRepository, SeaOrmPaymentMethodRepository,
    SeaOrmPaymentRepository, SeaOrmReservationRepository,
};

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let space = repos.parking_spaces().find_by_id(1).await?;
/// let mine = repos.logs().find_by_user("alice").await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    parking_spaces: SeaOrmParkingSpaceRepository,
    parking_spots: SeaOrmParkingSpotRepository,
    parking_space_managers: SeaOrmParkingSpaceManagerRepository,
    parking_reservation_managers: SeaOrmParkingReservationManagerRepository,
    availability_monitors: SeaOrmAvailabilityMonitorRepository,
    reservations: SeaOrmReservationRepository,
    payment_methods: SeaOrmPaymentMethodRepository,
    payments: SeaOrmPaymentRepository,
    invoices: SeaOrmInvoiceRepository,
    logs: SeaOrmLogRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            parking_spaces: SeaOrmParkingSpaceRepository::new(db.clone()),
            parking_spots: SeaOrmParkingSpotRepository::new(db.clone()),
            parking_space_managers: SeaOrmParkingSpaceManagerRepository::new(db.clone()),
            parking_reservation_managers: SeaOrmParkingReservationManagerRepository::new(
                db.clone(),
            ),
            availability_monitors: SeaOrmAvailabilityMonitorRepository::new(db.clone()),
            reservations: SeaOrmReservationRepository::new(db.clone()),
            payment_methods: SeaOrmPaymentMethodRepository::new(db.clone()),
            payments: SeaOrmPaymentRepository::new(db.clone()),
            invoices: SeaOrmInvoiceRepository::new(db.clone()),
            logs: SeaOrmLogRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn parking_spaces(&self) -> &dyn ParkingSpaceRepository {
        &self.parking_spaces
    }

    fn parking_spots(&self) -> &dyn ParkingSpotRepository {
        &self.parking_spots
    }

    fn parking_space_managers(&self) -> &dyn ParkingSpaceManagerRepository {
        &self.parking_space_managers
    }

    fn parking_reservation_managers(&self) -> &dyn ParkingReservationManagerRepository {
        &self.parking_reservation_managers
    }

    fn availability_monitors(&self) -> &dyn AvailabilityMonitorRepository {
        &self.availability_monitors
    }

    fn reservations(&self) -> &dyn ReservationRepository {
        &self.reservations
    }

    fn payment_methods(&self) -> &dyn PaymentMethodRepository {
        &self.payment_methods
    }

    fn payments(&self) -> &dyn PaymentRepository {
        &self.payments
    }

    fn invoices(&self) -> &dyn InvoiceRepository {
        &self.invoices
    }

    fn logs(&self) -> &dyn LogRepository {
        &self.logs
    }
}
