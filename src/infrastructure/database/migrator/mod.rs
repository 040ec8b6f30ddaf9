//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_parking_spaces;
mod m20240601_000002_create_parking_space_managers;
mod m20240601_000003_create_availability_monitors;
mod m20240601_000004_create_parking_spots;
mod m20240601_000005_create_parking_reservation_managers;
mod m20240601_000006_create_reservations;
mod m20240601_000007_create_payment_methods;
mod m20240601_000008_create_invoices;
mod m20240601_000009_create_payments;
mod m20240601_000010_create_logs;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_parking_spaces::Migration),
            Box::new(m20240601_000002_create_parking_space_managers::Migration),
            Box::new(m20240601_000003_create_availability_monitors::Migration),
            Box::new(m20240601_000004_create_parking_spots::Migration),
            Box::new(m20240601_000005_create_parking_reservation_managers::Migration),
            Box::new(m20240601_000006_create_reservations::Migration),
            Box::new(m20240601_000007_create_payment_methods::Migration),
            Box::new(m20240601_000008_create_invoices::Migration),
            Box::new(m20240601_000009_create_payments::Migration),
            Box::new(m20240601_000010_create_logs::Migration),
        ]
    }
}
