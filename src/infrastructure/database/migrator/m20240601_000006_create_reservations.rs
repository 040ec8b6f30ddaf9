//! Create reservations table
//!
//! A reservation books one parking spot and is handled by one
//! reservation manager. Removing either removes its reservations.

use sea_orm_migration::prelude::*;

use super::m20240601_000004_create_parking_spots::ParkingSpots;
use super::m20240601_000005_create_parking_reservation_managers::ParkingReservationManagers;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reservations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Reservations::StartDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Reservations::EndDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Reservations::Status)
                            .string()
                            .not_null()
                            .default("Pending"),
                    )
                    .col(
                        ColumnDef::new(Reservations::TotalAmount)
                            .decimal_len(10, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Reservations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Reservations::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Reservations::ParkingSpotId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Reservations::ParkingReservationManagerId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservations_parking_spot")
                            .from(Reservations::Table, Reservations::ParkingSpotId)
                            .to(ParkingSpots::Table, ParkingSpots::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservations_parking_reservation_manager")
                            .from(
                                Reservations::Table,
                                Reservations::ParkingReservationManagerId,
                            )
                            .to(
                                ParkingReservationManagers::Table,
                                ParkingReservationManagers::Id,
                            )
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reservations_parking_spot")
                    .table(Reservations::Table)
                    .col(Reservations::ParkingSpotId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reservations_parking_reservation_manager")
                    .table(Reservations::Table)
                    .col(Reservations::ParkingReservationManagerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Reservations {
    Table,
    Id,
    StartDate,
    EndDate,
    Status,
    TotalAmount,
    CreatedAt,
    UpdatedAt,
    ParkingSpotId,
    ParkingReservationManagerId,
}
