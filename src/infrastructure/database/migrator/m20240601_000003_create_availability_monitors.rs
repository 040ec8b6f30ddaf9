//! Create availability_monitors table
//!
//! At most one monitor per parking space (unique index on the FK).

use sea_orm_migration::prelude::*;

use super::m20240601_000001_create_parking_spaces::ParkingSpaces;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AvailabilityMonitors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AvailabilityMonitors::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AvailabilityMonitors::Status)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AvailabilityMonitors::LastCheckedTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AvailabilityMonitors::UpTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AvailabilityMonitors::DownTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AvailabilityMonitors::CheckInterval)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AvailabilityMonitors::ParkingSpaceId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_availability_monitors_parking_space")
                            .from(
                                AvailabilityMonitors::Table,
                                AvailabilityMonitors::ParkingSpaceId,
                            )
                            .to(ParkingSpaces::Table, ParkingSpaces::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_availability_monitors_parking_space")
                    .table(AvailabilityMonitors::Table)
                    .col(AvailabilityMonitors::ParkingSpaceId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AvailabilityMonitors::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum AvailabilityMonitors {
    Table,
    Id,
    Status,
    LastCheckedTime,
    UpTime,
    DownTime,
    CheckInterval,
    ParkingSpaceId,
}
