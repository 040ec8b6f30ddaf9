//! Create parking_space_managers table
//!
//! Managers are removed together with their parking space.

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
                    .table(ParkingSpaceManagers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ParkingSpaceManagers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ParkingSpaceManagers::Status)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ParkingSpaceManagers::PaymentAmount)
                            .decimal_len(10, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ParkingSpaceManagers::Contact)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ParkingSpaceManagers::ParkingSpaceId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_parking_space_managers_parking_space")
                            .from(
                                ParkingSpaceManagers::Table,
                                ParkingSpaceManagers::ParkingSpaceId,
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
                    .name("idx_parking_space_managers_parking_space")
                    .table(ParkingSpaceManagers::Table)
                    .col(ParkingSpaceManagers::ParkingSpaceId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ParkingSpaceManagers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum ParkingSpaceManagers {
    Table,
    Id,
    Status,
    PaymentAmount,
    Contact,
    ParkingSpaceId,
}
