//! Create parking_spaces table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ParkingSpaces::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ParkingSpaces::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ParkingSpaces::Location).string().not_null())
                    .col(ColumnDef::new(ParkingSpaces::Size).string().not_null())
                    .col(ColumnDef::new(ParkingSpaces::Status).string().not_null())
                    .col(
                        ColumnDef::new(ParkingSpaces::PricePerHour)
                            .decimal_len(10, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ParkingSpaces::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ParkingSpaces::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ParkingSpaces::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum ParkingSpaces {
    Table,
    Id,
    Location,
    Size,
    Status,
    PricePerHour,
    CreatedAt,
    UpdatedAt,
}
