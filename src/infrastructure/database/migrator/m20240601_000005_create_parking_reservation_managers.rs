//! Create parking_reservation_managers table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ParkingReservationManagers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ParkingReservationManagers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ParkingReservationManagers::ManagerName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ParkingReservationManagers::ManagerContact)
                            .string()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(ParkingReservationManagers::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
pub enum ParkingReservationManagers {
    Table,
    Id,
    ManagerName,
    ManagerContact,
}
