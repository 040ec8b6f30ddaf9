//! Reservation entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reservations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub start_date: DateTimeUtc,
    pub end_date: DateTimeUtc,

    /// Free-form status set by the client (e.g. Pending, Confirmed, Cancelled)
    pub status: String,

    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub total_amount: Decimal,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,

    pub parking_spot_id: i32,
    pub parking_reservation_manager_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::parking_spot::Entity",
        from = "Column::ParkingSpotId",
        to = "super::parking_spot::Column::Id"
    )]
    ParkingSpot,
    #[sea_orm(
        belongs_to = "super::parking_reservation_manager::Entity",
        from = "Column::ParkingReservationManagerId",
        to = "super::parking_reservation_manager::Column::Id"
    )]
    ParkingReservationManager,
}

impl Related<super::parking_spot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ParkingSpot.def()
    }
}

impl Related<super::parking_reservation_manager::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ParkingReservationManager.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
