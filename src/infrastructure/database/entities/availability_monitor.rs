//! Availability monitor entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "availability_monitors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub status: String,
    pub last_checked_time: DateTimeUtc,
    pub up_time: DateTimeUtc,
    pub down_time: DateTimeUtc,
    pub check_interval: DateTimeUtc,

    #[sea_orm(unique)]
    pub parking_space_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::parking_space::Entity",
        from = "Column::ParkingSpaceId",
        to = "super::parking_space::Column::Id"
    )]
    ParkingSpace,
}

impl Related<super::parking_space::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ParkingSpace.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
