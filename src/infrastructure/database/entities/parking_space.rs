//! Parking space entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "parking_spaces")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub location: String,
    pub size: String,
    pub status: String,

    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub price_per_hour: Decimal,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::parking_space_manager::Entity")]
    ParkingSpaceManagers,
    #[sea_orm(has_one = "super::availability_monitor::Entity")]
    AvailabilityMonitor,
}

impl Related<super::parking_space_manager::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ParkingSpaceManagers.def()
    }
}

impl Related<super::availability_monitor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AvailabilityMonitor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
