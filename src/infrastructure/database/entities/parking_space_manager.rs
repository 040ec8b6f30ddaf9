//! Parking space manager entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "parking_space_managers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub status: String,

    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub payment_amount: Decimal,

    pub contact: String,
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
