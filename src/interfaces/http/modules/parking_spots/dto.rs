//! Parking spot DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::ParkingSpot;
use crate::interfaces::http::common::rules::non_negative;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParkingSpotResponse {
    pub id: i32,
    pub location: String,
    pub size: String,
    pub status: String,
    #[schema(value_type = f64, example = 1.75)]
    pub price_per_hour: Decimal,
}

impl From<ParkingSpot> for ParkingSpotResponse {
    fn from(s: ParkingSpot) -> Self {
        Self {
            id: s.id,
            location: s.location,
            size: s.size,
            status: s.status,
            price_per_hour: s.price_per_hour,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParkingSpotRequest {
    #[validate(length(min = 1, max = 200, message = "location is required"))]
    pub location: String,
    #[validate(length(max = 50))]
    pub size: String,
    #[validate(length(max = 50))]
    pub status: String,
    #[validate(custom(function = "non_negative"))]
    #[schema(value_type = f64, example = 1.75)]
    pub price_per_hour: Decimal,
}

impl ParkingSpotRequest {
    pub fn into_domain(self, id: i32) -> ParkingSpot {
        let mut spot = ParkingSpot::new(self.location, self.size, self.status, self.price_per_hour);
        spot.id = id;
        spot
    }
}
