//! Parking space DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{ParkingSpace, ParkingSpaceDetails};
use crate::interfaces::http::common::rules::non_negative;
use crate::interfaces::http::modules::availability_monitors::AvailabilityMonitorResponse;
use crate::interfaces::http::modules::parking_space_managers::ParkingSpaceManagerResponse;

/// Parking space without relations (used when nested in other resources)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParkingSpaceResponse {
    pub id: i32,
    pub location: String,
    pub size: String,
    pub status: String,
    #[schema(value_type = f64, example = 2.5)]
    pub price_per_hour: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ParkingSpace> for ParkingSpaceResponse {
    fn from(s: ParkingSpace) -> Self {
        Self {
            id: s.id,
            location: s.location,
            size: s.size,
            status: s.status,
            price_per_hour: s.price_per_hour,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

/// Parking space with its managers and availability monitor
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParkingSpaceDetailsResponse {
    pub id: i32,
    pub location: String,
    pub size: String,
    pub status: String,
    #[schema(value_type = f64, example = 2.5)]
    pub price_per_hour: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub parking_space_managers: Vec<ParkingSpaceManagerResponse>,
    pub availability_monitor: Option<AvailabilityMonitorResponse>,
}

impl From<ParkingSpaceDetails> for ParkingSpaceDetailsResponse {
    fn from(d: ParkingSpaceDetails) -> Self {
        let s = d.space;
        Self {
            id: s.id,
            location: s.location,
            size: s.size,
            status: s.status,
            price_per_hour: s.price_per_hour,
            created_at: s.created_at,
            updated_at: s.updated_at,
            parking_space_managers: d.managers.into_iter().map(Into::into).collect(),
            availability_monitor: d.availability_monitor.map(Into::into),
        }
    }
}

/// Body for Create and Update. Timestamps are set by the server.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParkingSpaceRequest {
    #[validate(length(min = 1, max = 200, message = "location is required"))]
    pub location: String,
    #[validate(length(max = 50))]
    pub size: String,
    #[validate(length(max = 50))]
    pub status: String,
    #[validate(custom(function = "non_negative"))]
    #[schema(value_type = f64, example = 2.5)]
    pub price_per_hour: Decimal,
}

impl ParkingSpaceRequest {
    pub fn into_domain(self, id: i32) -> ParkingSpace {
        let mut space = ParkingSpace::new(self.location, self.size, self.status, self.price_per_hour);
        space.id = id;
        space
    }
}
