//! Parking space manager DTOs
//!
//! Older clients send `pagesa` and `kontakti`; both are accepted on input.
//! Responses always use the camelCase names.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{ParkingSpaceManager, ParkingSpaceManagerDetails};
use crate::interfaces::http::common::rules::non_negative;
use crate::interfaces::http::modules::parking_spaces::ParkingSpaceResponse;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParkingSpaceManagerResponse {
    pub id: i32,
    pub status: String,
    #[schema(value_type = f64, example = 120.0)]
    pub payment_amount: Decimal,
    pub contact: String,
    pub parking_space_id: i32,
}

impl From<ParkingSpaceManager> for ParkingSpaceManagerResponse {
    fn from(m: ParkingSpaceManager) -> Self {
        Self {
            id: m.id,
            status: m.status,
            payment_amount: m.payment_amount,
            contact: m.contact,
            parking_space_id: m.parking_space_id,
        }
    }
}

/// Manager with the parking space it belongs to
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParkingSpaceManagerDetailsResponse {
    pub id: i32,
    pub status: String,
    #[schema(value_type = f64, example = 120.0)]
    pub payment_amount: Decimal,
    pub contact: String,
    pub parking_space_id: i32,
    pub parking_space: Option<ParkingSpaceResponse>,
}

impl From<ParkingSpaceManagerDetails> for ParkingSpaceManagerDetailsResponse {
    fn from(d: ParkingSpaceManagerDetails) -> Self {
        let m = d.manager;
        Self {
            id: m.id,
            status: m.status,
            payment_amount: m.payment_amount,
            contact: m.contact,
            parking_space_id: m.parking_space_id,
            parking_space: d.parking_space.map(Into::into),
        }
    }
}

/// Body for Create and Update. `parkingSpaceId` is ignored on Update.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParkingSpaceManagerRequest {
    #[validate(length(max = 50))]
    pub status: String,
    #[serde(alias = "pagesa")]
    #[validate(custom(function = "non_negative"))]
    #[schema(value_type = f64, example = 120.0)]
    pub payment_amount: Decimal,
    #[serde(alias = "kontakti")]
    #[validate(length(max = 200))]
    pub contact: String,
    pub parking_space_id: i32,
}

impl ParkingSpaceManagerRequest {
    pub fn into_domain(self, id: i32) -> ParkingSpaceManager {
        let mut manager = ParkingSpaceManager::new(
            self.status,
            self.payment_amount,
            self.contact,
            self.parking_space_id,
        );
        manager.id = id;
        manager
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_field_names_are_accepted() {
        let req: ParkingSpaceManagerRequest = serde_json::from_str(
            r#"{"status":"on duty","pagesa":45.5,"kontakti":"555-0101","parkingSpaceId":3}"#,
        )
        .unwrap();
        assert_eq!(req.payment_amount, Decimal::new(455, 1));
        assert_eq!(req.contact, "555-0101");
        assert_eq!(req.parking_space_id, 3);
    }

    #[test]
    fn response_uses_camel_case() {
        let resp = ParkingSpaceManagerResponse::from(ParkingSpaceManager::new(
            "on duty",
            Decimal::new(10, 0),
            "x",
            1,
        ));
        let json = serde_json::to_value(resp).unwrap();
        assert!(json.get("paymentAmount").is_some());
        assert!(json.get("pagesa").is_none());
    }
}
