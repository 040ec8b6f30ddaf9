//! Reservation DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{Reservation, ReservationDetails};
use crate::interfaces::http::common::rules::non_negative;
use crate::interfaces::http::modules::parking_reservation_managers::ParkingReservationManagerResponse;
use crate::interfaces::http::modules::parking_spots::ParkingSpotResponse;

/// Reservation with the spot and the manager it references
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
    pub id: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: String,
    #[schema(value_type = f64, example = 12.0)]
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub parking_spot_id: i32,
    pub parking_reservation_manager_id: i32,
    pub parking_spot: Option<ParkingSpotResponse>,
    pub parking_reservation_manager: Option<ParkingReservationManagerResponse>,
}

impl From<ReservationDetails> for ReservationResponse {
    fn from(d: ReservationDetails) -> Self {
        let r = d.reservation;
        Self {
            id: r.id,
            start_date: r.start_date,
            end_date: r.end_date,
            status: r.status,
            total_amount: r.total_amount,
            created_at: r.created_at,
            updated_at: r.updated_at,
            parking_spot_id: r.parking_spot_id,
            parking_reservation_manager_id: r.parking_reservation_manager_id,
            parking_spot: d.parking_spot.map(Into::into),
            parking_reservation_manager: d.parking_reservation_manager.map(Into::into),
        }
    }
}

/// Body for Create and Update. Both foreign keys are ignored on Update.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[validate(length(max = 50))]
    pub status: String,
    #[validate(custom(function = "non_negative"))]
    #[schema(value_type = f64, example = 12.0)]
    pub total_amount: Decimal,
    pub parking_spot_id: i32,
    pub parking_reservation_manager_id: i32,
}

impl ReservationRequest {
    pub fn into_domain(self, id: i32) -> Reservation {
        let mut reservation = Reservation::new(
            self.start_date,
            self.end_date,
            self.status,
            self.total_amount,
            self.parking_spot_id,
            self.parking_reservation_manager_id,
        );
        reservation.id = id;
        reservation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_parse_as_rfc3339() {
        let req: ReservationRequest = serde_json::from_str(
            r#"{
                "startDate": "2026-05-01T08:00:00Z",
                "endDate": "2026-05-01T10:30:00+02:00",
                "status": "booked",
                "totalAmount": 7.5,
                "parkingSpotId": 1,
                "parkingReservationManagerId": 2
            }"#,
        )
        .unwrap();
        let reservation = req.into_domain(0);
        assert_eq!(reservation.duration_minutes(), 30);
        assert_eq!(reservation.parking_reservation_manager_id, 2);
    }

    #[test]
    fn date_without_offset_is_rejected() {
        let parsed = serde_json::from_str::<ReservationRequest>(
            r#"{
                "startDate": "2026-05-01T08:00:00",
                "endDate": "2026-05-01T10:00:00Z",
                "status": "booked",
                "totalAmount": 1,
                "parkingSpotId": 1,
                "parkingReservationManagerId": 1
            }"#,
        );
        assert!(parsed.is_err());
    }
}
