//! Reservation domain entity

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::domain::money::ensure_non_negative;
use crate::domain::parking_reservation_manager::ParkingReservationManager;
use crate::domain::parking_spot::ParkingSpot;
use crate::domain::DomainResult;

/// Booking of a parking spot for a time window.
///
/// `start_date < end_date` is not enforced and overlapping bookings of the
/// same spot are accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: String,
    pub total_amount: Decimal,
    /// Stamped by the store on insert
    pub created_at: DateTime<Utc>,
    /// Stamped by the store on insert and on every update
    pub updated_at: DateTime<Utc>,
    /// Fixed at creation
    pub parking_spot_id: i32,
    /// Fixed at creation
    pub parking_reservation_manager_id: i32,
}

impl Reservation {
    /// Name used in not-found and confirmation messages
    pub const ENTITY: &'static str = "Reservation";

    pub fn new(
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        status: impl Into<String>,
        total_amount: Decimal,
        parking_spot_id: i32,
        parking_reservation_manager_id: i32,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            start_date,
            end_date,
            status: status.into(),
            total_amount,
            created_at: now,
            updated_at: now,
            parking_spot_id,
            parking_reservation_manager_id,
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        ensure_non_negative("totalAmount", self.total_amount)
    }

    /// Booked duration in whole minutes; negative when the dates are inverted.
    pub fn duration_minutes(&self) -> i64 {
        (self.end_date - self.start_date).num_minutes()
    }
}

/// Reservation with its spot and manager
#[derive(Debug, Clone)]
pub struct ReservationDetails {
    pub reservation: Reservation,
    pub parking_spot: Option<ParkingSpot>,
    pub parking_reservation_manager: Option<ParkingReservationManager>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample(start: DateTime<Utc>, end: DateTime<Utc>) -> Reservation {
        Reservation::new(start, end, "Confirmed", Decimal::new(750, 2), 1, 1)
    }

    #[test]
    fn duration_in_minutes() {
        let start = Utc::now();
        let r = sample(start, start + Duration::hours(3));
        assert_eq!(r.duration_minutes(), 180);
    }

    #[test]
    fn inverted_dates_are_accepted() {
        let start = Utc::now();
        let r = sample(start, start - Duration::hours(1));
        assert!(r.validate().is_ok());
        assert_eq!(r.duration_minutes(), -60);
    }

    #[test]
    fn negative_total_is_invalid() {
        let start = Utc::now();
        let mut r = sample(start, start + Duration::hours(1));
        r.total_amount = Decimal::new(-100, 2);
        assert!(r.validate().is_err());
    }
}
