//! Parking space domain entity

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::domain::availability_monitor::AvailabilityMonitor;
use crate::domain::money::ensure_non_negative;
use crate::domain::parking_space_manager::ParkingSpaceManager;
use crate::domain::DomainResult;

/// A parking area with an hourly price
#[derive(Debug, Clone, PartialEq)]
pub struct ParkingSpace {
    pub id: i32,
    pub location: String,
    pub size: String,
    pub status: String,
    pub price_per_hour: Decimal,
    /// Stamped by the store on insert
    pub created_at: DateTime<Utc>,
    /// Stamped by the store on insert and on every update
    pub updated_at: DateTime<Utc>,
}

impl ParkingSpace {
    /// Name used in not-found and confirmation messages
    pub const ENTITY: &'static str = "ParkingSpace";

    pub fn new(
        location: impl Into<String>,
        size: impl Into<String>,
        status: impl Into<String>,
        price_per_hour: Decimal,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            location: location.into(),
            size: size.into(),
            status: status.into(),
            price_per_hour,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        ensure_non_negative("pricePerHour", self.price_per_hour)
    }
}

/// Parking space together with its managers and its monitor
#[derive(Debug, Clone)]
pub struct ParkingSpaceDetails {
    pub space: ParkingSpace,
    pub managers: Vec<ParkingSpaceManager>,
    pub availability_monitor: Option<AvailabilityMonitor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_space_is_unsaved() {
        let space = ParkingSpace::new("A1", "M", "active", Decimal::new(250, 2));
        assert_eq!(space.id, 0);
        assert_eq!(space.created_at, space.updated_at);
        assert!(space.validate().is_ok());
    }

    #[test]
    fn negative_price_is_invalid() {
        let space = ParkingSpace::new("A1", "M", "active", Decimal::new(-5, 0));
        assert!(space.validate().is_err());
    }
}
