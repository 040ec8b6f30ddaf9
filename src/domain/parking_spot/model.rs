//! Parking spot domain entity

use rust_decimal::Decimal;

use crate::domain::money::ensure_non_negative;
use crate::domain::DomainResult;

/// A single bookable spot; reservations point at it
#[derive(Debug, Clone, PartialEq)]
pub struct ParkingSpot {
    pub id: i32,
    pub location: String,
    pub size: String,
    pub status: String,
    pub price_per_hour: Decimal,
}

impl ParkingSpot {
    /// Name used in not-found and confirmation messages
    pub const ENTITY: &'static str = "Parking Spot";

    pub fn new(
        location: impl Into<String>,
        size: impl Into<String>,
        status: impl Into<String>,
        price_per_hour: Decimal,
    ) -> Self {
        Self {
            id: 0,
            location: location.into(),
            size: size.into(),
            status: status.into(),
            price_per_hour,
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        ensure_non_negative("pricePerHour", self.price_per_hour)
    }
}
