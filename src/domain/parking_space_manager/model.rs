//! Parking space manager domain entity

use rust_decimal::Decimal;

use crate::domain::parking_space::ParkingSpace;

/// Staff assignment for a parking space, with the amount paid for it
#[derive(Debug, Clone, PartialEq)]
pub struct ParkingSpaceManager {
    pub id: i32,
    pub status: String,
    pub payment_amount: Decimal,
    pub contact: String,
    /// Fixed at creation
    pub parking_space_id: i32,
}

impl ParkingSpaceManager {
    /// Name used in not-found and confirmation messages
    pub const ENTITY: &'static str = "ParkingSpaceManager";

    pub fn new(
        status: impl Into<String>,
        payment_amount: Decimal,
        contact: impl Into<String>,
        parking_space_id: i32,
    ) -> Self {
        Self {
            id: 0,
            status: status.into(),
            payment_amount,
            contact: contact.into(),
            parking_space_id,
        }
    }
}

/// Manager with the parking space it belongs to
#[derive(Debug, Clone)]
pub struct ParkingSpaceManagerDetails {
    pub manager: ParkingSpaceManager,
    pub parking_space: Option<ParkingSpace>,
}
