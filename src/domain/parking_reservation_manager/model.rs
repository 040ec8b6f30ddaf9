//! Parking reservation manager domain entity

/// Person who handles reservations
#[derive(Debug, Clone, PartialEq)]
pub struct ParkingReservationManager {
    pub id: i32,
    pub manager_name: String,
    pub manager_contact: String,
}

impl ParkingReservationManager {
    /// Name used in not-found and confirmation messages
    pub const ENTITY: &'static str = "Parking Reservation Manager";

    pub fn new(manager_name: impl Into<String>, manager_contact: impl Into<String>) -> Self {
        Self {
            id: 0,
            manager_name: manager_name.into(),
            manager_contact: manager_contact.into(),
        }
    }
}
