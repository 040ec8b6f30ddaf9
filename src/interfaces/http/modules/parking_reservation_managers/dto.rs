//! Parking reservation manager DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::ParkingReservationManager;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParkingReservationManagerResponse {
    pub id: i32,
    pub manager_name: String,
    pub manager_contact: String,
}

impl From<ParkingReservationManager> for ParkingReservationManagerResponse {
    fn from(m: ParkingReservationManager) -> Self {
        Self {
            id: m.id,
            manager_name: m.manager_name,
            manager_contact: m.manager_contact,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParkingReservationManagerRequest {
    #[validate(length(min = 1, max = 200, message = "managerName is required"))]
    pub manager_name: String,
    #[validate(length(max = 200))]
    pub manager_contact: String,
}

impl ParkingReservationManagerRequest {
    pub fn into_domain(self, id: i32) -> ParkingReservationManager {
        let mut manager = ParkingReservationManager::new(self.manager_name, self.manager_contact);
        manager.id = id;
        manager
    }
}
