//! Parking reservation manager repository interface

use async_trait::async_trait;

use super::model::ParkingReservationManager;
use crate::domain::DomainResult;

#[async_trait]
pub trait ParkingReservationManagerRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<ParkingReservationManager>>;

    async fn find_all(&self) -> DomainResult<Vec<ParkingReservationManager>>;

    async fn save(
        &self,
        manager: ParkingReservationManager,
    ) -> DomainResult<ParkingReservationManager>;

    /// Overwrite name and contact
    async fn update(
        &self,
        manager: ParkingReservationManager,
    ) -> DomainResult<ParkingReservationManager>;

    /// Delete a manager together with the reservations it handles
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
