//! Parking spot repository interface

use async_trait::async_trait;

use super::model::ParkingSpot;
use crate::domain::DomainResult;

#[async_trait]
pub trait ParkingSpotRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<ParkingSpot>>;

    async fn find_all(&self) -> DomainResult<Vec<ParkingSpot>>;

    async fn save(&self, spot: ParkingSpot) -> DomainResult<ParkingSpot>;

    /// Overwrite location, size, status and price
    async fn update(&self, spot: ParkingSpot) -> DomainResult<ParkingSpot>;

    /// Delete a spot together with its reservations
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
