//! Parking space repository interface

use async_trait::async_trait;

use super::model::{ParkingSpace, ParkingSpaceDetails};
use crate::domain::DomainResult;

#[async_trait]
pub trait ParkingSpaceRepository: Send + Sync {
    /// Find a parking space with its managers and monitor attached
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<ParkingSpaceDetails>>;

    /// All parking spaces in id order, relations attached
    async fn find_all(&self) -> DomainResult<Vec<ParkingSpaceDetails>>;

    /// Insert a new parking space; the store assigns id and timestamps
    async fn save(&self, space: ParkingSpace) -> DomainResult<ParkingSpace>;

    /// Overwrite location, size, status and price, and stamp `updated_at`
    async fn update(&self, space: ParkingSpace) -> DomainResult<ParkingSpace>;

    /// Delete a parking space; its managers and monitor go with it
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
