//! Parking space manager repository interface

use async_trait::async_trait;

use super::model::{ParkingSpaceManager, ParkingSpaceManagerDetails};
use crate::domain::DomainResult;

#[async_trait]
pub trait ParkingSpaceManagerRepository: Send + Sync {
    /// Find a manager with its parking space attached
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<ParkingSpaceManagerDetails>>;

    async fn find_all(&self) -> DomainResult<Vec<ParkingSpaceManagerDetails>>;

    /// Insert a manager; fails when `parking_space_id` does not exist
    async fn save(&self, manager: ParkingSpaceManager) -> DomainResult<ParkingSpaceManager>;

    /// Overwrite status, payment amount and contact
    async fn update(&self, manager: ParkingSpaceManager) -> DomainResult<ParkingSpaceManager>;

    async fn delete(&self, id: i32) -> DomainResult<()>;
}
