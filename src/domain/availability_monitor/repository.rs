//! Availability monitor repository interface

use async_trait::async_trait;

use super::model::{AvailabilityMonitor, AvailabilityMonitorDetails};
use crate::domain::DomainResult;

#[async_trait]
pub trait AvailabilityMonitorRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<AvailabilityMonitorDetails>>;

    async fn find_all(&self) -> DomainResult<Vec<AvailabilityMonitorDetails>>;

    /// Insert a monitor and stamp `last_checked_time`.
    /// A second monitor for the same parking space violates the unique index.
    async fn save(&self, monitor: AvailabilityMonitor) -> DomainResult<AvailabilityMonitor>;

    /// Overwrite status, up/down times and check interval, and stamp `last_checked_time`
    async fn update(&self, monitor: AvailabilityMonitor) -> DomainResult<AvailabilityMonitor>;

    async fn delete(&self, id: i32) -> DomainResult<()>;
}
