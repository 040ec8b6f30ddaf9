//! Reservation repository interface

use async_trait::async_trait;

use super::model::{Reservation, ReservationDetails};
use crate::domain::DomainResult;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Find reservation by ID, with spot and manager attached
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<ReservationDetails>>;

    /// Find all reservations (any status)
    async fn find_all(&self) -> DomainResult<Vec<ReservationDetails>>;

    /// Save a new reservation.
    /// Fails with a database error when the spot or manager does not exist.
    async fn save(&self, reservation: Reservation) -> DomainResult<Reservation>;

    /// Overwrite dates, status and total, and stamp `updated_at`
    async fn update(&self, reservation: Reservation) -> DomainResult<Reservation>;

    async fn delete(&self, id: i32) -> DomainResult<()>;
}
