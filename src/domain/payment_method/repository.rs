//! Payment method repository interface

use async_trait::async_trait;

use super::model::PaymentMethod;
use crate::domain::DomainResult;

#[async_trait]
pub trait PaymentMethodRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<PaymentMethod>>;

    async fn find_all(&self) -> DomainResult<Vec<PaymentMethod>>;

    async fn save(&self, method: PaymentMethod) -> DomainResult<PaymentMethod>;

    /// Overwrite type and details
    async fn update(&self, method: PaymentMethod) -> DomainResult<PaymentMethod>;

    /// Delete a method together with its payments
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
