//! Payment repository interface

use async_trait::async_trait;

use super::model::{Payment, PaymentDetails};
use crate::domain::DomainResult;

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Find a payment with its payment method attached
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<PaymentDetails>>;

    async fn find_all(&self) -> DomainResult<Vec<PaymentDetails>>;

    async fn save(&self, payment: Payment) -> DomainResult<Payment>;

    /// Overwrite amount, date and status
    async fn update(&self, payment: Payment) -> DomainResult<Payment>;

    async fn delete(&self, id: i32) -> DomainResult<()>;
}
