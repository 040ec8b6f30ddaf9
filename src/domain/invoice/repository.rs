//! Invoice repository interface

use async_trait::async_trait;

use super::model::Invoice;
use crate::domain::DomainResult;

#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Invoice>>;

    async fn find_all(&self) -> DomainResult<Vec<Invoice>>;

    async fn save(&self, invoice: Invoice) -> DomainResult<Invoice>;

    /// Overwrite generation date and total
    async fn update(&self, invoice: Invoice) -> DomainResult<Invoice>;

    /// Delete an invoice; payments that referenced it are detached
    async fn delete(&self, id: i32) -> DomainResult<()>;
}
