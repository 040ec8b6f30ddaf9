//! Audit log repository interface

use async_trait::async_trait;

use super::model::LogEntry;
use crate::domain::DomainResult;

#[async_trait]
pub trait LogRepository: Send + Sync {
    /// Append an entry stamped with the current time
    async fn append(&self, entry: LogEntry) -> DomainResult<LogEntry>;

    /// All entries, newest first
    async fn find_all(&self) -> DomainResult<Vec<LogEntry>>;

    /// Entries written by `user_name`, newest first
    async fn find_by_user(&self, user_name: &str) -> DomainResult<Vec<LogEntry>>;
}
