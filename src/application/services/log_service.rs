//! Audit log recorder
//!
//! Mutating endpoints call [`LogService::save_new_log`] after a successful
//! write. Recording never fails the caller: a storage error is only logged.

use std::sync::Arc;

use log::warn;

use crate::domain::{DomainResult, LogEntry, RepositoryProvider};

/// Service for the audit trail
pub struct LogService {
    repos: Arc<dyn RepositoryProvider>,
}

impl LogService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Append an entry stamped with the current time.
    pub async fn save_new_log(&self, user_name: &str, description: impl Into<String>) {
        let entry = LogEntry::new(user_name, description);
        match self.repos.logs().append(entry).await {
            Ok(_) => metrics::counter!("audit_log_entries_total").increment(1),
            Err(e) => warn!("Failed to record audit log for {}: {}", user_name, e),
        }
    }

    /// All entries, newest first.
    pub async fn get_logs(&self) -> DomainResult<Vec<LogEntry>> {
        self.repos.logs().find_all().await
    }

    /// Entries recorded for `user_name`, newest first.
    pub async fn get_my_logs(&self, user_name: &str) -> DomainResult<Vec<LogEntry>> {
        self.repos.logs().find_by_user(user_name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::test_support::migrated_db;
    use crate::infrastructure::SeaOrmRepositoryProvider;

    #[tokio::test]
    async fn records_and_filters_by_user() {
        let db = migrated_db().await;
        let service = LogService::new(Arc::new(SeaOrmRepositoryProvider::new(db)));

        service.save_new_log("alice", "Created Reservation 1").await;
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        service.save_new_log("bob", "Deleted Invoice 2").await;
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        service.save_new_log("alice", "Updated Reservation 1").await;

        let all = service.get_logs().await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].description, "Updated Reservation 1");

        let mine = service.get_my_logs("alice").await.unwrap();
        let descriptions: Vec<_> = mine.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(
            descriptions,
            vec!["Updated Reservation 1", "Created Reservation 1"]
        );
    }

    #[tokio::test]
    async fn storage_failure_is_swallowed() {
        let db = migrated_db().await;
        let service = LogService::new(Arc::new(SeaOrmRepositoryProvider::new(db.clone())));
        db.close().await.unwrap();

        // Must return normally even though the pool is closed.
        service.save_new_log("alice", "Created Invoice 1").await;
    }
}
