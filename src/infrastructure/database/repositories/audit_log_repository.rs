//! SeaORM implementation of LogRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::audit_log::{LogEntry, LogRepository};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::audit_log;

pub struct SeaOrmLogRepository {
    db: DatabaseConnection,
}

impl SeaOrmLogRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LogRepository for SeaOrmLogRepository {
    async fn append(&self, entry: LogEntry) -> DomainResult<LogEntry> {
        let model = audit_log::ActiveModel {
            user_name: Set(entry.user_name),
            description: Set(entry.description),
            created_at: Set(entry.created_at),
            ..Default::default()
        };
        let saved = model.insert(&self.db).await?;
        debug!("Log entry {} appended for {}", saved.id, saved.user_name);
        Ok(saved.into())
    }

    async fn find_all(&self) -> DomainResult<Vec<LogEntry>> {
        let models = audit_log::Entity::find()
            .order_by_desc(audit_log::Column::CreatedAt)
            .order_by_desc(audit_log::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_user(&self, user_name: &str) -> DomainResult<Vec<LogEntry>> {
        let models = audit_log::Entity::find()
            .filter(audit_log::Column::UserName.eq(user_name))
            .order_by_desc(audit_log::Column::CreatedAt)
            .order_by_desc(audit_log::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::test_support::migrated_db;
    use chrono::{Duration, Utc};

    #[tokio::test]
    async fn newest_first_and_filtered_by_user() {
        let db = migrated_db().await;
        let repo = SeaOrmLogRepository::new(db);
        let base = Utc::now();

        for (user, text, offset) in [
            ("alice", "Created ParkingSpace 1", 0),
            ("bob", "Created Parking Spot 1", 1),
            ("alice", "Deleted ParkingSpace 1", 2),
        ] {
            let mut entry = LogEntry::new(user, text);
            entry.created_at = base + Duration::seconds(offset);
            repo.append(entry).await.unwrap();
        }

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].description, "Deleted ParkingSpace 1");
        assert_eq!(all[2].description, "Created ParkingSpace 1");

        let alice = repo.find_by_user("alice").await.unwrap();
        assert_eq!(alice.len(), 2);
        assert!(alice.iter().all(|e| e.user_name == "alice"));
        assert!(alice[0].created_at > alice[1].created_at);

        assert!(repo.find_by_user("carol").await.unwrap().is_empty());
    }
}
