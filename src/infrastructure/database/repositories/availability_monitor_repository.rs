//! SeaORM implementation of AvailabilityMonitorRepository

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, LoaderTrait, QueryOrder, Set};

use crate::domain::availability_monitor::{
    AvailabilityMonitor, AvailabilityMonitorDetails, AvailabilityMonitorRepository,
};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{availability_monitor, parking_space};

pub struct SeaOrmAvailabilityMonitorRepository {
    db: DatabaseConnection,
}

impl SeaOrmAvailabilityMonitorRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn with_space(
        &self,
        monitors: Vec<availability_monitor::Model>,
    ) -> DomainResult<Vec<AvailabilityMonitorDetails>> {
        if monitors.is_empty() {
            return Ok(Vec::new());
        }
        let spaces = monitors.load_one(parking_space::Entity, &self.db).await?;
        Ok(monitors
            .into_iter()
            .zip(spaces)
            .map(|(monitor, space)| AvailabilityMonitorDetails {
                monitor: monitor.into(),
                parking_space: space.map(Into::into),
            })
            .collect())
    }
}

#[async_trait]
impl AvailabilityMonitorRepository for SeaOrmAvailabilityMonitorRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<AvailabilityMonitorDetails>> {
        let Some(model) = availability_monitor::Entity::find_by_id(id)
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };
        Ok(self.with_space(vec![model]).await?.pop())
    }

    async fn find_all(&self) -> DomainResult<Vec<AvailabilityMonitorDetails>> {
        let models = availability_monitor::Entity::find()
            .order_by_asc(availability_monitor::Column::Id)
            .all(&self.db)
            .await?;
        self.with_space(models).await
    }

    async fn save(&self, monitor: AvailabilityMonitor) -> DomainResult<AvailabilityMonitor> {
        let model = availability_monitor::ActiveModel {
            status: Set(monitor.status),
            last_checked_time: Set(Utc::now()),
            up_time: Set(monitor.up_time),
            down_time: Set(monitor.down_time),
            check_interval: Set(monitor.check_interval),
            parking_space_id: Set(monitor.parking_space_id),
            ..Default::default()
        };
        let saved = model.insert(&self.db).await?;
        info!(
            "Availability monitor {} saved for space {}",
            saved.id, saved.parking_space_id
        );
        Ok(saved.into())
    }

    async fn update(&self, monitor: AvailabilityMonitor) -> DomainResult<AvailabilityMonitor> {
        let Some(existing) = availability_monitor::Entity::find_by_id(monitor.id)
            .one(&self.db)
            .await?
        else {
            return Err(DomainError::not_found(AvailabilityMonitor::ENTITY, monitor.id));
        };

        let mut model: availability_monitor::ActiveModel = existing.into();
        model.status = Set(monitor.status);
        model.up_time = Set(monitor.up_time);
        model.down_time = Set(monitor.down_time);
        model.check_interval = Set(monitor.check_interval);
        model.last_checked_time = Set(Utc::now());

        let updated = model.update(&self.db).await?;
        debug!("Availability monitor {} updated", updated.id);
        Ok(updated.into())
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = availability_monitor::Entity::delete_by_id(id)
            .exec(&self.db)
            .await?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found(AvailabilityMonitor::ENTITY, id));
        }
        info!("Availability monitor {} deleted", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ParkingSpace, ParkingSpaceRepository};
    use crate::infrastructure::database::repositories::SeaOrmParkingSpaceRepository;
    use crate::infrastructure::database::test_support::migrated_db;
    use chrono::Duration;
    use rust_decimal::Decimal;

    async fn space_id(db: &DatabaseConnection) -> i32 {
        SeaOrmParkingSpaceRepository::new(db.clone())
            .save(ParkingSpace::new("Garage", "L", "active", Decimal::ONE))
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn second_monitor_for_same_space_is_rejected() {
        let db = migrated_db().await;
        let space = space_id(&db).await;
        let repo = SeaOrmAvailabilityMonitorRepository::new(db);
        let now = Utc::now();

        repo.save(AvailabilityMonitor::new("up", now, now, now, space))
            .await
            .unwrap();
        let err = repo
            .save(AvailabilityMonitor::new("down", now, now, now, space))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Database(_)));
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_restamps_last_checked_time() {
        let db = migrated_db().await;
        let space = space_id(&db).await;
        let repo = SeaOrmAvailabilityMonitorRepository::new(db);
        let now = Utc::now();

        let saved = repo
            .save(AvailabilityMonitor::new("up", now, now, now, space))
            .await
            .unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;

        let mut changed = saved.clone();
        changed.status = "down".into();
        changed.down_time = now + Duration::minutes(5);
        let updated = repo.update(changed).await.unwrap();

        assert_eq!(updated.status, "down");
        assert!(updated.last_checked_time > saved.last_checked_time);

        let details = repo.find_by_id(saved.id).await.unwrap().unwrap();
        assert_eq!(details.parking_space.map(|s| s.id), Some(space));
    }
}
