//! SeaORM implementation of ParkingSpaceRepository

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, LoaderTrait, QueryOrder, Set,
};

use crate::domain::parking_space::{ParkingSpace, ParkingSpaceDetails, ParkingSpaceRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{
    availability_monitor, parking_space, parking_space_manager,
};

pub struct SeaOrmParkingSpaceRepository {
    db: DatabaseConnection,
}

impl SeaOrmParkingSpaceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Attach managers and monitor to each space, keeping input order.
    async fn with_relations(
        &self,
        spaces: Vec<parking_space::Model>,
    ) -> DomainResult<Vec<ParkingSpaceDetails>> {
        if spaces.is_empty() {
            return Ok(Vec::new());
        }

        let managers = spaces
            .load_many(parking_space_manager::Entity, &self.db)
            .await?;
        let monitors = spaces
            .load_one(availability_monitor::Entity, &self.db)
            .await?;

        Ok(spaces
            .into_iter()
            .zip(managers)
            .zip(monitors)
            .map(|((space, managers), monitor)| ParkingSpaceDetails {
                space: space.into(),
                managers: managers.into_iter().map(Into::into).collect(),
                availability_monitor: monitor.map(Into::into),
            })
            .collect())
    }
}

#[async_trait]
impl ParkingSpaceRepository for SeaOrmParkingSpaceRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<ParkingSpaceDetails>> {
        let Some(model) = parking_space::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        Ok(self.with_relations(vec![model]).await?.pop())
    }

    async fn find_all(&self) -> DomainResult<Vec<ParkingSpaceDetails>> {
        let models = parking_space::Entity::find()
            .order_by_asc(parking_space::Column::Id)
            .all(&self.db)
            .await?;
        self.with_relations(models).await
    }

    async fn save(&self, space: ParkingSpace) -> DomainResult<ParkingSpace> {
        space.validate()?;

        let now = Utc::now();
        let model = parking_space::ActiveModel {
            location: Set(space.location),
            size: Set(space.size),
            status: Set(space.status),
            price_per_hour: Set(space.price_per_hour),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        let saved = model.insert(&self.db).await?;
        info!("Parking space saved: {} ({})", saved.location, saved.id);
        Ok(saved.into())
    }

    async fn update(&self, space: ParkingSpace) -> DomainResult<ParkingSpace> {
        space.validate()?;

        let Some(existing) = parking_space::Entity::find_by_id(space.id)
            .one(&self.db)
            .await?
        else {
            return Err(DomainError::not_found(ParkingSpace::ENTITY, space.id));
        };

        let mut model: parking_space::ActiveModel = existing.into();
        model.location = Set(space.location);
        model.size = Set(space.size);
        model.status = Set(space.status);
        model.price_per_hour = Set(space.price_per_hour);
        model.updated_at = Set(Utc::now());

        let updated = model.update(&self.db).await?;
        debug!("Parking space {} updated", updated.id);
        Ok(updated.into())
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = parking_space::Entity::delete_by_id(id)
            .exec(&self.db)
            .await?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found(ParkingSpace::ENTITY, id));
        }
        info!("Parking space {} deleted", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AvailabilityMonitor, ParkingSpaceManager};
    use crate::infrastructure::database::repositories::{
        SeaOrmAvailabilityMonitorRepository, SeaOrmParkingSpaceManagerRepository,
    };
    use crate::domain::{AvailabilityMonitorRepository, ParkingSpaceManagerRepository};
    use crate::infrastructure::database::test_support::migrated_db;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn save_then_find_attaches_relations() {
        let db = migrated_db().await;
        let spaces = SeaOrmParkingSpaceRepository::new(db.clone());
        let managers = SeaOrmParkingSpaceManagerRepository::new(db.clone());
        let monitors = SeaOrmAvailabilityMonitorRepository::new(db.clone());

        let saved = spaces
            .save(ParkingSpace::new("A1", "M", "active", Decimal::new(250, 2)))
            .await
            .unwrap();
        assert!(saved.id > 0);

        managers
            .save(ParkingSpaceManager::new("on duty", Decimal::new(100, 0), "555-0101", saved.id))
            .await
            .unwrap();
        let now = Utc::now();
        monitors
            .save(AvailabilityMonitor::new("up", now, now, now, saved.id))
            .await
            .unwrap();

        let details = spaces.find_by_id(saved.id).await.unwrap().unwrap();
        assert_eq!(details.space.location, "A1");
        assert_eq!(details.space.price_per_hour, Decimal::new(250, 2));
        assert_eq!(details.managers.len(), 1);
        assert_eq!(details.managers[0].contact, "555-0101");
        assert_eq!(
            details.availability_monitor.map(|m| m.parking_space_id),
            Some(saved.id)
        );
    }

    #[tokio::test]
    async fn find_all_on_empty_table() {
        let db = migrated_db().await;
        let spaces = SeaOrmParkingSpaceRepository::new(db);
        assert!(spaces.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_stamps_updated_at_and_keeps_created_at() {
        let db = migrated_db().await;
        let spaces = SeaOrmParkingSpaceRepository::new(db);
        let saved = spaces
            .save(ParkingSpace::new("B2", "L", "active", Decimal::new(3, 0)))
            .await
            .unwrap();

        tokio::time::sleep(std::time::Duration::from_millis(10)).await;

        let mut changed = saved.clone();
        changed.status = "closed".into();
        let updated = spaces.update(changed).await.unwrap();

        assert_eq!(updated.status, "closed");
        assert_eq!(updated.created_at, saved.created_at);
        assert!(updated.updated_at > saved.updated_at);
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let db = migrated_db().await;
        let spaces = SeaOrmParkingSpaceRepository::new(db);
        let mut ghost = ParkingSpace::new("X", "S", "active", Decimal::ONE);
        ghost.id = 99;
        let err = spaces.update(ghost).await.unwrap_err();
        assert!(err.is_not_found());
        assert!(spaces.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_cascades_to_managers_and_monitor() {
        let db = migrated_db().await;
        let spaces = SeaOrmParkingSpaceRepository::new(db.clone());
        let managers = SeaOrmParkingSpaceManagerRepository::new(db.clone());
        let monitors = SeaOrmAvailabilityMonitorRepository::new(db.clone());

        let space = spaces
            .save(ParkingSpace::new("C3", "S", "active", Decimal::ONE))
            .await
            .unwrap();
        managers
            .save(ParkingSpaceManager::new("on duty", Decimal::ZERO, "x", space.id))
            .await
            .unwrap();
        let now = Utc::now();
        monitors
            .save(AvailabilityMonitor::new("up", now, now, now, space.id))
            .await
            .unwrap();

        spaces.delete(space.id).await.unwrap();

        assert!(managers.find_all().await.unwrap().is_empty());
        assert!(monitors.find_all().await.unwrap().is_empty());
        assert!(spaces.delete(space.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn negative_price_is_rejected_before_insert() {
        let db = migrated_db().await;
        let spaces = SeaOrmParkingSpaceRepository::new(db);
        let err = spaces
            .save(ParkingSpace::new("D4", "S", "active", Decimal::new(-1, 0)))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(spaces.find_all().await.unwrap().is_empty());
    }
}
