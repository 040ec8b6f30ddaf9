//! SeaORM implementation of ParkingSpaceManagerRepository

use async_trait::async_trait;
use log::{debug, info};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, LoaderTrait, QueryOrder, Set};

use crate::domain::parking_space_manager::{
    ParkingSpaceManager, ParkingSpaceManagerDetails, ParkingSpaceManagerRepository,
};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{parking_space, parking_space_manager};

pub struct SeaOrmParkingSpaceManagerRepository {
    db: DatabaseConnection,
}

impl SeaOrmParkingSpaceManagerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn with_space(
        &self,
        managers: Vec<parking_space_manager::Model>,
    ) -> DomainResult<Vec<ParkingSpaceManagerDetails>> {
        if managers.is_empty() {
            return Ok(Vec::new());
        }
        let spaces = managers.load_one(parking_space::Entity, &self.db).await?;
        Ok(managers
            .into_iter()
            .zip(spaces)
            .map(|(manager, space)| ParkingSpaceManagerDetails {
                manager: manager.into(),
                parking_space: space.map(Into::into),
            })
            .collect())
    }
}

#[async_trait]
impl ParkingSpaceManagerRepository for SeaOrmParkingSpaceManagerRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<ParkingSpaceManagerDetails>> {
        let Some(model) = parking_space_manager::Entity::find_by_id(id)
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };
        Ok(self.with_space(vec![model]).await?.pop())
    }

    async fn find_all(&self) -> DomainResult<Vec<ParkingSpaceManagerDetails>> {
        let models = parking_space_manager::Entity::find()
            .order_by_asc(parking_space_manager::Column::Id)
            .all(&self.db)
            .await?;
        self.with_space(models).await
    }

    async fn save(&self, manager: ParkingSpaceManager) -> DomainResult<ParkingSpaceManager> {
        let model = parking_space_manager::ActiveModel {
            status: Set(manager.status),
            payment_amount: Set(manager.payment_amount),
            contact: Set(manager.contact),
            parking_space_id: Set(manager.parking_space_id),
            ..Default::default()
        };
        let saved = model.insert(&self.db).await?;
        info!(
            "Parking space manager {} saved for space {}",
            saved.id, saved.parking_space_id
        );
        Ok(saved.into())
    }

    async fn update(&self, manager: ParkingSpaceManager) -> DomainResult<ParkingSpaceManager> {
        let Some(existing) = parking_space_manager::Entity::find_by_id(manager.id)
            .one(&self.db)
            .await?
        else {
            return Err(DomainError::not_found(ParkingSpaceManager::ENTITY, manager.id));
        };

        let mut model: parking_space_manager::ActiveModel = existing.into();
        model.status = Set(manager.status);
        model.payment_amount = Set(manager.payment_amount);
        model.contact = Set(manager.contact);

        let updated = model.update(&self.db).await?;
        debug!("Parking space manager {} updated", updated.id);
        Ok(updated.into())
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = parking_space_manager::Entity::delete_by_id(id)
            .exec(&self.db)
            .await?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found(ParkingSpaceManager::ENTITY, id));
        }
        info!("Parking space manager {} deleted", id);
        Ok(())
    }
}
