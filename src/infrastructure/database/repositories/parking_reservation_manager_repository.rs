//! SeaORM implementation of ParkingReservationManagerRepository

use async_trait::async_trait;
use log::{debug, info};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::domain::parking_reservation_manager::{
    ParkingReservationManager, ParkingReservationManagerRepository,
};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::parking_reservation_manager;

pub struct SeaOrmParkingReservationManagerRepository {
    db: DatabaseConnection,
}

impl SeaOrmParkingReservationManagerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ParkingReservationManagerRepository for SeaOrmParkingReservationManagerRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<ParkingReservationManager>> {
        let model = parking_reservation_manager::Entity::find_by_id(id)
            .one(&self.db)
            .await?;
        Ok(model.map(Into::into))
    }

    async fn find_all(&self) -> DomainResult<Vec<ParkingReservationManager>> {
        let models = parking_reservation_manager::Entity::find()
            .order_by_asc(parking_reservation_manager::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn save(
        &self,
        manager: ParkingReservationManager,
    ) -> DomainResult<ParkingReservationManager> {
        let model = parking_reservation_manager::ActiveModel {
            manager_name: Set(manager.manager_name),
            manager_contact: Set(manager.manager_contact),
            ..Default::default()
        };
        let saved = model.insert(&self.db).await?;
        info!(
            "Parking reservation manager saved: {} ({})",
            saved.manager_name, saved.id
        );
        Ok(saved.into())
    }

    async fn update(
        &self,
        manager: ParkingReservationManager,
    ) -> DomainResult<ParkingReservationManager> {
        let Some(existing) = parking_reservation_manager::Entity::find_by_id(manager.id)
            .one(&self.db)
            .await?
        else {
            return Err(DomainError::not_found(
                ParkingReservationManager::ENTITY,
                manager.id,
            ));
        };

        let mut model: parking_reservation_manager::ActiveModel = existing.into();
        model.manager_name = Set(manager.manager_name);
        model.manager_contact = Set(manager.manager_contact);

        let updated = model.update(&self.db).await?;
        debug!("Parking reservation manager {} updated", updated.id);
        Ok(updated.into())
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = parking_reservation_manager::Entity::delete_by_id(id)
            .exec(&self.db)
            .await?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found(ParkingReservationManager::ENTITY, id));
        }
        info!("Parking reservation manager {} deleted", id);
        Ok(())
    }
}
