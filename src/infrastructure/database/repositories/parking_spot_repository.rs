//! SeaORM implementation of ParkingSpotRepository

use async_trait::async_trait;
use log::{debug, info};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::domain::parking_spot::{ParkingSpot, ParkingSpotRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::parking_spot;

pub struct SeaOrmParkingSpotRepository {
    db: DatabaseConnection,
}

impl SeaOrmParkingSpotRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ParkingSpotRepository for SeaOrmParkingSpotRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<ParkingSpot>> {
        let model = parking_spot::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn find_all(&self) -> DomainResult<Vec<ParkingSpot>> {
        let models = parking_spot::Entity::find()
            .order_by_asc(parking_spot::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn save(&self, spot: ParkingSpot) -> DomainResult<ParkingSpot> {
        spot.validate()?;

        let model = parking_spot::ActiveModel {
            location: Set(spot.location),
            size: Set(spot.size),
            status: Set(spot.status),
            price_per_hour: Set(spot.price_per_hour),
            ..Default::default()
        };
        let saved = model.insert(&self.db).await?;
        info!("Parking spot saved: {} ({})", saved.location, saved.id);
        Ok(saved.into())
    }

    async fn update(&self, spot: ParkingSpot) -> DomainResult<ParkingSpot> {
        spot.validate()?;

        let Some(existing) = parking_spot::Entity::find_by_id(spot.id)
            .one(&self.db)
            .await?
        else {
            return Err(DomainError::not_found(ParkingSpot::ENTITY, spot.id));
        };

        let mut model: parking_spot::ActiveModel = existing.into();
        model.location = Set(spot.location);
        model.size = Set(spot.size);
        model.status = Set(spot.status);
        model.price_per_hour = Set(spot.price_per_hour);

        let updated = model.update(&self.db).await?;
        debug!("Parking spot {} updated", updated.id);
        Ok(updated.into())
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = parking_spot::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found(ParkingSpot::ENTITY, id));
        }
        info!("Parking spot {} deleted", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::test_support::migrated_db;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn crud_round() {
        let db = migrated_db().await;
        let repo = SeaOrmParkingSpotRepository::new(db);

        let saved = repo
            .save(ParkingSpot::new("Level 1 / 14", "S", "free", Decimal::new(175, 2)))
            .await
            .unwrap();
        let found = repo.find_by_id(saved.id).await.unwrap().unwrap();
        assert_eq!(found, saved);

        let mut changed = found.clone();
        changed.status = "occupied".into();
        changed.price_per_hour = Decimal::new(2, 0);
        let updated = repo.update(changed).await.unwrap();
        assert_eq!(updated.status, "occupied");
        assert_eq!(updated.price_per_hour, Decimal::new(2, 0));

        repo.delete(saved.id).await.unwrap();
        assert!(repo.find_by_id(saved.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn ids_are_assigned_by_the_store() {
        let db = migrated_db().await;
        let repo = SeaOrmParkingSpotRepository::new(db);
        let mut a = ParkingSpot::new("a", "S", "free", Decimal::ONE);
        a.id = 500;
        let first = repo.save(a).await.unwrap();
        let second = repo
            .save(ParkingSpot::new("b", "S", "free", Decimal::ONE))
            .await
            .unwrap();
        assert_ne!(first.id, 500);
        assert_ne!(first.id, second.id);
        assert_eq!(repo.find_all().await.unwrap().len(), 2);
    }
}
