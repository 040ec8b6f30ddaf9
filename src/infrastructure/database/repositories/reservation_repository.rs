//! SeaORM implementation of ReservationRepository

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, LoaderTrait, QueryOrder, Set};

use crate::domain::reservation::{Reservation, ReservationDetails, ReservationRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{
    parking_reservation_manager, parking_spot, reservation,
};

pub struct SeaOrmReservationRepository {
    db: DatabaseConnection,
}

impl SeaOrmReservationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn with_relations(
        &self,
        reservations: Vec<reservation::Model>,
    ) -> DomainResult<Vec<ReservationDetails>> {
        if reservations.is_empty() {
            return Ok(Vec::new());
        }
        let spots = reservations.load_one(parking_spot::Entity, &self.db).await?;
        let managers = reservations
            .load_one(parking_reservation_manager::Entity, &self.db)
            .await?;

        Ok(reservations
            .into_iter()
            .zip(spots)
            .zip(managers)
            .map(|((r, spot), manager)| ReservationDetails {
                reservation: r.into(),
                parking_spot: spot.map(Into::into),
                parking_reservation_manager: manager.map(Into::into),
            })
            .collect())
    }
}

// ── ReservationRepository impl ──────────────────────────────────

#[async_trait]
impl ReservationRepository for SeaOrmReservationRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<ReservationDetails>> {
        let Some(model) = reservation::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        Ok(self.with_relations(vec![model]).await?.pop())
    }

    async fn find_all(&self) -> DomainResult<Vec<ReservationDetails>> {
        let models = reservation::Entity::find()
            .order_by_asc(reservation::Column::Id)
            .all(&self.db)
            .await?;
        self.with_relations(models).await
    }

    async fn save(&self, r: Reservation) -> DomainResult<Reservation> {
        r.validate()?;
        debug!(
            "Saving reservation for spot {} by manager {}",
            r.parking_spot_id, r.parking_reservation_manager_id
        );

        let now = Utc::now();
        let model = reservation::ActiveModel {
            start_date: Set(r.start_date),
            end_date: Set(r.end_date),
            status: Set(r.status),
            total_amount: Set(r.total_amount),
            created_at: Set(now),
            updated_at: Set(now),
            parking_spot_id: Set(r.parking_spot_id),
            parking_reservation_manager_id: Set(r.parking_reservation_manager_id),
            ..Default::default()
        };
        let saved = model.insert(&self.db).await?;
        info!(
            "Reservation {} saved: spot={}, {} → {}",
            saved.id, saved.parking_spot_id, saved.start_date, saved.end_date
        );
        Ok(saved.into())
    }

    async fn update(&self, r: Reservation) -> DomainResult<Reservation> {
        r.validate()?;

        let Some(existing) = reservation::Entity::find_by_id(r.id).one(&self.db).await? else {
            return Err(DomainError::not_found(Reservation::ENTITY, r.id));
        };

        let mut model: reservation::ActiveModel = existing.into();
        model.start_date = Set(r.start_date);
        model.end_date = Set(r.end_date);
        model.status = Set(r.status);
        model.total_amount = Set(r.total_amount);
        model.updated_at = Set(Utc::now());

        let updated = model.update(&self.db).await?;
        debug!("Reservation {} updated: status={}", updated.id, updated.status);
        Ok(updated.into())
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = reservation::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found(Reservation::ENTITY, id));
        }
        info!("Reservation {} deleted", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        ParkingReservationManager, ParkingReservationManagerRepository, ParkingSpot,
        ParkingSpotRepository,
    };
    use crate::infrastructure::database::repositories::{
        SeaOrmParkingReservationManagerRepository, SeaOrmParkingSpotRepository,
    };
    use crate::infrastructure::database::test_support::migrated_db;
    use chrono::Duration;
    use rust_decimal::Decimal;

    async fn fixtures(db: &DatabaseConnection) -> (i32, i32) {
        let spot = SeaOrmParkingSpotRepository::new(db.clone())
            .save(ParkingSpot::new("P-7", "M", "free", Decimal::new(3, 0)))
            .await
            .unwrap();
        let manager = SeaOrmParkingReservationManagerRepository::new(db.clone())
            .save(ParkingReservationManager::new("Dana", "dana@example.com"))
            .await
            .unwrap();
        (spot.id, manager.id)
    }

    #[tokio::test]
    async fn reservation_loads_spot_and_manager() {
        let db = migrated_db().await;
        let (spot, manager) = fixtures(&db).await;
        let repo = SeaOrmReservationRepository::new(db);

        let start = Utc::now();
        let saved = repo
            .save(Reservation::new(
                start,
                start + Duration::hours(2),
                "Confirmed",
                Decimal::new(6, 0),
                spot,
                manager,
            ))
            .await
            .unwrap();

        let details = repo.find_by_id(saved.id).await.unwrap().unwrap();
        assert_eq!(details.reservation.total_amount, Decimal::new(6, 0));
        assert_eq!(details.parking_spot.unwrap().location, "P-7");
        assert_eq!(
            details.parking_reservation_manager.unwrap().manager_name,
            "Dana"
        );
    }

    #[tokio::test]
    async fn unknown_spot_is_a_database_fault() {
        let db = migrated_db().await;
        let (_, manager) = fixtures(&db).await;
        let repo = SeaOrmReservationRepository::new(db);

        let start = Utc::now();
        let err = repo
            .save(Reservation::new(
                start,
                start + Duration::hours(1),
                "Pending",
                Decimal::ZERO,
                9999,
                manager,
            ))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Database(_)));
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn deleting_spot_removes_its_reservations() {
        let db = migrated_db().await;
        let (spot, manager) = fixtures(&db).await;
        let repo = SeaOrmReservationRepository::new(db.clone());
        let start = Utc::now();
        repo.save(Reservation::new(
            start,
            start + Duration::hours(1),
            "Pending",
            Decimal::ONE,
            spot,
            manager,
        ))
        .await
        .unwrap();

        SeaOrmParkingSpotRepository::new(db)
            .delete(spot)
            .await
            .unwrap();
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
