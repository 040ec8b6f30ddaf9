//! SeaORM implementation of PaymentMethodRepository

use async_trait::async_trait;
use log::{debug, info};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::domain::payment_method::{PaymentMethod, PaymentMethodRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::payment_method;

pub struct SeaOrmPaymentMethodRepository {
    db: DatabaseConnection,
}

impl SeaOrmPaymentMethodRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PaymentMethodRepository for SeaOrmPaymentMethodRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<PaymentMethod>> {
        let model = payment_method::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn find_all(&self) -> DomainResult<Vec<PaymentMethod>> {
        let models = payment_method::Entity::find()
            .order_by_asc(payment_method::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn save(&self, method: PaymentMethod) -> DomainResult<PaymentMethod> {
        let model = payment_method::ActiveModel {
            method_type: Set(method.method_type),
            details: Set(method.details),
            ..Default::default()
        };
        let saved = model.insert(&self.db).await?;
        info!("Payment method saved: {} ({})", saved.method_type, saved.id);
        Ok(saved.into())
    }

    async fn update(&self, method: PaymentMethod) -> DomainResult<PaymentMethod> {
        let Some(existing) = payment_method::Entity::find_by_id(method.id)
            .one(&self.db)
            .await?
        else {
            return Err(DomainError::not_found(PaymentMethod::ENTITY, method.id));
        };

        let mut model: payment_method::ActiveModel = existing.into();
        model.method_type = Set(method.method_type);
        model.details = Set(method.details);

        let updated = model.update(&self.db).await?;
        debug!("Payment method {} updated", updated.id);
        Ok(updated.into())
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = payment_method::Entity::delete_by_id(id)
            .exec(&self.db)
            .await?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found(PaymentMethod::ENTITY, id));
        }
        info!("Payment method {} deleted", id);
        Ok(())
    }
}
