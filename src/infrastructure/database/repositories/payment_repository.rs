//! SeaORM implementation of PaymentRepository

use async_trait::async_trait;
use log::{debug, info};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, LoaderTrait, QueryOrder, Set};

use crate::domain::payment::{Payment, PaymentDetails, PaymentRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{payment, payment_method};

pub struct SeaOrmPaymentRepository {
    db: DatabaseConnection,
}

impl SeaOrmPaymentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn with_method(
        &self,
        payments: Vec<payment::Model>,
    ) -> DomainResult<Vec<PaymentDetails>> {
        if payments.is_empty() {
            return Ok(Vec::new());
        }
        let methods = payments.load_one(payment_method::Entity, &self.db).await?;
        Ok(payments
            .into_iter()
            .zip(methods)
            .map(|(payment, method)| PaymentDetails {
                payment: payment.into(),
                payment_method: method.map(Into::into),
            })
            .collect())
    }
}

#[async_trait]
impl PaymentRepository for SeaOrmPaymentRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<PaymentDetails>> {
        let Some(model) = payment::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        Ok(self.with_method(vec![model]).await?.pop())
    }

    async fn find_all(&self) -> DomainResult<Vec<PaymentDetails>> {
        let models = payment::Entity::find()
            .order_by_asc(payment::Column::Id)
            .all(&self.db)
            .await?;
        self.with_method(models).await
    }

    async fn save(&self, p: Payment) -> DomainResult<Payment> {
        p.validate()?;

        let model = payment::ActiveModel {
            amount: Set(p.amount),
            date: Set(p.date),
            status: Set(p.status),
            payment_method_id: Set(p.payment_method_id),
            invoice_id: Set(p.invoice_id),
            ..Default::default()
        };
        let saved = model.insert(&self.db).await?;
        info!(
            "Payment {} saved: amount={}, method={}",
            saved.id, saved.amount, saved.payment_method_id
        );
        Ok(saved.into())
    }

    async fn update(&self, p: Payment) -> DomainResult<Payment> {
        p.validate()?;

        let Some(existing) = payment::Entity::find_by_id(p.id).one(&self.db).await? else {
            return Err(DomainError::not_found(Payment::ENTITY, p.id));
        };

        let mut model: payment::ActiveModel = existing.into();
        model.amount = Set(p.amount);
        model.date = Set(p.date);
        model.status = Set(p.status);

        let updated = model.update(&self.db).await?;
        debug!("Payment {} updated: status={}", updated.id, updated.status);
        Ok(updated.into())
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = payment::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found(Payment::ENTITY, id));
        }
        info!("Payment {} deleted", id);
        Ok(())
    }
}
