//! SeaORM implementation of InvoiceRepository

use async_trait::async_trait;
use log::{debug, info};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::domain::invoice::{Invoice, InvoiceRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::invoice;

pub struct SeaOrmInvoiceRepository {
    db: DatabaseConnection,
}

impl SeaOrmInvoiceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InvoiceRepository for SeaOrmInvoiceRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Invoice>> {
        let model = invoice::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn find_all(&self) -> DomainResult<Vec<Invoice>> {
        let models = invoice::Entity::find()
            .order_by_asc(invoice::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn save(&self, inv: Invoice) -> DomainResult<Invoice> {
        inv.validate()?;

        let model = invoice::ActiveModel {
            date_generated: Set(inv.date_generated),
            total_amount: Set(inv.total_amount),
            ..Default::default()
        };
        let saved = model.insert(&self.db).await?;
        info!("Invoice {} saved: total={}", saved.id, saved.total_amount);
        Ok(saved.into())
    }

    async fn update(&self, inv: Invoice) -> DomainResult<Invoice> {
        inv.validate()?;

        let Some(existing) = invoice::Entity::find_by_id(inv.id).one(&self.db).await? else {
            return Err(DomainError::not_found(Invoice::ENTITY, inv.id));
        };

        let mut model: invoice::ActiveModel = existing.into();
        model.date_generated = Set(inv.date_generated);
        model.total_amount = Set(inv.total_amount);

        let updated = model.update(&self.db).await?;
        debug!("Invoice {} updated", updated.id);
        Ok(updated.into())
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = invoice::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found(Invoice::ENTITY, id));
        }
        info!("Invoice {} deleted", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::entities::payment;
    use crate::infrastructure::database::repositories::{
        SeaOrmPaymentMethodRepository, SeaOrmPaymentRepository,
    };
    use crate::domain::{
        Payment, PaymentMethod, PaymentMethodRepository, PaymentRepository,
    };
    use crate::infrastructure::database::test_support::migrated_db;
    use chrono::Utc;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn deleting_invoice_detaches_payments() {
        let db = migrated_db().await;
        let invoices = SeaOrmInvoiceRepository::new(db.clone());
        let invoice = invoices
            .save(Invoice::new(Utc::now(), Decimal::new(50, 0)))
            .await
            .unwrap();

        let method = SeaOrmPaymentMethodRepository::new(db.clone())
            .save(PaymentMethod::new("Card", "x"))
            .await
            .unwrap();
        let mut p = Payment::new(Decimal::new(50, 0), Utc::now(), "Paid", method.id);
        p.invoice_id = Some(invoice.id);
        let payments = SeaOrmPaymentRepository::new(db.clone());
        let saved = payments.save(p).await.unwrap();
        assert_eq!(saved.invoice_id, Some(invoice.id));

        invoices.delete(invoice.id).await.unwrap();

        let row = payment::Entity::find_by_id(saved.id)
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(row.invoice_id, None);
    }
}
