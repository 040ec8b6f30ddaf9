//! Invoice DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Invoice;
use crate::interfaces::http::common::rules::non_negative;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceResponse {
    pub id: i32,
    pub date_generated: DateTime<Utc>,
    #[schema(value_type = f64, example = 40.0)]
    pub total_amount: Decimal,
}

impl From<Invoice> for InvoiceResponse {
    fn from(i: Invoice) -> Self {
        Self {
            id: i.id,
            date_generated: i.date_generated,
            total_amount: i.total_amount,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRequest {
    pub date_generated: DateTime<Utc>,
    #[validate(custom(function = "non_negative"))]
    #[schema(value_type = f64, example = 40.0)]
    pub total_amount: Decimal,
}

impl InvoiceRequest {
    pub fn into_domain(self, id: i32) -> Invoice {
        let mut invoice = Invoice::new(self.date_generated, self.total_amount);
        invoice.id = id;
        invoice
    }
}
