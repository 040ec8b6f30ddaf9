//! Payment DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{Payment, PaymentDetails};
use crate::interfaces::http::common::rules::non_negative;
use crate::interfaces::http::modules::payment_methods::PaymentMethodResponse;

/// Payment with the method it was made by
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    pub id: i32,
    #[schema(value_type = f64, example = 12.0)]
    pub amount: Decimal,
    pub date: DateTime<Utc>,
    pub status: String,
    pub payment_method_id: i32,
    /// Set only when the payment has been attached to an invoice
    pub invoice_id: Option<i32>,
    pub payment_method: Option<PaymentMethodResponse>,
}

impl From<PaymentDetails> for PaymentResponse {
    fn from(d: PaymentDetails) -> Self {
        let p = d.payment;
        Self {
            id: p.id,
            amount: p.amount,
            date: p.date,
            status: p.status,
            payment_method_id: p.payment_method_id,
            invoice_id: p.invoice_id,
            payment_method: d.payment_method.map(Into::into),
        }
    }
}

/// Body for Create and Update. `paymentMethodId` is ignored on Update.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    #[validate(custom(function = "non_negative"))]
    #[schema(value_type = f64, example = 12.0)]
    pub amount: Decimal,
    pub date: DateTime<Utc>,
    #[validate(length(max = 50))]
    pub status: String,
    pub payment_method_id: i32,
}

impl PaymentRequest {
    pub fn into_domain(self, id: i32) -> Payment {
        let mut payment = Payment::new(self.amount, self.date, self.status, self.payment_method_id);
        payment.id = id;
        payment
    }
}
