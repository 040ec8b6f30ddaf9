//! Payment domain entity

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::domain::money::ensure_non_negative;
use crate::domain::payment_method::PaymentMethod;
use crate::domain::DomainResult;

#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: i32,
    pub amount: Decimal,
    pub date: DateTime<Utc>,
    pub status: String,
    /// Fixed at creation
    pub payment_method_id: i32,
    /// Invoice this payment settles. No endpoint sets it yet.
    pub invoice_id: Option<i32>,
}

impl Payment {
    /// Name used in not-found and confirmation messages
    pub const ENTITY: &'static str = "Payment";

    pub fn new(
        amount: Decimal,
        date: DateTime<Utc>,
        status: impl Into<String>,
        payment_method_id: i32,
    ) -> Self {
        Self {
            id: 0,
            amount,
            date,
            status: status.into(),
            payment_method_id,
            invoice_id: None,
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        ensure_non_negative("amount", self.amount)
    }
}

/// Payment with its payment method
#[derive(Debug, Clone)]
pub struct PaymentDetails {
    pub payment: Payment,
    pub payment_method: Option<PaymentMethod>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_payment_has_no_invoice() {
        let payment = Payment::new(Decimal::new(1000, 2), Utc::now(), "Paid", 3);
        assert_eq!(payment.invoice_id, None);
        assert_eq!(payment.payment_method_id, 3);
        assert!(payment.validate().is_ok());
    }

    #[test]
    fn negative_amount_is_invalid() {
        let payment = Payment::new(Decimal::new(-1, 2), Utc::now(), "Paid", 1);
        assert!(payment.validate().is_err());
    }
}
