//! Invoice domain entity

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::domain::money::ensure_non_negative;
use crate::domain::DomainResult;

#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub id: i32,
    pub date_generated: DateTime<Utc>,
    pub total_amount: Decimal,
}

impl Invoice {
    /// Name used in not-found and confirmation messages
    pub const ENTITY: &'static str = "Invoice";

    pub fn new(date_generated: DateTime<Utc>, total_amount: Decimal) -> Self {
        Self {
            id: 0,
            date_generated,
            total_amount,
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        ensure_non_negative("totalAmount", self.total_amount)
    }
}
