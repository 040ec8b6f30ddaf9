//! Payment method domain entity

/// How a payment is made (card, cash, ...)
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentMethod {
    pub id: i32,
    pub method_type: String,
    pub details: String,
}

impl PaymentMethod {
    /// Name used in not-found and confirmation messages
    pub const ENTITY: &'static str = "Payment Method";

    pub fn new(method_type: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            id: 0,
            method_type: method_type.into(),
            details: details.into(),
        }
    }
}
