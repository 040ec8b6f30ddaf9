//! Payment method DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::PaymentMethod;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodResponse {
    pub id: i32,
    #[serde(rename = "type")]
    pub method_type: String,
    pub details: String,
}

impl From<PaymentMethod> for PaymentMethodResponse {
    fn from(m: PaymentMethod) -> Self {
        Self {
            id: m.id,
            method_type: m.method_type,
            details: m.details,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodRequest {
    /// Card, cash, transfer, ...
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 50, message = "type is required"))]
    pub method_type: String,
    #[validate(length(max = 500))]
    pub details: String,
}

impl PaymentMethodRequest {
    pub fn into_domain(self, id: i32) -> PaymentMethod {
        let mut method = PaymentMethod::new(self.method_type, self.details);
        method.id = id;
        method
    }
}
