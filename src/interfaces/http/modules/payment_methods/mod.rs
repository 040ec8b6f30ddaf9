//! Payment method resource: `/api/PaymentMethod`

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
