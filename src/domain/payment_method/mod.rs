//! Payment method aggregate

pub mod model;
pub mod repository;

pub use model::PaymentMethod;
pub use repository::PaymentMethodRepository;
