//! Invoice aggregate

pub mod model;
pub mod repository;

pub use model::Invoice;
pub use repository::InvoiceRepository;
