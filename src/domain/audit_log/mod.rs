//! Audit log aggregate
//!
//! Append-only record of who did what. Entries are never updated or deleted.

pub mod model;
pub mod repository;

pub use model::LogEntry;
pub use repository::LogRepository;
