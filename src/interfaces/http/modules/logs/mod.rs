//! Audit log resource: `/api/Log`

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
