//! HTTP REST API
//!
//! - `common`: response envelopes, error mapping, extractors
//! - `modules`: one module per resource plus health and metrics
//! - `router`: route table and OpenAPI document
//! - `state`: shared handler state

pub mod common;
pub mod modules;
pub mod router;
pub mod state;

#[cfg(test)]
mod tests;

pub use router::{create_api_router, ApiDoc};
pub use state::AppState;
