//! # Parking Reservations
//!
//! REST service for parking spaces, spots, reservations and payments.
//!
//! ## Architecture
//!
//! - **domain**: entities, eager-loaded views and repository traits
//! - **application**: services on top of the repositories (audit log)
//! - **infrastructure**: SeaORM entities, migrations and repositories
//! - **interfaces**: axum HTTP API with Swagger documentation
//! - **server**: process lifecycle (startup, graceful shutdown)

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};
pub use interfaces::http::create_api_router;
