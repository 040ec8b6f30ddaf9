//! Application layer: services that sit between the HTTP handlers and the repositories

pub mod services;

pub use services::LogService;
