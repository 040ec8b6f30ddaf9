pub mod errors;
pub mod shutdown;

pub use errors::{ConfigError, DomainError};
pub use shutdown::{ShutdownCoordinator, ShutdownSignal};
