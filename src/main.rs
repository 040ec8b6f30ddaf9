//! Parking reservations server
//!
//! ```sh
//! # Default config (~/.config/parking-reservations/config.toml)
//! parking-reservations
//!
//! # Custom config and port
//! parking-reservations --config /etc/parking/config.toml --api-port 9090
//!
//! # Validate config without starting
//! parking-reservations --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use parking_reservations::config::AppConfig;
use parking_reservations::server::{init_tracing, ServerHandle, ServerOptions};

#[derive(Parser, Debug)]
#[command(
    name = "parking-reservations",
    version,
    about = "REST API for parking spaces, reservations and payments",
    long_about = "CRUD service for parking spaces, spots, managers, availability monitors, \
                  reservations, payment methods, payments and invoices, with an audit log.\n\n\
                  Default config: ~/.config/parking-reservations/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "PARKING_CONFIG")]
    config: Option<PathBuf>,

    /// Override the REST API listen port.
    #[arg(long)]
    api_port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .unwrap_or_else(parking_reservations::default_config_path);
    let loaded = AppConfig::load(&config_path);

    if cli.check {
        let config = loaded?;
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   API address : {}", config.api_address());
        println!("   Database    : {}", config.database.url);
        println!("   Log level   : {}", config.logging.level);
        return Ok(());
    }

    let (mut config, load_error) = match loaded {
        Ok(cfg) => (cfg, None),
        Err(e) => {
            let mut fallback = AppConfig::default();
            fallback.apply_env();
            (fallback, Some(e))
        }
    };
    if let Some(port) = cli.api_port {
        config.server.api_port = port;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    init_tracing(&config);
    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
    }

    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await?;
    handle.install_signal_handler();
    info!("Press Ctrl+C to shut down gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;
    Ok(())
}
