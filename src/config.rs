//! Application configuration
//!
//! Loaded from a TOML file (default `~/.config/parking-reservations/config.toml`).
//! Every section and field has a default, so a partial file is valid:
//!
//! ```toml
//! [server]
//! api_port = 8080
//!
//! [database]
//! url = "sqlite://./parking.db?mode=rwc"
//!
//! [logging]
//! level = "debug"
//! format = "json"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::shared::ConfigError;

const APP_DIR: &str = "parking-reservations";

/// Default location of the config file.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join("config.toml")
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSettings,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Read and validate the config file at `path`.
    ///
    /// `DATABASE_URL` in the environment overrides `database.url`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let mut config = Self::from_toml(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;

        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides. Also used on top of the defaults when
    /// the config file could not be loaded.
    pub fn apply_env(&mut self) {
        self.apply_database_url(std::env::var("DATABASE_URL").ok());
    }

    fn apply_database_url(&mut self, url: Option<String>) {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.database.url = url;
        }
    }

    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.api_port == 0 {
            return Err(ConfigError::Invalid("server.api_port must be non-zero".into()));
        }
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::Invalid("database.url must not be empty".into()));
        }
        let pool = &self.database.pool;
        if pool.max_connections == 0 || pool.min_connections > pool.max_connections {
            return Err(ConfigError::Invalid(format!(
                "database.pool: min_connections ({}) must not exceed max_connections ({}) and max must be positive",
                pool.min_connections, pool.max_connections
            )));
        }
        match self.logging.format.to_lowercase().as_str() {
            "text" | "json" => Ok(()),
            other => Err(ConfigError::Invalid(format!(
                "logging.format must be \"text\" or \"json\", got \"{}\"",
                other
            ))),
        }
    }

    pub fn api_address(&self) -> String {
        format!("{}:{}", self.server.api_host, self.server.api_port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub api_host: String,
    pub api_port: u16,
    /// Seconds to wait for in-flight requests on shutdown.
    pub shutdown_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_host: "0.0.0.0".to_string(),
            api_port: 8080,
            shutdown_timeout: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// Connection URL (e.g. "sqlite://./parking.db?mode=rwc")
    pub url: String,
    pub pool: PoolConfig,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: "sqlite://./parking.db?mode=rwc".to_string(),
            pool: PoolConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
    pub idle_timeout_secs: u64,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 10,
            min_connections: 1,
            connect_timeout_secs: 8,
            idle_timeout_secs: 300,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. "info" or "parking_reservations=debug,sea_orm=warn"
    pub level: String,
    /// "text" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let cfg = AppConfig::from_toml("").unwrap();
        assert_eq!(cfg.server.api_port, 8080);
        assert_eq!(cfg.logging.format, "text");
        assert_eq!(cfg.database.pool.max_connections, 10);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let cfg = AppConfig::from_toml(
            r#"
            [server]
            api_port = 9090

            [logging]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.api_port, 9090);
        assert_eq!(cfg.server.api_host, "0.0.0.0");
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.logging.format, "json");
        assert_eq!(cfg.api_address(), "0.0.0.0:9090");
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        let mut cfg = AppConfig::default();
        cfg.logging.format = "xml".into();
        assert!(matches!(cfg.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn pool_bounds_are_checked() {
        let mut cfg = AppConfig::default();
        cfg.database.pool.min_connections = 20;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn database_url_override_applies_to_defaults() {
        let mut cfg = AppConfig::default();
        cfg.apply_database_url(Some("sqlite::memory:".into()));
        assert_eq!(cfg.database.url, "sqlite::memory:");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn absent_or_blank_database_url_keeps_default() {
        let mut cfg = AppConfig::default();
        cfg.apply_database_url(None);
        cfg.apply_database_url(Some("  ".into()));
        assert_eq!(cfg.database.url, DatabaseSettings::default().url);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = AppConfig::load(Path::new("/nonexistent/parking/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn default_path_ends_with_app_dir() {
        let path = default_config_path();
        assert!(path.ends_with("parking-reservations/config.toml"));
    }
}
