//! Configuration management for the Recipe Book
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: RB__)

use anyhow::Result;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::env;

/// Application configuration
#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub database: DatabaseConfig,
}

/// Database configuration
///
/// `url`, when set, takes precedence over the individual connection parts.
#[derive(Debug, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: Secret<String>,
    /// Database (schema) holding the `recipes` table
    pub name: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    /// Log every SQL statement at debug level
    pub log_statements: bool,
}

impl DatabaseConfig {
    /// True when no password has been configured
    pub fn password_is_empty(&self) -> bool {
        self.password.expose_secret().is_empty()
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with RB__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = Self::defaults()?
            // Load from environment-specific config file
            .add_source(config::File::with_name(&config_file).required(false))
            // Override with environment variables (RB__ prefix)
            // e.g., RB__DATABASE__HOST=db.local sets database.host
            .add_source(config::Environment::with_prefix("RB").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Builder preloaded with the default values
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        config::Config::builder()
            .set_default("database.host", "localhost")?
            .set_default("database.port", 5432)?
            .set_default("database.username", "postgres")?
            .set_default("database.password", "")?
            .set_default("database.name", "recipe_book")?
            .set_default("database.max_connections", 2)?
            .set_default("database.acquire_timeout_secs", 10)?
            .set_default("database.log_statements", false)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_config() -> AppConfig {
        AppConfig::defaults()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = default_config();
        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.database.port, 5432);
        assert_eq!(config.database.username, "postgres");
        assert_eq!(config.database.name, "recipe_book");
        assert_eq!(config.database.max_connections, 2);
        assert!(config.database.url.is_none());
        assert!(config.database.password_is_empty());
        assert!(!config.database.log_statements);
    }

    #[test]
    fn test_overrides_replace_defaults() {
        let config: AppConfig = AppConfig::defaults()
            .unwrap()
            .set_override("database.host", "db.internal")
            .unwrap()
            .set_override("database.port", "6543")
            .unwrap()
            .set_override("database.password", "hunter2")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.port, 6543);
        assert_eq!(config.database.password.expose_secret(), "hunter2");
    }

    #[test]
    fn test_password_is_redacted_in_debug() {
        let config: AppConfig = AppConfig::defaults()
            .unwrap()
            .set_override("database.password", "hunter2")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert!(!format!("{:?}", config).contains("hunter2"));
    }

    #[test]
    fn test_is_production() {
        // Default should be false (development)
        assert!(!AppConfig::is_production());
    }
}
