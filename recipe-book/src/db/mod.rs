//! Database connection and pool management
//!
//! One pool is created at startup and handed to the recipe repository.
//! Connections are checked out per store operation.

use crate::config::DatabaseConfig;
use anyhow::{Context, Result};
use log::LevelFilter;
use secrecy::ExposeSecret;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use sqlx::ConnectOptions;
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

const APPLICATION_NAME: &str = "recipe-book";

/// Build connection options from configuration
pub fn connect_options(config: &DatabaseConfig) -> Result<PgConnectOptions> {
    let options = match &config.url {
        Some(url) => PgConnectOptions::from_str(url).context("Invalid database URL")?,
        None => PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.username)
            .password(config.password.expose_secret())
            .database(&config.name),
    }
    .application_name(APPLICATION_NAME);

    let options = if config.log_statements {
        options.log_statements(LevelFilter::Debug)
    } else {
        options.disable_statement_logging()
    };

    Ok(options)
}

/// Create a PostgreSQL connection pool
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool> {
    let connect_options = connect_options(config)?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .test_before_acquire(true)
        .connect_with(connect_options)
        .await
        .context("Failed to connect to the database")?;

    info!(
        "Database pool created: max={}, host={}",
        config.max_connections, config.host
    );

    Ok(pool)
}

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to create database tables")?;
    info!("Database migrations completed successfully");
    Ok(())
}

/// Check database health
pub async fn health_check(pool: &PgPool) -> Result<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map(|_| ())
        .map_err(|e| {
            warn!("Database health check failed: {}", e);
            e.into()
        })
}
