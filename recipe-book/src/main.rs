//! Recipe Book
//!
//! A single-user recipe manager driven by a text menu.
//!
//! ## Architecture
//!
//! The application follows a layered architecture:
//! - Menu: prompts, input collection and console output
//! - Services: the recipe store (validation and error mapping)
//! - Repositories: SQL against the `recipes` table
//! - Database: PostgreSQL with SQLx

use anyhow::{Context, Result};
use recipe_book::repositories::PgRecipeRepository;
use recipe_book::services::RecipeStore;
use recipe_book::{config, db, menu};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    // Load configuration
    let config = config::AppConfig::load().context("Failed to load configuration")?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if config::AppConfig::is_production() { "production" } else { "development" },
        "Starting Recipe Book"
    );

    // Validate production configuration
    if config::AppConfig::is_production() {
        validate_production_config(&config)?;
    }

    // Connect and create tables; failures here are fatal
    info!("Connecting to database...");
    let pool = db::create_pool(&config.database).await?;
    db::run_migrations(&pool).await?;
    db::health_check(&pool).await?;
    println!("Database tables created successfully.");

    let store = RecipeStore::new(PgRecipeRepository::new(pool.clone()));
    menu::run_stdio(&store).await?;

    pool.close().await;
    info!("Recipe Book shutdown complete");
    Ok(())
}

/// Initialize tracing/logging
///
/// Logs go to stderr so they never interleave with the menu on stdout.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if config::AppConfig::is_production() {
            "recipe_book=info,sqlx=warn".into()
        } else {
            "recipe_book=debug,sqlx=warn".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config::AppConfig::is_production() {
        // JSON logging for production (better for log aggregation)
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        // Pretty logging for development
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }
}

/// Validate configuration for production deployment
fn validate_production_config(config: &config::AppConfig) -> Result<()> {
    let mut errors = Vec::new();

    if config.database.url.is_none() && config.database.password_is_empty() {
        errors.push("Database password must be set in production");
    }

    if !errors.is_empty() {
        for err in &errors {
            error!("Configuration error: {}", err);
        }
        anyhow::bail!("Invalid production configuration");
    }

    Ok(())
}
