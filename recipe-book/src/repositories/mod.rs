//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod recipe;

pub use recipe::{PgRecipeRepository, RecipeRecord, RecipeRepository};
