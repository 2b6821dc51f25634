//! Recipe Book Shared Library
//!
//! This crate contains the recipe models and input validation shared by
//! the store and the interactive menu.

pub mod models;
pub mod validation;

// Re-export commonly used items
pub use models::{NewRecipe, Recipe, RecipeChanges, RecipeDetails};
pub use validation::ValidationError;
