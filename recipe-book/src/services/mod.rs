//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! the interface and the repositories.

pub mod recipe;

pub use recipe::RecipeStore;
