//! Input validation functions
//!
//! Recipe fields only need to be non-empty once surrounding whitespace is
//! removed. Values are stored trimmed.

use crate::models::{NewRecipe, RecipeChanges};
use thiserror::Error;

/// Map recipe field names to the labels shown to the user
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "name" => "Recipe name",
        "ingredients" => "Ingredients",
        "steps" => "Steps",
        _ => field_name,
    }
}

/// Validation error with field context
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{display_label} {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    pub fn empty(field: &str) -> Self {
        Self::new(field, "cannot be empty")
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}.", self)
    }
}

/// Trim a required field, failing when nothing is left
pub fn require_non_empty(field: &str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty(field));
    }
    Ok(trimmed.to_string())
}

/// Trim an optional field; blank input means "keep the current value"
pub fn optional_non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Validate and trim every field of a new recipe
pub fn validate_new_recipe(input: &NewRecipe) -> Result<NewRecipe, ValidationError> {
    Ok(NewRecipe {
        name: require_non_empty("name", &input.name)?,
        ingredients: require_non_empty("ingredients", &input.ingredients)?,
        steps: require_non_empty("steps", &input.steps)?,
    })
}

/// Trim the fields of an update, dropping the blank ones
pub fn normalize_changes(changes: &RecipeChanges) -> RecipeChanges {
    RecipeChanges {
        name: optional_non_empty(changes.name.as_deref()),
        ingredients: optional_non_empty(changes.ingredients.as_deref()),
        steps: optional_non_empty(changes.steps.as_deref()),
    }
}
