//! Recipe store error handling
//!
//! Every store operation returns a [`StoreError`] on failure. The menu
//! turns these into messages and keeps running.

use recipe_book_shared::ValidationError;
use thiserror::Error;

/// Error kinds reported by the recipe store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{0}")]
    Validation(String),

    #[error("Recipe not found: {0}")]
    NotFound(String),

    #[error("A recipe named '{0}' already exists")]
    DuplicateName(String),

    #[error("Database error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl StoreError {
    /// Stable error code, used in logs
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::Validation(_) => "VALIDATION_ERROR",
            StoreError::NotFound(_) => "NOT_FOUND",
            StoreError::DuplicateName(_) => "DUPLICATE_NAME",
            StoreError::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Map a storage failure, turning unique-constraint violations on the
    /// recipe name into [`StoreError::DuplicateName`]
    pub fn from_write(err: sqlx::Error, name: &str) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                StoreError::DuplicateName(name.to_string())
            }
            _ => StoreError::Storage(err),
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(err: ValidationError) -> Self {
        StoreError::Validation(err.user_message())
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
