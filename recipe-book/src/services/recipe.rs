//! Recipe store
//!
//! Validates user-entered fields and drives the recipe repository:
//! - Create, update, and delete recipes by name
//! - Look up a single recipe or its details
//! - List every stored recipe name

use crate::error::{StoreError, StoreResult};
use crate::repositories::RecipeRepository;
use recipe_book_shared::validation::{normalize_changes, require_non_empty, validate_new_recipe};
use recipe_book_shared::{NewRecipe, Recipe, RecipeChanges, RecipeDetails};
use tracing::{debug, info};

/// Recipe store for record management
///
/// The repository is injected once at startup; the store holds no other
/// state.
pub struct RecipeStore<R> {
    repo: R,
}

impl<R: RecipeRepository> RecipeStore<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Get a reference to the underlying repository
    #[inline]
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Create a recipe and return its assigned id
    ///
    /// All three fields are trimmed and must be non-empty. A name that is
    /// already taken fails with [`StoreError::DuplicateName`] and leaves
    /// the existing recipe untouched.
    pub async fn create(&self, name: &str, ingredients: &str, steps: &str) -> StoreResult<i64> {
        let input = validate_new_recipe(&NewRecipe::new(name, ingredients, steps))?;

        let recipe = self.repo.create(&input).await?;
        info!(id = recipe.id, name = %recipe.name, "Recipe created");

        Ok(recipe.id)
    }

    /// Find a recipe by name. A blank name matches nothing.
    pub async fn find_by_name(&self, name: &str) -> StoreResult<Option<Recipe>> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(None);
        }

        let recipe = self.repo.find_by_name(name).await?;
        debug!(name = %name, found = recipe.is_some(), "Recipe lookup");

        Ok(recipe)
    }

    /// Update the fields of a recipe that are set and non-blank in `changes`
    ///
    /// Renaming onto the name of a different recipe fails with
    /// [`StoreError::DuplicateName`].
    pub async fn update(&self, name: &str, changes: RecipeChanges) -> StoreResult<Recipe> {
        let name = require_non_empty("name", name)?;
        let changes = normalize_changes(&changes);

        if changes.is_empty() {
            debug!(name = %name, "Update with no changes");
            let current = self.repo.find_by_name(&name).await?;
            return current.ok_or(StoreError::NotFound(name));
        }

        let recipe = self
            .repo
            .update(&name, &changes)
            .await?
            .ok_or_else(|| StoreError::NotFound(name.clone()))?;
        info!(id = recipe.id, from = %name, name = %recipe.name, "Recipe updated");

        Ok(recipe)
    }

    /// Delete a recipe permanently
    pub async fn delete(&self, name: &str) -> StoreResult<()> {
        let name = require_non_empty("name", name)?;

        if !self.repo.delete(&name).await? {
            return Err(StoreError::NotFound(name));
        }
        info!(name = %name, "Recipe deleted");

        Ok(())
    }

    /// All stored recipe names, in storage order
    pub async fn list_names(&self) -> StoreResult<Vec<String>> {
        let names = self.repo.list_names().await?;
        debug!(count = names.len(), "Listed recipes");
        Ok(names)
    }

    /// Ingredients and steps of a recipe
    pub async fn view_details(&self, name: &str) -> StoreResult<RecipeDetails> {
        let name = require_non_empty("name", name)?;

        let recipe = self.repo.find_by_name(&name).await?;
        recipe
            .map(|recipe| recipe.details())
            .ok_or(StoreError::NotFound(name))
    }
}
