//! Common test utilities for integration tests
//!
//! Provides in-memory recipe repositories so the store and the menu can be
//! exercised without a database.

#![allow(dead_code)]

use async_trait::async_trait;
use recipe_book::error::{StoreError, StoreResult};
use recipe_book::menu::Menu;
use recipe_book::repositories::RecipeRepository;
use recipe_book::services::RecipeStore;
use recipe_book_shared::{NewRecipe, Recipe, RecipeChanges};
use std::sync::Mutex;

/// Repository keeping recipes in a vector, with the same unique-name rule
/// as the `recipes` table
#[derive(Default)]
pub struct InMemoryRecipeRepository {
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    recipes: Vec<Recipe>,
    next_id: i64,
}

impl InMemoryRecipeRepository {
    /// Copy of every stored recipe, oldest first
    pub fn snapshot(&self) -> Vec<Recipe> {
        self.state.lock().unwrap().recipes.clone()
    }
}

#[async_trait]
impl RecipeRepository for InMemoryRecipeRepository {
    async fn create(&self, input: &NewRecipe) -> StoreResult<Recipe> {
        let mut state = self.state.lock().unwrap();
        if state.recipes.iter().any(|r| r.name == input.name) {
            return Err(StoreError::DuplicateName(input.name.clone()));
        }

        state.next_id += 1;
        let recipe = Recipe {
            id: state.next_id,
            name: input.name.clone(),
            ingredients: input.ingredients.clone(),
            steps: input.steps.clone(),
        };
        state.recipes.push(recipe.clone());
        Ok(recipe)
    }

    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Recipe>> {
        let state = self.state.lock().unwrap();
        Ok(state.recipes.iter().find(|r| r.name == name).cloned())
    }

    async fn update(&self, name: &str, changes: &RecipeChanges) -> StoreResult<Option<Recipe>> {
        let mut state = self.state.lock().unwrap();
        let Some(index) = state.recipes.iter().position(|r| r.name == name) else {
            return Ok(None);
        };

        if let Some(new_name) = &changes.name {
            let taken = state
                .recipes
                .iter()
                .enumerate()
                .any(|(i, r)| i != index && &r.name == new_name);
            if taken {
                return Err(StoreError::DuplicateName(new_name.clone()));
            }
        }

        let recipe = &mut state.recipes[index];
        changes.apply_to(recipe);
        Ok(Some(recipe.clone()))
    }

    async fn delete(&self, name: &str) -> StoreResult<bool> {
        let mut state = self.state.lock().unwrap();
        let before = state.recipes.len();
        state.recipes.retain(|r| r.name != name);
        Ok(state.recipes.len() < before)
    }

    async fn list_names(&self) -> StoreResult<Vec<String>> {
        let state = self.state.lock().unwrap();
        Ok(state.recipes.iter().map(|r| r.name.clone()).collect())
    }
}

/// Repository whose every call fails like an unreachable database
pub struct UnavailableRepository;

#[async_trait]
impl RecipeRepository for UnavailableRepository {
    async fn create(&self, _input: &NewRecipe) -> StoreResult<Recipe> {
        Err(StoreError::Storage(sqlx::Error::PoolTimedOut))
    }

    async fn find_by_name(&self, _name: &str) -> StoreResult<Option<Recipe>> {
        Err(StoreError::Storage(sqlx::Error::PoolTimedOut))
    }

    async fn update(&self, _name: &str, _changes: &RecipeChanges) -> StoreResult<Option<Recipe>> {
        Err(StoreError::Storage(sqlx::Error::PoolTimedOut))
    }

    async fn delete(&self, _name: &str) -> StoreResult<bool> {
        Err(StoreError::Storage(sqlx::Error::PoolTimedOut))
    }

    async fn list_names(&self) -> StoreResult<Vec<String>> {
        Err(StoreError::Storage(sqlx::Error::PoolTimedOut))
    }
}

/// A store over an empty in-memory repository
pub fn memory_store() -> RecipeStore<InMemoryRecipeRepository> {
    RecipeStore::new(InMemoryRecipeRepository::default())
}

/// Drive the menu with scripted input lines and return everything printed
pub async fn run_menu<R: RecipeRepository>(store: &RecipeStore<R>, lines: &[&str]) -> String {
    let mut input = lines.join("\n");
    input.push('\n');

    let mut output = Vec::new();
    Menu::new(store, input.as_bytes(), &mut output)
        .run()
        .await
        .expect("menu I/O failed");

    String::from_utf8(output).unwrap()
}
