//! Recipe repository for database operations

use crate::error::{StoreError, StoreResult};
use async_trait::async_trait;
use recipe_book_shared::{NewRecipe, Recipe, RecipeChanges};
use sqlx::PgPool;

/// Recipe record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RecipeRecord {
    pub id: i64,
    pub name: String,
    pub ingredients: String,
    pub steps: String,
}

impl From<RecipeRecord> for Recipe {
    fn from(record: RecipeRecord) -> Self {
        Recipe {
            id: record.id,
            name: record.name,
            ingredients: record.ingredients,
            steps: record.steps,
        }
    }
}

/// Storage operations behind the recipe store
///
/// Implementations must reject a name already used by another recipe with
/// [`StoreError::DuplicateName`]. Inputs arrive already trimmed and
/// validated.
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Insert a new recipe and return it with its assigned id
    async fn create(&self, input: &NewRecipe) -> StoreResult<Recipe>;

    /// Find a recipe by its exact name
    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Recipe>>;

    /// Overwrite the fields set in `changes`. Returns `None` when no recipe
    /// has that name.
    async fn update(&self, name: &str, changes: &RecipeChanges) -> StoreResult<Option<Recipe>>;

    /// Delete a recipe by name. Returns whether a row was removed.
    async fn delete(&self, name: &str) -> StoreResult<bool>;

    /// All recipe names, oldest first
    async fn list_names(&self) -> StoreResult<Vec<String>>;
}

/// PostgreSQL-backed recipe repository
///
/// Each call checks a connection out of the pool for its own duration;
/// the connection goes back to the pool when the call returns, whether it
/// succeeded or not.
#[derive(Debug, Clone)]
pub struct PgRecipeRepository {
    pool: PgPool,
}

impl PgRecipeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecipeRepository for PgRecipeRepository {
    async fn create(&self, input: &NewRecipe) -> StoreResult<Recipe> {
        let mut conn = self.pool.acquire().await?;

        let record = sqlx::query_as::<_, RecipeRecord>(
            r#"
            INSERT INTO recipes (name, ingredients, steps)
            VALUES ($1, $2, $3)
            RETURNING id, name, ingredients, steps
            "#,
        )
        .bind(&input.name)
        .bind(&input.ingredients)
        .bind(&input.steps)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| StoreError::from_write(e, &input.name))?;

        Ok(record.into())
    }

    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Recipe>> {
        let mut conn = self.pool.acquire().await?;

        let record = sqlx::query_as::<_, RecipeRecord>(
            r#"
            SELECT id, name, ingredients, steps
            FROM recipes
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(record.map(Recipe::from))
    }

    async fn update(&self, name: &str, changes: &RecipeChanges) -> StoreResult<Option<Recipe>> {
        let mut conn = self.pool.acquire().await?;

        let record = sqlx::query_as::<_, RecipeRecord>(
            r#"
            UPDATE recipes
            SET name = COALESCE($2, name),
                ingredients = COALESCE($3, ingredients),
                steps = COALESCE($4, steps)
            WHERE name = $1
            RETURNING id, name, ingredients, steps
            "#,
        )
        .bind(name)
        .bind(&changes.name)
        .bind(&changes.ingredients)
        .bind(&changes.steps)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| StoreError::from_write(e, changes.name.as_deref().unwrap_or(name)))?;

        Ok(record.map(Recipe::from))
    }

    async fn delete(&self, name: &str) -> StoreResult<bool> {
        let mut conn = self.pool.acquire().await?;

        let result = sqlx::query(
            r#"
            DELETE FROM recipes
            WHERE name = $1
            "#,
        )
        .bind(name)
        .execute(&mut *conn)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_names(&self) -> StoreResult<Vec<String>> {
        let mut conn = self.pool.acquire().await?;

        let names = sqlx::query_scalar::<_, String>(
            r#"
            SELECT name
            FROM recipes
            ORDER BY id
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_into_recipe() {
        let record = RecipeRecord {
            id: 7,
            name: "Salad".to_string(),
            ingredients: "lettuce,tomato".to_string(),
            steps: "chop. toss.".to_string(),
        };
        let recipe = Recipe::from(record);
        assert_eq!(recipe.id, 7);
        assert_eq!(recipe.name, "Salad");
        assert_eq!(recipe.details().steps, "chop. toss.");
    }
}
