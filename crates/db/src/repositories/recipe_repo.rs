//! Repository for the `recipes` table.

use ladle_core::types::DbId;
use sqlx::PgPool;

use crate::models::recipe::{Recipe, RecipeFields};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, user_id, title, ingredients, instructions, cooking_time, difficulty, category, created_at";

/// Provides CRUD and search operations for recipes.
pub struct RecipeRepo;

impl RecipeRepo {
    /// Insert a new recipe owned by `user_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        fields: &RecipeFields,
    ) -> Result<Recipe, sqlx::Error> {
        let query = format!(
            "INSERT INTO recipes
                (user_id, title, ingredients, instructions, cooking_time, difficulty, category)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Recipe>(&query)
            .bind(user_id)
            .bind(&fields.title)
            .bind(&fields.ingredients)
            .bind(&fields.instructions)
            .bind(fields.cooking_time)
            .bind(&fields.difficulty)
            .bind(&fields.category)
            .fetch_one(pool)
            .await
    }

    /// Find a recipe by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Recipe>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recipes WHERE id = $1");
        sqlx::query_as::<_, Recipe>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Load only the owner column, for ownership checks.
    pub async fn find_owner(pool: &PgPool, id: DbId) -> Result<Option<DbId>, sqlx::Error> {
        let owner: Option<(DbId,)> = sqlx::query_as("SELECT user_id FROM recipes WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(owner.map(|row| row.0))
    }

    /// Check whether a recipe exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let found: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM recipes WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(found.0)
    }

    /// List all recipes, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Recipe>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recipes ORDER BY created_at DESC");
        sqlx::query_as::<_, Recipe>(&query).fetch_all(pool).await
    }

    /// Case-insensitive substring search over title, category, and
    /// ingredients, newest first.
    pub async fn search(pool: &PgPool, term: &str) -> Result<Vec<Recipe>, sqlx::Error> {
        let pattern = format!("%{term}%");
        let query = format!(
            "SELECT {COLUMNS} FROM recipes
             WHERE title ILIKE $1 OR category ILIKE $1 OR ingredients ILIKE $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Recipe>(&query)
            .bind(&pattern)
            .fetch_all(pool)
            .await
    }

    /// List the recipes a user has liked, newest recipe first.
    pub async fn list_liked_by(pool: &PgPool, user_id: DbId) -> Result<Vec<Recipe>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM recipes
             WHERE id IN (SELECT recipe_id FROM likes WHERE user_id = $1)
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Recipe>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Apply the full field set to a recipe, returning the updated row.
    ///
    /// The owner column is never written. Returns `None` if no row with
    /// the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        fields: &RecipeFields,
    ) -> Result<Option<Recipe>, sqlx::Error> {
        let query = format!(
            "UPDATE recipes SET
                title = $2,
                ingredients = $3,
                instructions = $4,
                cooking_time = $5,
                difficulty = $6,
                category = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Recipe>(&query)
            .bind(id)
            .bind(&fields.title)
            .bind(&fields.ingredients)
            .bind(&fields.instructions)
            .bind(fields.cooking_time)
            .bind(&fields.difficulty)
            .bind(&fields.category)
            .fetch_optional(pool)
            .await
    }

    /// Delete a recipe. Returns `true` if a row was removed.
    ///
    /// Likes and comments on the recipe go with it (ON DELETE CASCADE).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
