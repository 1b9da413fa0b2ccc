//! Repository for the `likes` table.

use ladle_core::types::DbId;
use sqlx::PgPool;

use crate::models::like::Like;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, recipe_id, created_at";

/// Provides toggle-oriented operations for likes.
pub struct LikeRepo;

impl LikeRepo {
    /// Find a user's like on a recipe, if any.
    pub async fn find_by_user_and_recipe(
        pool: &PgPool,
        user_id: DbId,
        recipe_id: DbId,
    ) -> Result<Option<Like>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM likes WHERE user_id = $1 AND recipe_id = $2");
        sqlx::query_as::<_, Like>(&query)
            .bind(user_id)
            .bind(recipe_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a like unless the pair already exists.
    ///
    /// Returns `None` when a concurrent insert won the
    /// `uq_likes_user_recipe` race; the pair is liked either way.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        recipe_id: DbId,
    ) -> Result<Option<Like>, sqlx::Error> {
        let query = format!(
            "INSERT INTO likes (user_id, recipe_id)
             VALUES ($1, $2)
             ON CONFLICT (user_id, recipe_id) DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Like>(&query)
            .bind(user_id)
            .bind(recipe_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a like by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM likes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count the likes on a recipe.
    pub async fn count_for_recipe(pool: &PgPool, recipe_id: DbId) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM likes WHERE recipe_id = $1")
            .bind(recipe_id)
            .fetch_one(pool)
            .await?;
        Ok(count.0)
    }

    /// Check whether a user has liked a recipe.
    pub async fn exists(pool: &PgPool, user_id: DbId, recipe_id: DbId) -> Result<bool, sqlx::Error> {
        let found: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM likes WHERE user_id = $1 AND recipe_id = $2)",
        )
        .bind(user_id)
        .bind(recipe_id)
        .fetch_one(pool)
        .await?;
        Ok(found.0)
    }
}
