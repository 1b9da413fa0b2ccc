//! Repository for the `comments` table.

use ladle_core::types::DbId;
use sqlx::PgPool;

use crate::models::comment::Comment;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, recipe_id, content, created_at, updated_at";

/// Provides CRUD operations for comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a new comment, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        recipe_id: DbId,
        content: &str,
    ) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (user_id, recipe_id, content)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(user_id)
            .bind(recipe_id)
            .bind(content)
            .fetch_one(pool)
            .await
    }

    /// Find a comment by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments WHERE id = $1");
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a recipe's comments, oldest first.
    pub async fn list_for_recipe(
        pool: &PgPool,
        recipe_id: DbId,
    ) -> Result<Vec<Comment>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM comments WHERE recipe_id = $1 ORDER BY created_at ASC");
        sqlx::query_as::<_, Comment>(&query)
            .bind(recipe_id)
            .fetch_all(pool)
            .await
    }

    /// Replace a comment's content, refreshing `updated_at`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        content: &str,
    ) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!(
            "UPDATE comments SET content = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .bind(content)
            .fetch_optional(pool)
            .await
    }

    /// Delete a comment. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
