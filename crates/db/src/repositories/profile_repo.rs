//! Repository for the `profiles` table.

use ladle_core::types::DbId;
use sqlx::PgPool;

use crate::models::profile::{AuthorName, Profile};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, full_name, created_at, updated_at";

/// Provides CRUD operations for profiles.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Insert a profile for a user, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        username: &str,
        full_name: Option<&str>,
    ) -> Result<Profile, sqlx::Error> {
        let query = format!(
            "INSERT INTO profiles (id, username, full_name)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .bind(username)
            .bind(full_name)
            .fetch_one(pool)
            .await
    }

    /// Find a profile by its user id.
    pub async fn find_by_id(pool: &PgPool, user_id: DbId) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE id = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Return the user's profile, creating it with the given default
    /// username if absent.
    ///
    /// Idempotent under concurrent calls: the insert is
    /// `ON CONFLICT (id) DO NOTHING`, and a lost race falls back to
    /// re-reading the winner's row. `Ok(None)` means the profile could
    /// neither be found nor created.
    pub async fn ensure(
        pool: &PgPool,
        user_id: DbId,
        default_username: &str,
    ) -> Result<Option<Profile>, sqlx::Error> {
        if let Some(profile) = Self::find_by_id(pool, user_id).await? {
            return Ok(Some(profile));
        }

        let query = format!(
            "INSERT INTO profiles (id, username)
             VALUES ($1, $2)
             ON CONFLICT (id) DO NOTHING
             RETURNING {COLUMNS}"
        );
        let inserted = sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .bind(default_username)
            .fetch_optional(pool)
            .await?;

        if inserted.is_some() {
            return Ok(inserted);
        }

        // Lost the race; the winner's row is visible now.
        Self::find_by_id(pool, user_id).await
    }

    /// Replace a profile's username and full name, refreshing `updated_at`.
    ///
    /// Returns `None` if no profile with the given id exists.
    pub async fn update(
        pool: &PgPool,
        user_id: DbId,
        username: &str,
        full_name: Option<&str>,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!(
            "UPDATE profiles SET
                username = $2,
                full_name = $3,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .bind(username)
            .bind(full_name)
            .fetch_optional(pool)
            .await
    }

    /// Check whether a username is held by any profile, optionally
    /// excluding one user's own profile.
    pub async fn username_taken(
        pool: &PgPool,
        username: &str,
        excluding: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        let taken: (bool,) = sqlx::query_as(
            "SELECT EXISTS(
                SELECT 1 FROM profiles
                WHERE username = $1 AND ($2::BIGINT IS NULL OR id <> $2)
             )",
        )
        .bind(username)
        .bind(excluding)
        .fetch_one(pool)
        .await?;
        Ok(taken.0)
    }

    /// Batch-fetch the name columns for the given user ids.
    pub async fn author_names(
        pool: &PgPool,
        user_ids: &[DbId],
    ) -> Result<Vec<AuthorName>, sqlx::Error> {
        sqlx::query_as::<_, AuthorName>(
            "SELECT id, username, full_name FROM profiles WHERE id = ANY($1)",
        )
        .bind(user_ids)
        .fetch_all(pool)
        .await
    }
}
