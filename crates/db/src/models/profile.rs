//! Profile entity model and DTOs.

use ladle_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Profile row from the `profiles` table.
///
/// A profile shares its `id` with the owning user and is created lazily
/// on first profile visit (or eagerly at signup).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Profile {
    pub id: DbId,
    pub username: String,
    pub full_name: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Name columns used for batch author display-name resolution.
#[derive(Debug, Clone, FromRow)]
pub struct AuthorName {
    pub id: DbId,
    pub username: String,
    pub full_name: Option<String>,
}
