//! Comment entity model.

use ladle_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Comment row from the `comments` table. Content is stored trimmed.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Comment {
    pub id: DbId,
    pub user_id: DbId,
    pub recipe_id: DbId,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
