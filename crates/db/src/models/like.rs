//! Like entity model.

use ladle_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Like row from the `likes` table: at most one per (user, recipe).
#[derive(Debug, Clone, FromRow)]
pub struct Like {
    pub id: DbId,
    pub user_id: DbId,
    pub recipe_id: DbId,
    pub created_at: Timestamp,
}
