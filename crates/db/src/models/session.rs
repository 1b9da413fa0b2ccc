//! Refresh-token session model and DTOs.

use ladle_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Session row from the `user_sessions` table.
///
/// Stores only the SHA-256 hash of the refresh token; the plaintext
/// token is returned to the client once and never persisted.
#[derive(Debug, Clone, FromRow)]
pub struct UserSession {
    pub id: DbId,
    pub user_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
    pub is_revoked: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a new session.
#[derive(Debug)]
pub struct CreateSession {
    pub user_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
}
