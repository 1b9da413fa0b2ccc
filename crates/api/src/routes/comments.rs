//! Route definitions for direct comment mutations.
//!
//! Creation and listing live under `/recipes/{id}/comments`; this group
//! covers the comment-addressed edit and delete.

use axum::routing::put;
use axum::Router;

use crate::handlers::comments;
use crate::state::AppState;

/// Comment routes, registered as `/comments`.
///
/// ```text
/// PUT    /{id}     update_comment
/// DELETE /{id}     delete_comment
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        put(comments::update_comment).delete(comments::delete_comment),
    )
}
