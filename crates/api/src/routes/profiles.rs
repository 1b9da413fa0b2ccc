//! Route definitions for the caller's profile.

use axum::routing::get;
use axum::Router;

use crate::handlers::profiles;
use crate::state::AppState;

/// Profile routes, registered as `/profile`.
///
/// ```text
/// GET /     get_profile (creates the row on first read)
/// PUT /     update_profile
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(profiles::get_profile).put(profiles::update_profile),
    )
}
