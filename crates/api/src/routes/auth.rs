//! Route definitions for account signup and session management.

use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Auth routes, registered as `/auth`.
///
/// ```text
/// POST /signup     signup
/// POST /login      login
/// POST /refresh    refresh
/// POST /logout     logout
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .route("/refresh", post(auth::refresh))
        .route("/logout", post(auth::logout))
}
