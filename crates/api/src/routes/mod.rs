pub mod auth;
pub mod comments;
pub mod health;
pub mod profiles;
pub mod recipes;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup                     signup (public)
/// /auth/login                      login (public)
/// /auth/refresh                    refresh (public)
/// /auth/logout                     logout (requires auth)
///
/// /profile                         get (lazily created), update
///
/// /recipes                         list/search, create
/// /recipes/{id}                    detail (public), update, delete (owner)
/// /recipes/{id}/like               toggle like (POST)
/// /recipes/{id}/likes              like count + viewer flag (public)
/// /recipes/{id}/comments           list (public), create
///
/// /comments/{id}                   update, delete (owner)
///
/// /saved                           recipes the caller has liked
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/profile", profiles::router())
        .nest("/recipes", recipes::router())
        .nest("/comments", comments::router())
        .nest("/saved", recipes::saved_router())
}
