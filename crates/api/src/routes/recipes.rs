//! Route definitions for recipes, their likes and comments, and the
//! saved-recipes listing.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{comments, likes, recipes};
use crate::state::AppState;

/// Recipe routes, registered as `/recipes`.
///
/// ```text
/// GET    /                  list_recipes (?q= substring search)
/// POST   /                  create_recipe
/// GET    /{id}              get_recipe (public detail)
/// PUT    /{id}              update_recipe
/// DELETE /{id}              delete_recipe
/// POST   /{id}/like         toggle_like
/// GET    /{id}/likes        get_likes (public)
/// GET    /{id}/comments     list_comments (public)
/// POST   /{id}/comments     create_comment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(recipes::list_recipes).post(recipes::create_recipe))
        .route(
            "/{id}",
            get(recipes::get_recipe)
                .put(recipes::update_recipe)
                .delete(recipes::delete_recipe),
        )
        .route("/{id}/like", post(likes::toggle_like))
        .route("/{id}/likes", get(likes::get_likes))
        .route(
            "/{id}/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
}

/// Saved-recipes routes, registered as `/saved`.
///
/// ```text
/// GET /     saved_recipes (the caller's liked recipes)
/// ```
pub fn saved_router() -> Router<AppState> {
    Router::new().route("/", get(recipes::saved_recipes))
}
