//! Handlers for recipe likes.
//!
//! The toggle is check-then-act with no transaction; the unique
//! (user, recipe) pair constraint makes the race benign. Display reads
//! degrade to zero/false instead of failing the page.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use ladle_core::types::DbId;
use ladle_db::repositories::LikeRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::handlers::recipes::ensure_recipe_exists;
use crate::middleware::auth::{AuthUser, OptionalAuthUser};
use crate::response::DataResponse;
use crate::state::AppState;

/* --------------------------------------------------------------------------
Response types
-------------------------------------------------------------------------- */

/// Result of a like toggle: whether the caller now likes the recipe.
#[derive(Debug, Serialize)]
pub struct ToggleLikeResponse {
    pub liked: bool,
}

/// Like state of a recipe for the current viewer.
#[derive(Debug, Serialize)]
pub struct LikeSummary {
    pub count: i64,
    pub liked: bool,
}

/* --------------------------------------------------------------------------
Handlers
-------------------------------------------------------------------------- */

/// POST /recipes/{id}/like
///
/// Toggle the caller's like on a recipe.
pub async fn toggle_like(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(recipe_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_recipe_exists(&state.pool, recipe_id).await?;

    let existing = LikeRepo::find_by_user_and_recipe(&state.pool, auth.user_id, recipe_id).await?;

    let liked = match existing {
        Some(like) => {
            LikeRepo::delete(&state.pool, like.id).await?;
            false
        }
        None => {
            // Losing the insert race still means the like exists, which is
            // what the caller asked for.
            LikeRepo::create(&state.pool, auth.user_id, recipe_id).await?;
            true
        }
    };

    tracing::info!(
        user_id = auth.user_id,
        recipe_id = recipe_id,
        liked,
        "Recipe like toggled"
    );

    Ok(Json(DataResponse {
        data: ToggleLikeResponse { liked },
    }))
}

/// GET /recipes/{id}/likes
///
/// Like count plus whether the current viewer has liked. Public; anonymous
/// viewers always see `liked: false`.
pub async fn get_likes(
    OptionalAuthUser(viewer): OptionalAuthUser,
    State(state): State<AppState>,
    Path(recipe_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_recipe_exists(&state.pool, recipe_id).await?;

    let (count, liked) = like_status(&state.pool, recipe_id, viewer.map(|v| v.user_id)).await;

    Ok(Json(DataResponse {
        data: LikeSummary { count, liked },
    }))
}

/* --------------------------------------------------------------------------
Helpers
-------------------------------------------------------------------------- */

/// Like count and viewer flag for a recipe, degrading on read failure.
///
/// These feed display surfaces only, so a persistence failure renders as
/// `(0, false)` with a warning instead of an error page.
pub(crate) async fn like_status(
    pool: &sqlx::PgPool,
    recipe_id: DbId,
    viewer: Option<DbId>,
) -> (i64, bool) {
    let count = match LikeRepo::count_for_recipe(pool, recipe_id).await {
        Ok(count) => count,
        Err(e) => {
            tracing::warn!(recipe_id, error = %e, "Like count lookup failed; rendering 0");
            0
        }
    };

    let liked = match viewer {
        Some(user_id) => match LikeRepo::exists(pool, user_id, recipe_id).await {
            Ok(liked) => liked,
            Err(e) => {
                tracing::warn!(
                    recipe_id,
                    user_id,
                    error = %e,
                    "Liked lookup failed; rendering false"
                );
                false
            }
        },
        None => false,
    };

    (count, liked)
}
