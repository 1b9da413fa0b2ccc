//! Handlers for recipe comments.
//!
//! Creation and listing hang off `/recipes/{id}/comments`; editing and
//! deletion address the comment directly at `/comments/{id}` with the same
//! absent-or-unowned Forbidden gate the recipe mutations use.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use ladle_core::error::CoreError;
use ladle_core::profile::ANONYMOUS_AUTHOR;
use ladle_core::social::validate_comment_content;
use ladle_core::types::DbId;
use ladle_db::models::comment::Comment;
use ladle_db::repositories::CommentRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::handlers::profiles::author_display_names;
use crate::handlers::recipes::ensure_recipe_exists;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/* --------------------------------------------------------------------------
Request / response types
-------------------------------------------------------------------------- */

/// Request body for creating or updating a comment.
#[derive(Debug, Deserialize)]
pub struct CommentInput {
    pub content: String,
}

/// A comment row with its author's display name.
#[derive(Debug, Serialize)]
pub struct CommentWithAuthor {
    #[serde(flatten)]
    pub comment: Comment,
    pub author_name: String,
}

/* --------------------------------------------------------------------------
Handlers
-------------------------------------------------------------------------- */

/// GET /recipes/{id}/comments
///
/// All comments on a recipe, oldest first, with author names. Public.
pub async fn list_comments(
    State(state): State<AppState>,
    Path(recipe_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_recipe_exists(&state.pool, recipe_id).await?;

    let comments = CommentRepo::list_for_recipe(&state.pool, recipe_id).await?;

    let user_ids: Vec<DbId> = comments.iter().map(|c| c.user_id).collect();
    let names = author_display_names(&state.pool, &user_ids).await;

    let comments: Vec<CommentWithAuthor> = comments
        .into_iter()
        .map(|comment| {
            let author_name = names
                .get(&comment.user_id)
                .cloned()
                .unwrap_or_else(|| ANONYMOUS_AUTHOR.to_string());
            CommentWithAuthor {
                comment,
                author_name,
            }
        })
        .collect();

    Ok(Json(DataResponse { data: comments }))
}

/// POST /recipes/{id}/comments
///
/// Comment on a recipe. Content is stored trimmed; blank is rejected.
pub async fn create_comment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(recipe_id): Path<DbId>,
    Json(input): Json<CommentInput>,
) -> AppResult<impl IntoResponse> {
    ensure_recipe_exists(&state.pool, recipe_id).await?;

    let content = validate_comment_content(&input.content)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let comment = CommentRepo::create(&state.pool, auth.user_id, recipe_id, &content).await?;

    tracing::info!(
        user_id = auth.user_id,
        recipe_id = recipe_id,
        comment_id = comment.id,
        "Comment created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: comment })))
}

/// PUT /comments/{id}
///
/// Edit a comment's content. Owner only.
pub async fn update_comment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CommentInput>,
) -> AppResult<impl IntoResponse> {
    ensure_comment_owner(&state.pool, id, auth.user_id, "edit").await?;

    let content = validate_comment_content(&input.content)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let comment = CommentRepo::update(&state.pool, id, &content)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Comment",
                id,
            })
        })?;

    tracing::info!(user_id = auth.user_id, comment_id = id, "Comment updated");

    Ok(Json(DataResponse { data: comment }))
}

/// DELETE /comments/{id}
///
/// Delete a comment. Owner only.
pub async fn delete_comment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_comment_owner(&state.pool, id, auth.user_id, "delete").await?;

    let deleted = CommentRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Comment",
            id,
        }));
    }

    tracing::info!(user_id = auth.user_id, comment_id = id, "Comment deleted");

    Ok(StatusCode::NO_CONTENT)
}

/* --------------------------------------------------------------------------
Helpers
-------------------------------------------------------------------------- */

/// Ownership gate for comment mutations.
///
/// An absent comment and someone else's comment produce the same Forbidden
/// response. `action` is the verb used in the message ("edit", "delete").
async fn ensure_comment_owner(
    pool: &sqlx::PgPool,
    comment_id: DbId,
    user_id: DbId,
    action: &str,
) -> AppResult<()> {
    let comment = CommentRepo::find_by_id(pool, comment_id).await?;
    match comment {
        Some(c) if c.user_id == user_id => Ok(()),
        _ => Err(AppError::Core(CoreError::Forbidden(format!(
            "You can only {action} your own comments"
        )))),
    }
}
