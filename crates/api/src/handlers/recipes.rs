//! Handlers for the `/recipes` and `/saved` resources.
//!
//! Mutations are gated on ownership: a recipe that is absent or owned by
//! someone else yields the same Forbidden response, so probing cannot tell
//! the two apart. Listings attach author display names resolved in one
//! batch query.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use ladle_core::error::CoreError;
use ladle_core::profile::ANONYMOUS_AUTHOR;
use ladle_core::recipe::{normalize_optional, parse_cooking_time, validate_recipe_fields};
use ladle_core::types::DbId;
use ladle_db::models::recipe::{Recipe, RecipeFields};
use ladle_db::repositories::RecipeRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::handlers::likes::like_status;
use crate::handlers::profiles::author_display_names;
use crate::middleware::auth::{AuthUser, OptionalAuthUser};
use crate::response::DataResponse;
use crate::state::AppState;

/* --------------------------------------------------------------------------
Request / response types
-------------------------------------------------------------------------- */

/// Request body for creating or updating a recipe.
///
/// `cooking_time` arrives as free text (the form field is free text); the
/// leading digit run is parsed into minutes and anything unparseable is
/// stored as unset.
#[derive(Debug, Deserialize)]
pub struct RecipeInput {
    pub title: String,
    pub ingredients: String,
    pub instructions: String,
    pub cooking_time: Option<String>,
    pub difficulty: Option<String>,
    pub category: Option<String>,
}

/// Query string for the dashboard listing: `GET /recipes?q=...`.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// A recipe row with its author's display name, as shown in listings.
#[derive(Debug, Serialize)]
pub struct RecipeWithAuthor {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub author_name: String,
}

/// The public detail view: recipe, author, and like state for the viewer.
#[derive(Debug, Serialize)]
pub struct RecipeDetail {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub author_name: String,
    pub like_count: i64,
    pub liked: bool,
}

/* --------------------------------------------------------------------------
Handlers
-------------------------------------------------------------------------- */

/// GET /recipes?q=...
///
/// The dashboard listing. A blank query returns all recipes; otherwise the
/// query matches title, category, or ingredients case-insensitively.
/// Newest first.
pub async fn list_recipes(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<impl IntoResponse> {
    let term = query.q.as_deref().map(str::trim).unwrap_or("");

    let recipes = if term.is_empty() {
        RecipeRepo::list(&state.pool).await?
    } else {
        RecipeRepo::search(&state.pool, term).await?
    };

    let recipes = with_author_names(&state.pool, recipes).await;

    Ok(Json(DataResponse { data: recipes }))
}

/// POST /recipes
///
/// Create a recipe owned by the caller.
pub async fn create_recipe(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<RecipeInput>,
) -> AppResult<impl IntoResponse> {
    let fields = normalized_fields(input)?;

    let recipe = RecipeRepo::create(&state.pool, auth.user_id, &fields).await?;

    tracing::info!(
        user_id = auth.user_id,
        recipe_id = recipe.id,
        "Recipe created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: recipe })))
}

/// GET /recipes/{id}
///
/// The public detail view. Anonymous viewers see `liked: false`.
pub async fn get_recipe(
    OptionalAuthUser(viewer): OptionalAuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let recipe = ensure_recipe_exists(&state.pool, id).await?;

    let names = author_display_names(&state.pool, &[recipe.user_id]).await;
    let author_name = names
        .get(&recipe.user_id)
        .cloned()
        .unwrap_or_else(|| ANONYMOUS_AUTHOR.to_string());

    let (like_count, liked) =
        like_status(&state.pool, recipe.id, viewer.map(|v| v.user_id)).await;

    Ok(Json(DataResponse {
        data: RecipeDetail {
            recipe,
            author_name,
            like_count,
            liked,
        },
    }))
}

/// PUT /recipes/{id}
///
/// Replace a recipe's fields. Owner only; `user_id` never changes.
pub async fn update_recipe(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<RecipeInput>,
) -> AppResult<impl IntoResponse> {
    ensure_recipe_owner(&state.pool, id, auth.user_id, "update").await?;

    let fields = normalized_fields(input)?;

    let recipe = RecipeRepo::update(&state.pool, id, &fields)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Recipe",
                id,
            })
        })?;

    tracing::info!(user_id = auth.user_id, recipe_id = id, "Recipe updated");

    Ok(Json(DataResponse { data: recipe }))
}

/// DELETE /recipes/{id}
///
/// Delete a recipe. Owner only; likes and comments cascade.
pub async fn delete_recipe(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_recipe_owner(&state.pool, id, auth.user_id, "delete").await?;

    let deleted = RecipeRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Recipe",
            id,
        }));
    }

    tracing::info!(user_id = auth.user_id, recipe_id = id, "Recipe deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /saved
///
/// The recipes the caller has liked, newest first.
pub async fn saved_recipes(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let recipes = RecipeRepo::list_liked_by(&state.pool, auth.user_id).await?;
    let recipes = with_author_names(&state.pool, recipes).await;

    Ok(Json(DataResponse { data: recipes }))
}

/* --------------------------------------------------------------------------
Helpers
-------------------------------------------------------------------------- */

/// Verify that a recipe exists, returning the row or NotFound.
pub(crate) async fn ensure_recipe_exists(
    pool: &sqlx::PgPool,
    recipe_id: DbId,
) -> AppResult<Recipe> {
    RecipeRepo::find_by_id(pool, recipe_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Recipe",
                id: recipe_id,
            })
        })
}

/// Ownership gate for recipe mutations.
///
/// An absent recipe and someone else's recipe produce the same Forbidden
/// response. `action` is the verb used in the message ("update", "delete").
async fn ensure_recipe_owner(
    pool: &sqlx::PgPool,
    recipe_id: DbId,
    user_id: DbId,
    action: &str,
) -> AppResult<()> {
    let owner = RecipeRepo::find_owner(pool, recipe_id).await?;
    if owner != Some(user_id) {
        return Err(AppError::Core(CoreError::Forbidden(format!(
            "You can only {action} your own recipes"
        ))));
    }
    Ok(())
}

/// Validate the required text fields and normalize the optional ones.
fn normalized_fields(input: RecipeInput) -> AppResult<RecipeFields> {
    validate_recipe_fields(&input.title, &input.ingredients, &input.instructions)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    Ok(RecipeFields {
        title: input.title,
        ingredients: input.ingredients,
        instructions: input.instructions,
        cooking_time: input.cooking_time.as_deref().and_then(parse_cooking_time),
        difficulty: input.difficulty.as_deref().and_then(normalize_optional),
        category: input.category.as_deref().and_then(normalize_optional),
    })
}

/// Attach author display names to a listing in one batch lookup.
async fn with_author_names(pool: &sqlx::PgPool, recipes: Vec<Recipe>) -> Vec<RecipeWithAuthor> {
    let user_ids: Vec<DbId> = recipes.iter().map(|r| r.user_id).collect();
    let names = author_display_names(pool, &user_ids).await;

    recipes
        .into_iter()
        .map(|recipe| {
            let author_name = names
                .get(&recipe.user_id)
                .cloned()
                .unwrap_or_else(|| ANONYMOUS_AUTHOR.to_string());
            RecipeWithAuthor {
                recipe,
                author_name,
            }
        })
        .collect()
}
