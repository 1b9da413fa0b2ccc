//! Handlers for the `/profile` resource.
//!
//! Profiles are created lazily: the first authenticated read materializes
//! the row with a username derived from the account email. The display-name
//! helper here is shared by the recipe and comment listings.

use std::collections::HashMap;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use ladle_core::error::CoreError;
use ladle_core::profile::{derive_username, display_name, validate_username};
use ladle_core::types::DbId;
use ladle_db::models::profile::Profile;
use ladle_db::repositories::{ProfileRepo, UserRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/* --------------------------------------------------------------------------
Request / response types
-------------------------------------------------------------------------- */

/// Request body for `PUT /profile`.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub username: String,
    pub full_name: Option<String>,
}

/// A profile joined with the account email for the owner's own view.
#[derive(Debug, Serialize)]
pub struct ProfileWithEmail {
    #[serde(flatten)]
    pub profile: Profile,
    pub email: String,
}

/* --------------------------------------------------------------------------
Handlers
-------------------------------------------------------------------------- */

/// GET /profile
///
/// Return the caller's profile, creating it first if absent.
pub async fn get_profile(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    // The account row supplies the email and seeds the derived username.
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    let default_username = derive_username(&user.email, user.id);
    let profile = ProfileRepo::ensure(&state.pool, user.id, &default_username)
        .await?
        .ok_or_else(|| AppError::InternalError("Profile could not be created".into()))?;

    Ok(Json(DataResponse {
        data: ProfileWithEmail {
            profile,
            email: user.email,
        },
    }))
}

/// PUT /profile
///
/// Update the caller's username and full name.
pub async fn update_profile(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpdateProfileRequest>,
) -> AppResult<impl IntoResponse> {
    validate_username(&input.username)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let full_name = input
        .full_name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    // Fast path; uq_profiles_username is the authority under races.
    if ProfileRepo::username_taken(&state.pool, &input.username, Some(auth.user_id)).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "Username is already taken".into(),
        )));
    }

    let profile = ProfileRepo::update(&state.pool, auth.user_id, &input.username, full_name)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Profile",
                id: auth.user_id,
            })
        })?;

    tracing::info!(user_id = auth.user_id, "Profile updated");

    Ok(Json(DataResponse { data: profile }))
}

/* --------------------------------------------------------------------------
Helpers
-------------------------------------------------------------------------- */

/// Batch-resolve author display names for the given user ids.
///
/// A failed lookup degrades to an empty map (the listing renders Anonymous)
/// rather than failing the page. Callers default missing entries to
/// [`ladle_core::profile::ANONYMOUS_AUTHOR`].
pub(crate) async fn author_display_names(
    pool: &sqlx::PgPool,
    user_ids: &[DbId],
) -> HashMap<DbId, String> {
    if user_ids.is_empty() {
        return HashMap::new();
    }

    let authors = match ProfileRepo::author_names(pool, user_ids).await {
        Ok(authors) => authors,
        Err(e) => {
            tracing::warn!(error = %e, "Author name lookup failed; rendering Anonymous");
            return HashMap::new();
        }
    };

    authors
        .into_iter()
        .map(|a| (a.id, display_name(a.full_name.as_deref(), Some(&a.username))))
        .collect()
}
