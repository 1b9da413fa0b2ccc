//! HTTP-level integration tests for the recipe resource: creation with
//! field normalization, the public detail view, ownership gates, search,
//! and the saved-recipes listing.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, delete_auth, get, get_auth, post_json_auth, put_json_auth, signup_user,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create a recipe via the API and return the created row's JSON.
async fn create_recipe(
    app: axum::Router,
    token: &str,
    title: &str,
    category: Option<&str>,
    ingredients: &str,
) -> serde_json::Value {
    let body = serde_json::json!({
        "title": title,
        "ingredients": ingredients,
        "instructions": "Combine everything and simmer.",
        "category": category,
    });
    let response = post_json_auth(app, "/api/v1/recipes", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED, "recipe creation should succeed");
    let json = body_json(response).await;
    json["data"].clone()
}

// ---------------------------------------------------------------------------
// Creation tests
// ---------------------------------------------------------------------------

/// Creating a recipe returns 201 with normalized fields and the caller as owner.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_recipe(pool: PgPool) {
    let app = common::build_test_app(pool);
    let signup = signup_user(app.clone(), "author@test.com", "author", "test_password_123!").await;
    let token = signup["access_token"].as_str().unwrap();

    let body = serde_json::json!({
        "title": "Tomato Soup",
        "ingredients": "Tomatoes, basil, cream",
        "instructions": "Simmer and blend.",
        "cooking_time": "45 minutes",
        "difficulty": "  Easy  ",
        "category": "",
    });
    let response = post_json_auth(app, "/api/v1/recipes", body, token).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Tomato Soup");
    assert_eq!(json["data"]["user_id"], signup["user"]["id"]);
    assert_eq!(json["data"]["cooking_time"], 45, "leading digit run is parsed");
    assert_eq!(json["data"]["difficulty"], "Easy", "difficulty is trimmed");
    assert!(json["data"]["category"].is_null(), "blank category becomes null");
}

/// An unparseable cooking time is stored as unset rather than rejected.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_recipe_unparseable_cooking_time(pool: PgPool) {
    let app = common::build_test_app(pool);
    let signup = signup_user(app.clone(), "timeless@test.com", "timeless", "test_password_123!").await;
    let token = signup["access_token"].as_str().unwrap();

    let body = serde_json::json!({
        "title": "Overnight Oats",
        "ingredients": "Oats, milk",
        "instructions": "Refrigerate overnight.",
        "cooking_time": "a while",
    });
    let response = post_json_auth(app, "/api/v1/recipes", body, token).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["data"]["cooking_time"].is_null());
}

/// A blank title is rejected with 400.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_recipe_blank_title_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let signup = signup_user(app.clone(), "titleless@test.com", "titleless", "test_password_123!").await;
    let token = signup["access_token"].as_str().unwrap();

    let body = serde_json::json!({
        "title": "   ",
        "ingredients": "Air",
        "instructions": "None.",
    });
    let response = post_json_auth(app, "/api/v1/recipes", body, token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Title is required");
}

// ---------------------------------------------------------------------------
// Detail view tests
// ---------------------------------------------------------------------------

/// The detail view is public and carries author name and like state.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_recipe_detail_public(pool: PgPool) {
    let app = common::build_test_app(pool);
    let signup = signup_user(app.clone(), "chef@test.com", "chef", "test_password_123!").await;
    let token = signup["access_token"].as_str().unwrap();
    let recipe = create_recipe(app.clone(), token, "Public Stew", None, "Beef, carrots").await;

    // No Authorization header at all.
    let uri = format!("/api/v1/recipes/{}", recipe["id"]);
    let response = get(app, &uri).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Public Stew");
    assert_eq!(json["data"]["author_name"], "chef");
    assert_eq!(json["data"]["like_count"], 0);
    assert_eq!(json["data"]["liked"], false);
}

/// A stale or garbage token on the public detail view renders the
/// anonymous view instead of 401.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_recipe_detail_tolerates_invalid_token(pool: PgPool) {
    let app = common::build_test_app(pool);
    let signup = signup_user(app.clone(), "tolerant@test.com", "tolerant", "test_password_123!").await;
    let token = signup["access_token"].as_str().unwrap();
    let recipe = create_recipe(app.clone(), token, "Open Salad", None, "Greens").await;

    let uri = format!("/api/v1/recipes/{}", recipe["id"]);
    let response = get_auth(app, &uri, "expired.or.garbage").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["liked"], false);
}

/// An unknown recipe id returns 404.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_recipe_detail_unknown_id(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/recipes/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Ownership gate tests
// ---------------------------------------------------------------------------

/// The owner can update their recipe; the owner column never changes.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_own_recipe(pool: PgPool) {
    let app = common::build_test_app(pool);
    let signup = signup_user(app.clone(), "owner@test.com", "owner", "test_password_123!").await;
    let token = signup["access_token"].as_str().unwrap();
    let recipe = create_recipe(app.clone(), token, "Before", None, "Flour").await;

    let body = serde_json::json!({
        "title": "After",
        "ingredients": "Flour, butter",
        "instructions": "Mix thoroughly.",
    });
    let uri = format!("/api/v1/recipes/{}", recipe["id"]);
    let response = put_json_auth(app, &uri, body, token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "After");
    assert_eq!(json["data"]["user_id"], signup["user"]["id"]);
}

/// A non-owner updating a recipe gets 403 and the row is unchanged.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_other_recipe_forbidden(pool: PgPool) {
    let app = common::build_test_app(pool);
    let owner = signup_user(app.clone(), "owns@test.com", "owns", "test_password_123!").await;
    let intruder = signup_user(app.clone(), "intrudes@test.com", "intrudes", "test_password_123!").await;
    let recipe = create_recipe(
        app.clone(),
        owner["access_token"].as_str().unwrap(),
        "Keep Out",
        None,
        "Secrets",
    )
    .await;

    let body = serde_json::json!({
        "title": "Hijacked",
        "ingredients": "Nothing",
        "instructions": "Nothing.",
    });
    let uri = format!("/api/v1/recipes/{}", recipe["id"]);
    let response = put_json_auth(
        app.clone(),
        &uri,
        body,
        intruder["access_token"].as_str().unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["error"], "You can only update your own recipes");

    // The row is unchanged.
    let response = get(app, &uri).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Keep Out");
}

/// Updating an absent recipe is Forbidden, not NotFound -- probing cannot
/// distinguish missing from unowned.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_absent_recipe_forbidden(pool: PgPool) {
    let app = common::build_test_app(pool);
    let signup = signup_user(app.clone(), "prober@test.com", "prober", "test_password_123!").await;
    let token = signup["access_token"].as_str().unwrap();

    let body = serde_json::json!({
        "title": "Ghost",
        "ingredients": "Ether",
        "instructions": "None.",
    });
    let response = put_json_auth(app, "/api/v1/recipes/999999", body, token).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// The owner can delete their recipe, after which the detail view 404s.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_own_recipe(pool: PgPool) {
    let app = common::build_test_app(pool);
    let signup = signup_user(app.clone(), "deleter@test.com", "deleter", "test_password_123!").await;
    let token = signup["access_token"].as_str().unwrap();
    let recipe = create_recipe(app.clone(), token, "Ephemeral", None, "Mist").await;

    let uri = format!("/api/v1/recipes/{}", recipe["id"]);
    let response = delete_auth(app.clone(), &uri, token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// A non-owner deleting a recipe gets 403 with the delete wording.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_other_recipe_forbidden(pool: PgPool) {
    let app = common::build_test_app(pool);
    let owner = signup_user(app.clone(), "keeper@test.com", "keeper", "test_password_123!").await;
    let intruder = signup_user(app.clone(), "remover@test.com", "remover", "test_password_123!").await;
    let recipe = create_recipe(
        app.clone(),
        owner["access_token"].as_str().unwrap(),
        "Protected",
        None,
        "Armor",
    )
    .await;

    let uri = format!("/api/v1/recipes/{}", recipe["id"]);
    let response = delete_auth(app, &uri, intruder["access_token"].as_str().unwrap()).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["error"], "You can only delete your own recipes");
}

// ---------------------------------------------------------------------------
// Search tests
// ---------------------------------------------------------------------------

/// Search matches title, category, and ingredients case-insensitively.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_three_columns_case_insensitive(pool: PgPool) {
    let app = common::build_test_app(pool);
    let signup = signup_user(app.clone(), "searcher@test.com", "searcher", "test_password_123!").await;
    let token = signup["access_token"].as_str().unwrap();

    create_recipe(app.clone(), token, "Chocolate Cake", Some("Dessert"), "Cocoa, flour").await;
    create_recipe(app.clone(), token, "Beef Stew", Some("Dinner"), "Beef, potatoes").await;
    create_recipe(app.clone(), token, "Pancakes", Some("Breakfast"), "Flour, eggs, CHOCOLATE chips").await;

    // Title match (case-insensitive) + ingredients match.
    let response = get_auth(app.clone(), "/api/v1/recipes?q=chocolate", token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    // Category match.
    let response = get_auth(app.clone(), "/api/v1/recipes?q=DESSERT", token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["title"], "Chocolate Cake");

    // No match.
    let response = get_auth(app, "/api/v1/recipes?q=sushi", token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

/// A blank or missing query returns all recipes, newest first, with
/// author names attached.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_blank_query_returns_all_newest_first(pool: PgPool) {
    let app = common::build_test_app(pool);
    let signup = signup_user(app.clone(), "lister@test.com", "lister", "test_password_123!").await;
    let token = signup["access_token"].as_str().unwrap();

    create_recipe(app.clone(), token, "First", None, "A").await;
    create_recipe(app.clone(), token, "Second", None, "B").await;

    let response = get_auth(app.clone(), "/api/v1/recipes", token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["title"], "Second", "newest first");
    assert_eq!(data[0]["author_name"], "lister");

    // A whitespace-only query behaves like no query.
    let response = get_auth(app, "/api/v1/recipes?q=%20%20", token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

/// The author name prefers full name over username once the profile has one.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_listing_author_name_prefers_full_name(pool: PgPool) {
    let app = common::build_test_app(pool);
    let signup = signup_user(app.clone(), "named@test.com", "named", "test_password_123!").await;
    let token = signup["access_token"].as_str().unwrap();
    create_recipe(app.clone(), token, "Signature Dish", None, "Salt").await;

    let body = serde_json::json!({ "username": "named", "full_name": "Nadia Med" });
    let response = put_json_auth(app.clone(), "/api/v1/profile", body, token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_auth(app, "/api/v1/recipes", token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["author_name"], "Nadia Med");
}

// ---------------------------------------------------------------------------
// Saved-recipes tests
// ---------------------------------------------------------------------------

/// GET /saved lists the recipes the caller has liked, newest first.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_saved_recipes(pool: PgPool) {
    let app = common::build_test_app(pool);
    let author = signup_user(app.clone(), "writes@test.com", "writes", "test_password_123!").await;
    let saver = signup_user(app.clone(), "saves@test.com", "saves", "test_password_123!").await;
    let saver_token = saver["access_token"].as_str().unwrap();

    let kept = create_recipe(
        app.clone(),
        author["access_token"].as_str().unwrap(),
        "Worth Keeping",
        None,
        "Gold",
    )
    .await;
    create_recipe(
        app.clone(),
        author["access_token"].as_str().unwrap(),
        "Skippable",
        None,
        "Lead",
    )
    .await;

    let uri = format!("/api/v1/recipes/{}/like", kept["id"]);
    let response = post_json_auth(app.clone(), &uri, serde_json::json!({}), saver_token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_auth(app, "/api/v1/saved", saver_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["title"], "Worth Keeping");
    assert_eq!(data[0]["author_name"], "writes");
}

/// GET /saved requires authentication.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_saved_recipes_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/saved").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
