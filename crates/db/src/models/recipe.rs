//! Recipe entity model and DTOs.

use ladle_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Recipe row from the `recipes` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Recipe {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub ingredients: String,
    pub instructions: String,
    /// Cooking time in minutes; always positive when set.
    pub cooking_time: Option<i32>,
    pub difficulty: Option<String>,
    pub category: Option<String>,
    pub created_at: Timestamp,
}

/// Validated, normalized field set applied by both create and update.
///
/// `update` writes the full set; a recipe's `user_id` is never touched
/// after creation.
#[derive(Debug, Clone)]
pub struct RecipeFields {
    pub title: String,
    pub ingredients: String,
    pub instructions: String,
    pub cooking_time: Option<i32>,
    pub difficulty: Option<String>,
    pub category: Option<String>,
}
