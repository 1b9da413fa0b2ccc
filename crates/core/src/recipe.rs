//! Recipe field validation and normalization.
//!
//! Recipes arrive from submitted forms, so every field is text: the
//! cooking time is parsed out of a free-text input and the optional
//! select fields treat a blank submission as "not set".

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate the required recipe fields: title, ingredients, and
/// instructions must all be non-blank.
pub fn validate_recipe_fields(
    title: &str,
    ingredients: &str,
    instructions: &str,
) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Title is required".to_string());
    }
    if ingredients.trim().is_empty() {
        return Err("Ingredients are required".to_string());
    }
    if instructions.trim().is_empty() {
        return Err("Instructions are required".to_string());
    }
    Ok(())
}

/// Parse a cooking time in minutes from free-text form input.
///
/// Takes the leading run of ASCII digits of the trimmed input, so
/// `"45"` and `"45 min"` both parse to 45 and `"12.5"` parses to 12.
/// Anything without a positive leading number (empty, non-numeric,
/// negative, zero, or out of range) yields `None`.
pub fn parse_cooking_time(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    let digits: String = trimmed
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();

    match digits.parse::<i32>() {
        Ok(minutes) if minutes > 0 => Some(minutes),
        _ => None,
    }
}

/// Normalize an optional free-text field: trim it and treat a blank
/// value as unset.
pub fn normalize_optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
