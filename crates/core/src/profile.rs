//! Profile rules: username validation, the derived default username for
//! lazily created profiles, and author display-name precedence.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a username in characters.
pub const MAX_USERNAME_LENGTH: usize = 50;

/// Display name used when an author has no profile, or a profile with
/// neither a full name nor a username to show.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a username: non-blank and within the length limit.
pub fn validate_username(username: &str) -> Result<(), String> {
    if username.trim().is_empty() {
        return Err("Username cannot be empty".to_string());
    }
    if username.chars().count() > MAX_USERNAME_LENGTH {
        return Err(format!(
            "Username exceeds maximum length of {MAX_USERNAME_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Derive the default username for a lazily created profile.
///
/// Uses the local part of the account email (text before the first `@`),
/// trimmed and truncated to [`MAX_USERNAME_LENGTH`]. When that is blank
/// the fallback is `user_{id}`.
pub fn derive_username(email: &str, user_id: crate::DbId) -> String {
    let local = email.split('@').next().unwrap_or("").trim();
    if local.is_empty() {
        return format!("user_{user_id}");
    }
    local.chars().take(MAX_USERNAME_LENGTH).collect()
}

/// Resolve the display name shown next to recipes and comments.
///
/// Precedence: a non-blank full name, then a non-blank username, then
/// [`ANONYMOUS_AUTHOR`]. Pass `None` for both when the author has no
/// profile row at all.
pub fn display_name(full_name: Option<&str>, username: Option<&str>) -> String {
    if let Some(name) = full_name {
        if !name.trim().is_empty() {
            return name.to_string();
        }
    }
    if let Some(name) = username {
        if !name.trim().is_empty() {
            return name.to_string();
        }
    }
    ANONYMOUS_AUTHOR.to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
