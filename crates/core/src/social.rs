//! Comment content rules.

/// Validate and normalize comment content.
///
/// Comments are stored trimmed; a blank submission is rejected. There
/// is no length cap. Returns the trimmed content on success.
pub fn validate_comment_content(content: &str) -> Result<String, String> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err("Comment cannot be empty".to_string());
    }
    Ok(trimmed.to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
