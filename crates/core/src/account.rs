//! Account identity rules: email shape validation.

/// Validate that an email address has the minimal `local@domain` shape.
///
/// Deliberately loose. Deliverability is the mail system's problem; the
/// only invariant the rest of the system relies on is a non-empty local
/// part (it seeds the derived username) and a non-empty domain.
pub fn validate_email(email: &str) -> Result<(), String> {
    let valid = match email.trim().split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
        None => false,
    };
    if !valid {
        return Err("A valid email address is required".to_string());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
