//! Input validation helpers
//!
//! Centralized text length constants and validation functions. The store
//! does not enforce lengths, so the limits live at the API boundary.

use shared::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: product, component, user, customer
pub const MAX_NAME_LEN: usize = 200;

/// Descriptions
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Short identifiers: phone, tax document
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

/// Address fields
pub const MAX_ADDRESS_LEN: usize = 500;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Marmita", "nome", MAX_NAME_LEN).is_ok());
        assert!(validate_required_text("", "nome", MAX_NAME_LEN).is_err());
        assert!(validate_required_text("   ", "nome", MAX_NAME_LEN).is_err());
        assert!(validate_required_text(&"x".repeat(201), "nome", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn test_optional_text() {
        assert!(validate_optional_text(&None, "descricao", MAX_DESCRIPTION_LEN).is_ok());
        assert!(
            validate_optional_text(&Some("ok".into()), "descricao", MAX_DESCRIPTION_LEN).is_ok()
        );
        assert!(
            validate_optional_text(&Some("y".repeat(501)), "descricao", MAX_DESCRIPTION_LEN)
                .is_err()
        );
    }
}
