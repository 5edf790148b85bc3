//! Input validation helpers
//!
//! Centralized text length constants and validation functions used by the
//! CRUD handlers on top of the derive-based payload validation.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: product names, categories, full names
pub const MAX_NAME_LEN: usize = 200;

/// Descriptions and free-form notes
pub const MAX_DESCRIPTION_LEN: usize = 2000;

/// URLs / model references
pub const MAX_URL_LEN: usize = 2048;

/// Shipping addresses
pub const MAX_ADDRESS_LEN: usize = 500;

/// Contact numbers
pub const MAX_CONTACT_LEN: usize = 32;

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
    fn required_text_rejects_empty_and_overlong() {
        assert!(validate_required_text("keychain", "name", MAX_NAME_LEN).is_ok());
        assert!(validate_required_text("   ", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text(&"x".repeat(MAX_NAME_LEN + 1), "name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn optional_text_allows_none() {
        assert!(validate_optional_text(&None, "description", MAX_DESCRIPTION_LEN).is_ok());
        assert!(
            validate_optional_text(
                &Some("y".repeat(MAX_DESCRIPTION_LEN + 1)),
                "description",
                MAX_DESCRIPTION_LEN
            )
            .is_err()
        );
    }
}
