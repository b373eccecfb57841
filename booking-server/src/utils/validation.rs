//! Input validation helpers
//!
//! Length limits for the few inputs that bypass the derive-based request
//! validation; the embedded database has no built-in length enforcement.

use crate::utils::AppError;

// ========== Text Length Limits ==========

/// Short identifiers: booking references, section keys
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Search queries
pub const MAX_QUERY_LEN: usize = 200;

// ========== Validation Helpers ==========

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_required_text_fails() {
        assert!(validate_required_text("  ", "reference", MAX_SHORT_TEXT_LEN).is_err());
        assert!(validate_required_text("MF2K81QX-4H7ZT2", "reference", MAX_SHORT_TEXT_LEN).is_ok());
    }

    #[test]
    fn overlong_text_fails() {
        let long = "x".repeat(MAX_SHORT_TEXT_LEN + 1);
        assert!(validate_required_text(&long, "reference", MAX_SHORT_TEXT_LEN).is_err());
    }
}
