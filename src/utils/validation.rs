//! Input validation helpers
//!
//! Centralized text length constants and validation functions used by the
//! CRUD handlers. Document storage enforces no lengths of its own, so the
//! limits here are the only backstop.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: menu item titles, customer names, restaurant name.
pub const MAX_NAME_LEN: usize = 200;

/// Notes, descriptions, review comments.
pub const MAX_NOTE_LEN: usize = 1000;

/// Short identifiers: phone numbers, table numbers, color codes, currency.
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// URLs: logo, item images, review photos.
pub const MAX_URL_LEN: usize = 2048;

/// Addresses
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

/// Validate that a numeric amount is non-negative.
pub fn validate_non_negative(value: f64, field: &str) -> Result<(), AppError> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::validation(format!(
            "{field} must be a non-negative number"
        )));
    }
    Ok(())
}

/// Validate that an integer lies within `min..=max`.
pub fn validate_int_range(value: i64, field: &str, min: i64, max: i64) -> Result<(), AppError> {
    if value < min || value > max {
        return Err(AppError::validation(format!(
            "{field} must be between {min} and {max}"
        )));
    }
    Ok(())
}

/// Validate that an integer is at least `min`.
pub fn validate_int_min(value: i64, field: &str, min: i64) -> Result<(), AppError> {
    if value < min {
        return Err(AppError::validation(format!(
            "{field} must be at least {min}"
        )));
    }
    Ok(())
}

/// Validate an optional URL: http(s) scheme and length only, no fetch.
pub fn validate_optional_url(value: &Option<String>, field: &str) -> Result<(), AppError> {
    if let Some(v) = value {
        if v.len() > MAX_URL_LEN {
            return Err(AppError::validation(format!("{field} is too long")));
        }
        if !(v.starts_with("http://") || v.starts_with("https://")) {
            return Err(AppError::validation(format!(
                "{field} must be an http(s) URL"
            )));
        }
    }
    Ok(())
}

/// Validate an optional email address (shape check only).
pub fn validate_optional_email(value: &Option<String>, field: &str) -> Result<(), AppError> {
    if let Some(v) = value {
        if v.len() > MAX_EMAIL_LEN {
            return Err(AppError::validation(format!("{field} is too long")));
        }
        let valid = match v.split_once('@') {
            Some((local, domain)) => !local.is_empty() && domain.contains('.'),
            None => false,
        };
        if !valid {
            return Err(AppError::validation(format!(
                "{field} is not a valid email address"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_rejects_empty_and_whitespace() {
        assert!(validate_required_text("Latte", "title", MAX_NAME_LEN).is_ok());
        assert!(validate_required_text("", "title", MAX_NAME_LEN).is_err());
        assert!(validate_required_text("   ", "title", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn non_negative_rejects_negative_and_nan() {
        assert!(validate_non_negative(0.0, "price").is_ok());
        assert!(validate_non_negative(9.5, "price").is_ok());
        assert!(validate_non_negative(-0.01, "price").is_err());
        assert!(validate_non_negative(f64::NAN, "price").is_err());
    }

    #[test]
    fn int_range_is_inclusive() {
        assert!(validate_int_range(1, "rating", 1, 5).is_ok());
        assert!(validate_int_range(5, "rating", 1, 5).is_ok());
        assert!(validate_int_range(0, "rating", 1, 5).is_err());
        assert!(validate_int_range(6, "rating", 1, 5).is_err());
    }

    #[test]
    fn url_requires_http_scheme() {
        assert!(validate_optional_url(&None, "image_url").is_ok());
        assert!(validate_optional_url(&Some("https://x.y/a.png".into()), "image_url").is_ok());
        assert!(validate_optional_url(&Some("ftp://x.y/a.png".into()), "image_url").is_err());
    }

    #[test]
    fn email_shape_check() {
        assert!(validate_optional_email(&Some("a@b.co".into()), "contact_email").is_ok());
        assert!(validate_optional_email(&Some("not-an-email".into()), "contact_email").is_err());
        assert!(validate_optional_email(&Some("@b.co".into()), "contact_email").is_err());
    }
}
