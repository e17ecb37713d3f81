//! Input validation helpers
//!
//! Checks applied by the proxy before a request is forwarded.

use validator::ValidateEmail;

use crate::core::ServerError;

/// Names, phone numbers
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Special requests
pub const MAX_NOTE_LEN: usize = 500;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Chat input
pub const MAX_MESSAGE_LEN: usize = 2000;

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), ServerError> {
    if value.trim().is_empty() {
        return Err(ServerError::validation(format!("{field} must not be empty")));
    }
    validate_max_len(value, field, max_len)
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: Option<&str>,
    field: &str,
    max_len: usize,
) -> Result<(), ServerError> {
    match value {
        Some(v) => validate_max_len(v, field, max_len),
        None => Ok(()),
    }
}

/// Syntactic email check
pub fn validate_email(value: &str) -> Result<(), ServerError> {
    validate_max_len(value, "email", MAX_EMAIL_LEN)?;
    if !value.trim().to_string().validate_email() {
        return Err(ServerError::validation("Invalid email address"));
    }
    Ok(())
}

fn validate_max_len(value: &str, field: &str, max_len: usize) -> Result<(), ServerError> {
    let len = value.chars().count();
    if len > max_len {
        return Err(ServerError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        )));
    }
    Ok(())
}
