//! Field validation helpers
//!
//! Request payload checks shared across handlers.

use crate::utils::{AppError, AppResult};

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_EMAIL_LEN: usize = 254;

/// Validate a required text field: non-blank after trim, within length
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(format!("{field} is required")));
    }
    if trimmed.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} must be at most {max_len} characters"
        )));
    }
    Ok(())
}

/// Validate a role value against the known set
pub fn validate_role(role: &str) -> AppResult<()> {
    match role {
        "student" | "admin" | "driver" => Ok(()),
        other => Err(AppError::validation(format!("unknown role: {other}"))),
    }
}
