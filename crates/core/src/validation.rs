//! Field-level checks shared by the progress and bookmark ledgers.

use crate::error::CoreError;

/// Maximum length for topic identifiers, topic types and categories (characters).
pub const MAX_KEY_LENGTH: usize = 200;

/// Validate that a required text field is present and non-blank, and no
/// longer than `max_len` characters.
///
/// `None`, the empty string and whitespace-only strings are all rejected
/// as missing.
pub fn require_text(field: &str, value: Option<&str>, max_len: usize) -> Result<(), CoreError> {
    let value = value.unwrap_or_default();
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    let len = value.chars().count();
    if len > max_len {
        return Err(CoreError::Validation(format!(
            "{field} exceeds maximum length of {max_len} characters (got {len})"
        )));
    }
    Ok(())
}
