//! Input validation for a summarize attempt.

use crate::error::ValidationError;

/// Minimum trimmed length, in characters, accepted for summarization.
pub const MIN_INPUT_CHARS: usize = 50;

/// Validate raw input and return the trimmed text to send.
///
/// Checks run in order and short-circuit: emptiness first, then length.
/// Length is counted in `char`s, not bytes.
pub fn validate_input(raw: &str) -> Result<&str, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }

    let len = trimmed.chars().count();
    if len < MIN_INPUT_CHARS {
        return Err(ValidationError::TooShort { len });
    }

    Ok(trimmed)
}
