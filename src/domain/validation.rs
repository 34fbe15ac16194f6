//! Local validation of candidate names.
//!
//! Validation runs before any network call. Lengths are counted in Unicode
//! scalar values after trimming surrounding whitespace.

use thiserror::Error;

/// Default maximum name length, matching the server's limit.
pub const DEFAULT_MAX_NAME_LENGTH: usize = 50;

/// Remaining-character count below which a keystroke notice is shown.
const REMAINING_NOTICE_THRESHOLD: usize = 5;

/// Notice shown when surrounding whitespace was stripped from the input.
pub const TRIMMED_NOTICE: &str = "Leading and trailing spaces were removed";

/// Reasons a candidate name is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name cannot be empty")]
    Empty,
    #[error("Name cannot exceed {max} characters")]
    TooLong { max: usize },
}

/// A name that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidName {
    /// The trimmed value to submit.
    pub cleaned: String,
    /// Whether trimming changed the raw input.
    pub was_trimmed: bool,
}

/// Validates a raw input value.
///
/// # Errors
///
/// - [`ValidationError::Empty`] if nothing is left after trimming
/// - [`ValidationError::TooLong`] if the trimmed value exceeds `max` characters
///
/// # Example
///
/// ```
/// use names_panel::domain::validation::{validate, ValidationError};
///
/// assert_eq!(validate("  Alice ", 50).unwrap().cleaned, "Alice");
/// assert_eq!(validate("   ", 50), Err(ValidationError::Empty));
/// ```
pub fn validate(raw: &str, max: usize) -> Result<ValidName, ValidationError> {
    let cleaned = raw.trim();

    if cleaned.is_empty() {
        return Err(ValidationError::Empty);
    }
    if cleaned.chars().count() > max {
        return Err(ValidationError::TooLong { max });
    }

    Ok(ValidName {
        cleaned: cleaned.to_string(),
        was_trimmed: cleaned.len() != raw.len(),
    })
}

/// Returns the remaining-characters notice for the current input, if any.
///
/// A notice appears once fewer than five characters remain.
#[must_use]
pub fn keystroke_notice(raw: &str, max: usize) -> Option<String> {
    let remaining = max.saturating_sub(raw.chars().count());
    if remaining >= REMAINING_NOTICE_THRESHOLD {
        return None;
    }
    Some(if remaining == 1 {
        "1 character remaining".to_string()
    } else {
        format!("{remaining} characters remaining")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_names() {
        for name in ["John Doe", "Alice", "Mary-Jane", "O'Connor", "John  Doe"] {
            let valid = validate(name, DEFAULT_MAX_NAME_LENGTH).unwrap();
            assert_eq!(valid.cleaned, name);
            assert!(!valid.was_trimmed);
        }
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let valid = validate("  John Doe \t", DEFAULT_MAX_NAME_LENGTH).unwrap();
        assert_eq!(valid.cleaned, "John Doe");
        assert!(valid.was_trimmed);
    }

    #[test]
    fn rejects_empty_and_whitespace_only() {
        for raw in ["", " ", "\t\n  "] {
            assert_eq!(validate(raw, DEFAULT_MAX_NAME_LENGTH), Err(ValidationError::Empty));
        }
    }

    #[test]
    fn enforces_length_after_trimming() {
        let fifty = "a".repeat(50);
        assert!(validate(&fifty, 50).is_ok());
        assert!(validate(&format!("  {fifty}  "), 50).is_ok());

        let err = validate(&"a".repeat(51), 50).unwrap_err();
        assert_eq!(err, ValidationError::TooLong { max: 50 });
        assert_eq!(err.to_string(), "Name cannot exceed 50 characters");
    }

    #[test]
    fn counts_characters_not_bytes() {
        let name = "é".repeat(50);
        assert!(validate(&name, 50).is_ok());
    }

    #[test]
    fn trimming_is_idempotent() {
        let long = "x".repeat(51);
        let padded = format!(" {} ", "y".repeat(50));
        for raw in ["", "  ", " Bob ", "Alice", long.as_str(), padded.as_str()] {
            let once = validate(raw, 50).map(|v| v.cleaned);
            let twice = validate(raw.trim(), 50).map(|v| v.cleaned);
            assert_eq!(once, twice, "input {raw:?}");
        }
    }

    #[test]
    fn remaining_notice_appears_past_forty_five_characters() {
        assert_eq!(keystroke_notice(&"a".repeat(45), 50), None);
        assert_eq!(
            keystroke_notice(&"a".repeat(46), 50).as_deref(),
            Some("4 characters remaining")
        );
        assert_eq!(
            keystroke_notice(&"a".repeat(49), 50).as_deref(),
            Some("1 character remaining")
        );
        assert_eq!(
            keystroke_notice(&"a".repeat(55), 50).as_deref(),
            Some("0 characters remaining")
        );
    }
}
