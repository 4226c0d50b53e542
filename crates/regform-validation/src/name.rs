//! First and last name validation

use once_cell::sync::Lazy;
use regex::Regex;

use crate::failure::{FieldKind, ValidationFailure};
use crate::result::ValidationResult;
use crate::whitespace::WHITESPACE_CLASS;

// Letters, whitespace, hyphens and apostrophes; ASCII letters only
static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^[A-Za-z{WHITESPACE_CLASS}'-]+$")).unwrap());

/// Checks a (trimmed) name value
pub fn check_name(value: &str) -> Result<(), ValidationFailure> {
    crate::require(FieldKind::Name, value)?;

    if !NAME_REGEX.is_match(value) {
        return Err(ValidationFailure::InvalidName);
    }

    Ok(())
}

/// Validates a first or last name
pub fn validate_name(value: &str) -> ValidationResult {
    check_name(value).into()
}
