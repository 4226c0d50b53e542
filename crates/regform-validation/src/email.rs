//! Email validation
//!
//! Deliberately minimal: `something@something.something` with no whitespace
//! and no extra `@`. No RFC 5322 parsing and no domain or TLD checks.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::failure::{FieldKind, ValidationFailure};
use crate::result::ValidationResult;
use crate::whitespace::WHITESPACE_CLASS;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    let part = format!("[^{WHITESPACE_CLASS}@]+");
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).unwrap()
});

/// Checks the basic `local@domain.tld` shape
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Checks a (trimmed) email value
pub fn check_email(value: &str) -> Result<(), ValidationFailure> {
    crate::require(FieldKind::Email, value)?;

    if !is_valid_email(value) {
        return Err(ValidationFailure::InvalidEmail);
    }

    Ok(())
}

/// Validates an email address
pub fn validate_email(value: &str) -> ValidationResult {
    check_email(value).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a@b.co")]
    #[case("user@example.com")]
    #[case("test.user@example.co.uk")]
    #[case("user+tag@example.com")]
    #[case("a@b.c")]
    #[case("weird!#$@host.x")]
    #[case("a@b..c")]
    #[case("a@.b.c")]
    #[case("a\u{85}b@c.de")]
    fn test_valid_emails(#[case] value: &str) {
        assert!(validate_email(value).is_valid, "{value:?} should be accepted");
    }

    #[rstest]
    #[case("not-an-email")]
    #[case("user@example")]
    #[case("@example.com")]
    #[case("user@")]
    #[case("user@@example.com")]
    #[case("user@exa mple.com")]
    #[case("us er@example.com")]
    #[case("user@example.")]
    #[case("a@b@c.d")]
    #[case("a\u{FEFF}b@c.de")]
    #[case("a@c.d\u{A0}e")]
    fn test_invalid_emails(#[case] value: &str) {
        let result = validate_email(value);
        assert!(!result.is_valid, "{value:?} should be rejected");
        assert_eq!(result.message, "Please enter a valid email address");
    }

    #[test]
    fn test_empty_email_is_required() {
        let result = validate_email("");
        assert_eq!(result.failure(), Some(ValidationFailure::Required(FieldKind::Email)));
        assert_eq!(result.message, "Email is required");
    }
}
