//! Password validation
//!
//! Length is the only requirement; there are no character-class rules.

use crate::failure::{FieldKind, ValidationFailure};
use crate::result::ValidationResult;

/// Minimum password length, in UTF-16 code units as a browser counts it
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Checks a (trimmed) password value
pub fn check_password(value: &str) -> Result<(), ValidationFailure> {
    crate::require(FieldKind::Password, value)?;

    if value.encode_utf16().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationFailure::TooShort {
            min: MIN_PASSWORD_LENGTH,
        });
    }

    Ok(())
}

/// Validates a password
pub fn validate_password(value: &str) -> ValidationResult {
    check_password(value).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a")]
    #[case("short")]
    #[case("1234567")]
    #[case("ééééééé")]
    #[case("😀😀😀")]
    fn test_short_passwords(#[case] value: &str) {
        let result = validate_password(value);
        assert!(!result.is_valid);
        assert_eq!(result.message, "Password must be at least 8 characters long");
    }

    #[rstest]
    #[case("longenough")]
    #[case("12345678")]
    #[case("        ")]
    #[case("éééééééé")]
    #[case("😀😀😀😀")]
    fn test_long_enough_passwords(#[case] value: &str) {
        assert!(validate_password(value).is_valid);
    }

    #[test]
    fn test_empty_password_is_required() {
        assert_eq!(validate_password("").message, "Password is required");
    }

    #[test]
    fn test_length_counts_utf16_units() {
        // 7 units, 14 bytes
        assert_eq!(
            check_password("ééééééé"),
            Err(ValidationFailure::TooShort { min: 8 })
        );
        // 4 characters, 8 units
        assert_eq!(check_password("😀😀😀😀"), Ok(()));
    }
}
