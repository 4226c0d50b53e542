//! Registration form validation rules
//!
//! Pure validation functions for the four registration fields.
//! Used by the form component on native hosts, by the CLI, and by the
//! WASM binding in the browser, so every host accepts exactly the same input.

pub mod email;
pub mod failure;
pub mod name;
pub mod password;
pub mod result;
pub mod whitespace;

pub use email::*;
pub use failure::*;
pub use name::*;
pub use password::*;
pub use result::*;

/// Validates `value` with the rule family for `kind`
pub fn validate(kind: FieldKind, value: &str) -> ValidationResult {
    match kind {
        FieldKind::Name => validate_name(value),
        FieldKind::Email => validate_email(value),
        FieldKind::Password => validate_password(value),
    }
}

/// Rejects the empty string with the field's "required" failure.
///
/// Values are expected to be trimmed already, so whitespace-only input
/// arrives here as `""`.
pub(crate) fn require(kind: FieldKind, value: &str) -> Result<(), ValidationFailure> {
    if value.is_empty() {
        Err(ValidationFailure::Required(kind))
    } else {
        Ok(())
    }
}
