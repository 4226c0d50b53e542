//! Failure taxonomy and the fixed user-facing messages

use thiserror::Error;

/// Which rule family a value is checked with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Email,
    Password,
}

/// Why a field value was rejected.
///
/// The `Display` output is the message shown next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    #[error("{}", required_message(.0))]
    Required(FieldKind),

    #[error("Please enter a valid name (letters, spaces, hyphens and apostrophes only)")]
    InvalidName,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Password must be at least {min} characters long")]
    TooShort { min: usize },
}

impl ValidationFailure {
    /// The rule family that produced this failure
    pub fn kind(&self) -> FieldKind {
        match self {
            ValidationFailure::Required(kind) => *kind,
            ValidationFailure::InvalidName => FieldKind::Name,
            ValidationFailure::InvalidEmail => FieldKind::Email,
            ValidationFailure::TooShort { .. } => FieldKind::Password,
        }
    }
}

fn required_message(kind: &FieldKind) -> &'static str {
    match kind {
        FieldKind::Name => "This field is required",
        FieldKind::Email => "Email is required",
        FieldKind::Password => "Password is required",
    }
}
