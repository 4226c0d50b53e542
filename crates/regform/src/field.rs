// File: src/field.rs
// Purpose: The four registration fields and their validation state

use std::fmt;
use std::str::FromStr;

use regform_validation::FieldKind;
use thiserror::Error;

/// One named input tracked by the validator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    Password,
}

impl FieldName {
    /// All fields, in the order they are validated on submit
    pub const ALL: [FieldName; 4] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Email,
        FieldName::Password,
    ];

    /// Rule family used for this field
    pub fn kind(self) -> FieldKind {
        match self {
            FieldName::FirstName | FieldName::LastName => FieldKind::Name,
            FieldName::Email => FieldKind::Email,
            FieldName::Password => FieldKind::Password,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::FirstName => "firstName",
            FieldName::LastName => "lastName",
            FieldName::Email => "email",
            FieldName::Password => "password",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            FieldName::FirstName => 0,
            FieldName::LastName => 1,
            FieldName::Email => 2,
            FieldName::Password => 3,
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for FieldName {
    type Err = UnknownField;

    /// Accepts the element-style name (`firstName`) or snake case (`first_name`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "firstName" | "first_name" => Ok(FieldName::FirstName),
            "lastName" | "last_name" => Ok(FieldName::LastName),
            "email" => Ok(FieldName::Email),
            "password" => Ok(FieldName::Password),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    Valid,
    Invalid,
}

/// Per-field state.
///
/// Every input event and submit attempt moves a field to `Validated`;
/// a successful submission resets it to `Untouched`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldState {
    #[default]
    Untouched,
    Validated(Validity),
}

impl FieldState {
    pub fn from_validity(is_valid: bool) -> Self {
        if is_valid {
            FieldState::Validated(Validity::Valid)
        } else {
            FieldState::Validated(Validity::Invalid)
        }
    }

    pub fn is_valid(self) -> bool {
        matches!(self, FieldState::Validated(Validity::Valid))
    }
}

/// Snapshot of all four field states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormState {
    fields: [FieldState; 4],
}

impl FormState {
    pub fn get(&self, field: FieldName) -> FieldState {
        self.fields[field.index()]
    }

    pub(crate) fn set(&mut self, field: FieldName, state: FieldState) {
        self.fields[field.index()] = state;
    }

    /// True only when every field has been validated and passed
    pub fn all_valid(&self) -> bool {
        self.fields.iter().all(|state| state.is_valid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("firstName", FieldName::FirstName)]
    #[case("first_name", FieldName::FirstName)]
    #[case("lastName", FieldName::LastName)]
    #[case("email", FieldName::Email)]
    #[case("password", FieldName::Password)]
    fn test_parse_field_name(#[case] input: &str, #[case] expected: FieldName) {
        assert_eq!(input.parse::<FieldName>(), Ok(expected));
    }

    #[test]
    fn test_unknown_field() {
        let err = "phone".parse::<FieldName>().unwrap_err();
        assert_eq!(err.to_string(), "unknown field: phone");
    }

    #[test]
    fn test_field_kinds() {
        assert_eq!(FieldName::FirstName.kind(), FieldKind::Name);
        assert_eq!(FieldName::LastName.kind(), FieldKind::Name);
        assert_eq!(FieldName::Email.kind(), FieldKind::Email);
        assert_eq!(FieldName::Password.kind(), FieldKind::Password);
    }

    #[test]
    fn test_form_state_all_valid() {
        let mut state = FormState::default();
        assert!(!state.all_valid());

        for field in FieldName::ALL {
            state.set(field, FieldState::from_validity(true));
        }
        assert!(state.all_valid());

        state.set(FieldName::Email, FieldState::from_validity(false));
        assert!(!state.all_valid());

        state.set(FieldName::Email, FieldState::Untouched);
        assert!(!state.all_valid());
    }
}
