//! Outcome of a single field check

use serde::Serialize;

use crate::failure::ValidationFailure;

/// Result of checking one field value.
///
/// Serializes as `{"isValid": bool, "message": string}` for the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub message: String,
    #[serde(skip)]
    failure: Option<ValidationFailure>,
}

impl ValidationResult {
    /// A passing result with an empty message
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: String::new(),
            failure: None,
        }
    }

    /// A failing result carrying the failure's message
    pub fn invalid(failure: ValidationFailure) -> Self {
        Self {
            is_valid: false,
            message: failure.to_string(),
            failure: Some(failure),
        }
    }

    /// The failure kind, if the value was rejected
    pub fn failure(&self) -> Option<ValidationFailure> {
        self.failure
    }

    /// Convert back into a `Result` for `?` propagation
    pub fn into_result(self) -> Result<(), ValidationFailure> {
        match self.failure {
            Some(failure) => Err(failure),
            None => Ok(()),
        }
    }
}

impl From<Result<(), ValidationFailure>> for ValidationResult {
    fn from(result: Result<(), ValidationFailure>) -> Self {
        match result {
            Ok(()) => Self::valid(),
            Err(failure) => Self::invalid(failure),
        }
    }
}
