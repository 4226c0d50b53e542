// File: src/lib.rs
// Purpose: Registration form validator library root

pub mod config;
pub mod document;
pub mod field;
pub mod scheduler;
pub mod validator;

pub use config::{ElementIds, FormConfig};
pub use document::{FormDocument, MemoryDocument};
pub use field::{FieldName, FieldState, FormState, UnknownField, Validity};
pub use scheduler::{ManualScheduler, Scheduler, TimerId};
pub use validator::{FormValidator, SubmitOutcome, Submission};

// Re-export the rules so hosts only need one dependency
pub use regform_validation::whitespace::trim;
pub use regform_validation::{
    validate, validate_email, validate_name, validate_password, FieldKind, ValidationFailure,
    ValidationResult,
};
