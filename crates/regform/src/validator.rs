// File: src/validator.rs
// Purpose: Real-time and submit-time validation of the registration form

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use regform_validation::whitespace::trim;
use regform_validation::{validate, ValidationResult};
use tracing::{debug, info};

use crate::config::FormConfig;
use crate::document::FormDocument;
use crate::field::{FieldName, FieldState, FormState};
use crate::scheduler::{Scheduler, TimerId};

/// Values accepted by a successful submission, trimmed.
///
/// `Debug` never prints the password.
#[derive(Clone, PartialEq, Eq)]
pub struct Submission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl Submission {
    fn capture<D: FormDocument>(document: &D) -> Self {
        let read = |field: FieldName| trim(&document.value(field)).to_string();
        Self {
            first_name: read(FieldName::FirstName),
            last_name: read(FieldName::LastName),
            email: read(FieldName::Email),
            password: read(FieldName::Password),
        }
    }
}

impl fmt::Debug for Submission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Submission")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed; the success banner is showing and the form was cleared
    Accepted(Submission),
    /// Submission blocked; the listed fields show their error messages
    Rejected { invalid: Vec<FieldName> },
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }
}

/// Binds validation rules to the four registration fields of a host document.
///
/// The host calls [`FormValidator::handle_input`] on every input event and
/// [`FormValidator::handle_submit`] on submit (after suppressing the default
/// action). All work is synchronous except hiding the success banner, which
/// is deferred through the [`Scheduler`].
pub struct FormValidator<D: FormDocument, S: Scheduler> {
    document: D,
    scheduler: S,
    config: FormConfig,
    state: FormState,
    // Shared with the hide task, which clears it when it fires
    success_timer: Rc<Cell<Option<TimerId>>>,
}

impl<D: FormDocument, S: Scheduler> FormValidator<D, S> {
    pub fn new(document: D, scheduler: S, config: FormConfig) -> Self {
        Self {
            document,
            scheduler,
            config,
            state: FormState::default(),
            success_timer: Rc::new(Cell::new(None)),
        }
    }

    pub fn field_state(&self, field: FieldName) -> FieldState {
        self.state.get(field)
    }

    pub fn form_state(&self) -> FormState {
        self.state
    }

    /// Pending success-banner timer, if any
    pub fn success_timer(&self) -> Option<TimerId> {
        self.success_timer.get()
    }

    /// Trim the field's value, check it, and show the outcome on the page.
    ///
    /// Returns whether the value is valid.
    pub fn validate_field(&mut self, field: FieldName) -> bool {
        self.check_field(field).is_valid
    }

    /// Input-event handler for `field`
    pub fn handle_input(&mut self, field: FieldName) -> ValidationResult {
        self.check_field(field)
    }

    /// Submit handler.
    ///
    /// Every field is validated, even after the first failure, so all error
    /// messages are current. Only a fully valid form is accepted.
    pub fn handle_submit(&mut self) -> SubmitOutcome {
        let mut invalid = Vec::new();
        for field in FieldName::ALL {
            if !self.validate_field(field) {
                invalid.push(field);
            }
        }

        if !invalid.is_empty() {
            debug!(?invalid, "submission blocked");
            return SubmitOutcome::Rejected { invalid };
        }

        let submission = Submission::capture(&self.document);

        self.document.set_success_visible(true);
        self.document.reset();
        for field in FieldName::ALL {
            self.document.set_error_text(field, "");
            self.document.set_invalid(field, false);
            self.state.set(field, FieldState::Untouched);
        }

        self.cancel_success_timer();
        self.schedule_success_hide();

        info!(
            first_name = %submission.first_name,
            last_name = %submission.last_name,
            email = %submission.email,
            "registration submitted"
        );

        SubmitOutcome::Accepted(submission)
    }

    /// Cancel the pending hide of the success banner; the banner stays as it is.
    ///
    /// Returns false when no hide was pending.
    pub fn cancel_success_timer(&mut self) -> bool {
        match self.success_timer.take() {
            Some(id) => {
                let cancelled = self.scheduler.cancel(id);
                debug!(timer = %id, cancelled, "success timer cancelled");
                cancelled
            }
            None => false,
        }
    }

    /// Hide the success banner now and drop any pending hide
    pub fn dismiss_success(&mut self) {
        self.cancel_success_timer();
        self.document.set_success_visible(false);
    }

    fn check_field(&mut self, field: FieldName) -> ValidationResult {
        let value = self.document.value(field);
        let result = validate(field.kind(), trim(&value));

        self.document.set_error_text(field, &result.message);
        self.document.set_invalid(field, !result.is_valid);
        self.state.set(field, FieldState::from_validity(result.is_valid));

        debug!(field = %field, valid = result.is_valid, "validated field");
        result
    }

    fn schedule_success_hide(&mut self) {
        let document = self.document.clone();
        let slot = Rc::clone(&self.success_timer);
        let delay = self.config.success_hide_delay();

        let id = self.scheduler.schedule(
            delay,
            Box::new(move || {
                document.set_success_visible(false);
                slot.set(None);
                debug!("success message hidden");
            }),
        );

        debug!(timer = %id, ?delay, "success timer scheduled");
        self.success_timer.set(Some(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::MemoryDocument;
    use crate::field::Validity;
    use crate::scheduler::ManualScheduler;

    fn validator(doc: &MemoryDocument) -> FormValidator<MemoryDocument, ManualScheduler> {
        FormValidator::new(doc.clone(), ManualScheduler::new(), FormConfig::default())
    }

    #[test]
    fn test_fields_start_untouched() {
        let doc = MemoryDocument::new();
        let form = validator(&doc);
        for field in FieldName::ALL {
            assert_eq!(form.field_state(field), FieldState::Untouched);
        }
    }

    #[test]
    fn test_validate_field_marks_invalid_then_clears() {
        let doc = MemoryDocument::new();
        let mut form = validator(&doc);

        doc.set_value(FieldName::FirstName, "R2D2");
        assert!(!form.validate_field(FieldName::FirstName));
        assert!(doc.is_invalid(FieldName::FirstName));
        assert_eq!(
            doc.error_text(FieldName::FirstName),
            "Please enter a valid name (letters, spaces, hyphens and apostrophes only)"
        );
        assert_eq!(
            form.field_state(FieldName::FirstName),
            FieldState::Validated(Validity::Invalid)
        );

        doc.set_value(FieldName::FirstName, "Artoo");
        assert!(form.validate_field(FieldName::FirstName));
        assert!(!doc.is_invalid(FieldName::FirstName));
        assert_eq!(doc.error_text(FieldName::FirstName), "");
        assert_eq!(
            form.field_state(FieldName::FirstName),
            FieldState::Validated(Validity::Valid)
        );
    }

    #[test]
    fn test_values_are_trimmed_before_checking() {
        let doc = MemoryDocument::new();
        let mut form = validator(&doc);

        doc.set_value(FieldName::Email, "   ");
        let result = form.handle_input(FieldName::Email);
        assert_eq!(result.message, "Email is required");

        doc.set_value(FieldName::Email, "  a@b.co\n");
        assert!(form.handle_input(FieldName::Email).is_valid);

        // Byte order marks are trimmed like any other whitespace
        doc.set_value(FieldName::FirstName, "\u{FEFF}Ann");
        assert!(form.handle_input(FieldName::FirstName).is_valid);

        // Next-line is not whitespace, so it stays and fails the name pattern
        doc.set_value(FieldName::LastName, "\u{85}Lee");
        assert!(!form.handle_input(FieldName::LastName).is_valid);

        // Surrounding spaces do not count towards the length
        doc.set_value(FieldName::Password, "  1234567  ");
        assert_eq!(
            form.handle_input(FieldName::Password).message,
            "Password must be at least 8 characters long"
        );
    }

    #[test]
    fn test_input_only_touches_its_own_field() {
        let doc = MemoryDocument::new();
        let mut form = validator(&doc);

        form.handle_input(FieldName::LastName);

        assert_eq!(doc.error_text(FieldName::LastName), "This field is required");
        assert_eq!(doc.error_text(FieldName::FirstName), "");
        assert_eq!(form.field_state(FieldName::FirstName), FieldState::Untouched);
    }

    #[test]
    fn test_submission_debug_redacts_password() {
        let submission = Submission {
            first_name: "Ann".into(),
            last_name: "Lee".into(),
            email: "a@b.co".into(),
            password: "hunter2hunter2".into(),
        };
        let printed = format!("{submission:?}");
        assert!(!printed.contains("hunter2"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn test_cancel_without_timer() {
        let doc = MemoryDocument::new();
        let mut form = validator(&doc);
        assert!(!form.cancel_success_timer());
    }
}
