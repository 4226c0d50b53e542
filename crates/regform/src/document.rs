// File: src/document.rs
// Purpose: Host document contract and an in-memory implementation

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::field::FieldName;

/// What the validator needs from the page hosting the form.
///
/// Methods take `&self`: host documents (like a DOM) are handles with
/// interior mutability. Implementors must be cheap to clone so a deferred
/// task can keep its own handle.
pub trait FormDocument: Clone + 'static {
    /// Current raw text of the field's input
    fn value(&self, field: FieldName) -> String;

    /// Replace the text of the field's error container
    fn set_error_text(&self, field: FieldName, text: &str);

    /// Add or remove the invalid marker on the field's input
    fn set_invalid(&self, field: FieldName, invalid: bool);

    fn set_success_visible(&self, visible: bool);

    /// Clear every input value
    fn reset(&self);
}

#[derive(Debug, Default)]
struct MemoryState {
    values: HashMap<FieldName, String>,
    errors: HashMap<FieldName, String>,
    invalid: HashSet<FieldName>,
    success_visible: bool,
    resets: usize,
}

/// Document held entirely in memory.
///
/// Clones share state, so a test can keep one handle while the validator
/// owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    state: Rc<RefCell<MemoryState>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document pre-filled with the four values
    pub fn with_values(first_name: &str, last_name: &str, email: &str, password: &str) -> Self {
        let doc = Self::new();
        doc.set_value(FieldName::FirstName, first_name);
        doc.set_value(FieldName::LastName, last_name);
        doc.set_value(FieldName::Email, email);
        doc.set_value(FieldName::Password, password);
        doc
    }

    /// Simulate the user typing into a field
    pub fn set_value(&self, field: FieldName, value: &str) {
        self.state
            .borrow_mut()
            .values
            .insert(field, value.to_string());
    }

    pub fn error_text(&self, field: FieldName) -> String {
        self.state
            .borrow()
            .errors
            .get(&field)
            .cloned()
            .unwrap_or_default()
    }

    pub fn is_invalid(&self, field: FieldName) -> bool {
        self.state.borrow().invalid.contains(&field)
    }

    pub fn success_visible(&self) -> bool {
        self.state.borrow().success_visible
    }

    /// Number of times the form was reset
    pub fn reset_count(&self) -> usize {
        self.state.borrow().resets
    }
}

impl FormDocument for MemoryDocument {
    fn value(&self, field: FieldName) -> String {
        self.state
            .borrow()
            .values
            .get(&field)
            .cloned()
            .unwrap_or_default()
    }

    fn set_error_text(&self, field: FieldName, text: &str) {
        let mut state = self.state.borrow_mut();
        if text.is_empty() {
            state.errors.remove(&field);
        } else {
            state.errors.insert(field, text.to_string());
        }
    }

    fn set_invalid(&self, field: FieldName, invalid: bool) {
        let mut state = self.state.borrow_mut();
        if invalid {
            state.invalid.insert(field);
        } else {
            state.invalid.remove(&field);
        }
    }

    fn set_success_visible(&self, visible: bool) {
        self.state.borrow_mut().success_visible = visible;
    }

    fn reset(&self) {
        let mut state = self.state.borrow_mut();
        state.values.clear();
        state.resets += 1;
    }
}
