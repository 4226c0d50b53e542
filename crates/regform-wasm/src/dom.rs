//! `FormDocument` backed by the page's DOM

use std::rc::Rc;

use regform::{FieldName, FormConfig, FormDocument};
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement};

/// Failure to find the form's elements on the page
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    #[error("no window or document available")]
    NoDocument,

    #[error("element #{0} not found")]
    MissingElement(String),

    #[error("element #{id} is not a {expected}")]
    WrongElementType { id: String, expected: &'static str },
}

struct FieldElements {
    input: HtmlInputElement,
    error: Element,
}

struct DomElements {
    form: HtmlFormElement,
    first_name: FieldElements,
    last_name: FieldElements,
    email: FieldElements,
    password: FieldElements,
    success: HtmlElement,
    invalid_class: String,
}

/// Handle to the bound form elements. Clones share the same elements.
#[derive(Clone)]
pub struct DomDocument {
    elements: Rc<DomElements>,
}

impl DomDocument {
    /// Look up every element named in `config`
    pub fn bind(document: &Document, config: &FormConfig) -> Result<Self, BindError> {
        let ids = &config.ids;
        let field = |name: FieldName| -> Result<FieldElements, BindError> {
            Ok(FieldElements {
                input: typed(document, ids.input(name), "input element")?,
                error: element(document, &ids.error(name))?,
            })
        };

        let elements = DomElements {
            form: typed(document, &ids.form, "form element")?,
            first_name: field(FieldName::FirstName)?,
            last_name: field(FieldName::LastName)?,
            email: field(FieldName::Email)?,
            password: field(FieldName::Password)?,
            success: typed(document, &ids.success, "HTML element")?,
            invalid_class: config.invalid_class.clone(),
        };

        Ok(Self {
            elements: Rc::new(elements),
        })
    }

    /// Bind against the current window's document
    pub fn bind_current(config: &FormConfig) -> Result<Self, BindError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(BindError::NoDocument)?;
        Self::bind(&document, config)
    }

    pub fn form(&self) -> &HtmlFormElement {
        &self.elements.form
    }

    pub fn input(&self, field: FieldName) -> &HtmlInputElement {
        &self.field(field).input
    }

    fn field(&self, field: FieldName) -> &FieldElements {
        match field {
            FieldName::FirstName => &self.elements.first_name,
            FieldName::LastName => &self.elements.last_name,
            FieldName::Email => &self.elements.email,
            FieldName::Password => &self.elements.password,
        }
    }
}

impl FormDocument for DomDocument {
    fn value(&self, field: FieldName) -> String {
        self.field(field).input.value()
    }

    fn set_error_text(&self, field: FieldName, text: &str) {
        self.field(field).error.set_text_content(Some(text));
    }

    fn set_invalid(&self, field: FieldName, invalid: bool) {
        let class_list = self.field(field).input.class_list();
        if let Err(err) = class_list.toggle_with_force(&self.elements.invalid_class, invalid) {
            tracing::warn!(field = %field, ?err, "failed to toggle invalid class");
        }
    }

    fn set_success_visible(&self, visible: bool) {
        let display = if visible { "block" } else { "none" };
        if let Err(err) = self.elements.success.style().set_property("display", display) {
            tracing::warn!(?err, "failed to update success message visibility");
        }
    }

    fn reset(&self) {
        self.elements.form.reset();
    }
}

fn element(document: &Document, id: &str) -> Result<Element, BindError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| BindError::MissingElement(id.to_string()))
}

fn typed<T: JsCast>(document: &Document, id: &str, expected: &'static str) -> Result<T, BindError> {
    element(document, id)?
        .dyn_into::<T>()
        .map_err(|_| BindError::WrongElementType {
            id: id.to_string(),
            expected,
        })
}
