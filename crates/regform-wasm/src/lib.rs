//! Registration form WASM
//!
//! Browser bindings for the registration form validator.
//! The same rules run here as in the native crate and the CLI.

use regform::{FieldName, ValidationResult};
use wasm_bindgen::prelude::*;

pub mod dom;
pub mod form;
pub mod timer;

pub use dom::{BindError, DomDocument};
pub use form::{mount_on_load, RegistrationForm};
pub use timer::BrowserScheduler;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Validate a value as a first or last name
///
/// Returns `{ isValid, message }`.
#[wasm_bindgen(js_name = validateName)]
pub fn validate_name_js(value: &str) -> Result<JsValue, JsValue> {
    to_js(&regform::validate_name(value))
}

#[wasm_bindgen(js_name = validateEmail)]
pub fn validate_email_js(value: &str) -> Result<JsValue, JsValue> {
    to_js(&regform::validate_email(value))
}

#[wasm_bindgen(js_name = validatePassword)]
pub fn validate_password_js(value: &str) -> Result<JsValue, JsValue> {
    to_js(&regform::validate_password(value))
}

/// Validate a value for a named field (`firstName`, `lastName`, `email`, `password`).
/// The value is trimmed first, as the form does.
///
/// # Example (JavaScript)
/// ```javascript
/// const { isValid, message } = validateField('email', ' user@example.com ');
/// ```
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field_js(field_name: &str, value: &str) -> Result<JsValue, JsValue> {
    to_js(&check_field(field_name, value)?)
}

fn check_field(field_name: &str, value: &str) -> Result<ValidationResult, JsValue> {
    let field: FieldName = field_name
        .parse()
        .map_err(|e: regform::UnknownField| JsValue::from_str(&e.to_string()))?;
    Ok(regform::validate(field.kind(), regform::trim(value)))
}

fn to_js(result: &ValidationResult) -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(result)?)
}
