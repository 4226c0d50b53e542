//! Event wiring between the DOM and `FormValidator`

use std::cell::RefCell;
use std::rc::Rc;

use regform::{FieldName, FormConfig, FormValidator};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

use crate::dom::DomDocument;
use crate::timer::BrowserScheduler;

type BrowserValidator = FormValidator<DomDocument, BrowserScheduler>;

/// An event listener that is removed again when dropped
struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn add(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Registration form bound to the page.
///
/// Validates each field as it is edited and on submit. Listeners stay
/// attached until the object is freed or [`RegistrationForm::detach`] is called.
///
/// # Example (JavaScript)
/// ```javascript
/// const form = RegistrationForm.attach({ successHideDelayMs: 3000 });
/// ```
#[wasm_bindgen]
pub struct RegistrationForm {
    validator: Rc<RefCell<BrowserValidator>>,
    _listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl RegistrationForm {
    /// Bind to the form described by `config` (`undefined` for the default ids)
    pub fn attach(config: JsValue) -> Result<RegistrationForm, JsValue> {
        let config = parse_config(config)?;
        Self::attach_with(config)
    }

    /// Validate every field without submitting. Returns true when all pass.
    #[wasm_bindgen(js_name = validateAll)]
    pub fn validate_all(&self) -> bool {
        let mut validator = self.validator.borrow_mut();
        let mut all_valid = true;
        for field in FieldName::ALL {
            all_valid &= validator.validate_field(field);
        }
        all_valid
    }

    /// Stop the pending hide of the success message
    #[wasm_bindgen(js_name = cancelSuccessTimer)]
    pub fn cancel_success_timer(&self) -> bool {
        self.validator.borrow_mut().cancel_success_timer()
    }

    #[wasm_bindgen(js_name = dismissSuccess)]
    pub fn dismiss_success(&self) {
        self.validator.borrow_mut().dismiss_success();
    }

    /// Remove all listeners
    pub fn detach(self) {}
}

impl RegistrationForm {
    pub fn attach_with(config: FormConfig) -> Result<RegistrationForm, JsValue> {
        let document = DomDocument::bind_current(&config).map_err(to_js_error)?;
        let validator = Rc::new(RefCell::new(FormValidator::new(
            document.clone(),
            BrowserScheduler::new(),
            config,
        )));

        let mut listeners = Vec::with_capacity(FieldName::ALL.len() + 1);

        for field in FieldName::ALL {
            let validator = Rc::clone(&validator);
            listeners.push(Listener::add(document.input(field), "input", move |_event| {
                match validator.try_borrow_mut() {
                    Ok(mut validator) => {
                        validator.handle_input(field);
                    }
                    Err(_) => tracing::warn!(field = %field, "input event during validation ignored"),
                }
            })?);
        }

        let submit_validator = Rc::clone(&validator);
        listeners.push(Listener::add(document.form(), "submit", move |event| {
            event.prevent_default();
            match submit_validator.try_borrow_mut() {
                Ok(mut validator) => {
                    validator.handle_submit();
                }
                Err(_) => tracing::warn!("submit event during validation ignored"),
            }
        })?);

        Ok(RegistrationForm {
            validator,
            _listeners: listeners,
        })
    }
}

thread_local! {
    static MOUNTED: RefCell<Option<RegistrationForm>> = const { RefCell::new(None) };
}

/// Attach for the lifetime of the page, waiting for `DOMContentLoaded`
/// if the document is still loading.
#[wasm_bindgen(js_name = mountOnLoad)]
pub fn mount_on_load(config: JsValue) -> Result<(), JsValue> {
    let config = parse_config(config)?;
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;

    if document.ready_state() != "loading" {
        return mount(config);
    }

    let on_ready = Closure::once_into_js(move || {
        if let Err(err) = mount(config) {
            web_sys::console::error_2(&"registration form not attached:".into(), &err);
        }
    });
    document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
}

fn mount(config: FormConfig) -> Result<(), JsValue> {
    let form = RegistrationForm::attach_with(config)?;
    MOUNTED.with(|mounted| *mounted.borrow_mut() = Some(form));
    Ok(())
}

fn parse_config(config: JsValue) -> Result<FormConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(FormConfig::default());
    }
    serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
