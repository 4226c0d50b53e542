// File: src/config.rs
// Purpose: Form configuration (element ids, marker class, banner delay) from regform.toml

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::field::FieldName;

/// Form configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormConfig {
    /// Class toggled on an input while its value is invalid
    #[serde(default = "default_invalid_class", alias = "invalidClass")]
    pub invalid_class: String,

    /// How long the success banner stays visible after a submission
    #[serde(default = "default_success_hide_delay_ms", alias = "successHideDelayMs")]
    pub success_hide_delay_ms: u64,

    // Tables come after plain values in TOML output
    #[serde(default)]
    pub ids: ElementIds,
}

/// Identifiers of the elements the validator binds to.
///
/// Error container ids default to `<input id>Error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementIds {
    #[serde(default = "default_form_id")]
    pub form: String,

    #[serde(default = "default_first_name_id", alias = "firstName")]
    pub first_name: String,

    #[serde(default = "default_last_name_id", alias = "lastName")]
    pub last_name: String,

    #[serde(default = "default_email_id")]
    pub email: String,

    #[serde(default = "default_password_id")]
    pub password: String,

    #[serde(default = "default_success_id")]
    pub success: String,

    #[serde(default, alias = "firstNameError")]
    pub first_name_error: Option<String>,

    #[serde(default, alias = "lastNameError")]
    pub last_name_error: Option<String>,

    #[serde(default, alias = "emailError")]
    pub email_error: Option<String>,

    #[serde(default, alias = "passwordError")]
    pub password_error: Option<String>,
}

// Default values
fn default_invalid_class() -> String {
    "invalid".to_string()
}

fn default_success_hide_delay_ms() -> u64 {
    5000
}

fn default_form_id() -> String {
    "registrationForm".to_string()
}

fn default_first_name_id() -> String {
    "firstName".to_string()
}

fn default_last_name_id() -> String {
    "lastName".to_string()
}

fn default_email_id() -> String {
    "email".to_string()
}

fn default_password_id() -> String {
    "password".to_string()
}

fn default_success_id() -> String {
    "successMessage".to_string()
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            invalid_class: default_invalid_class(),
            success_hide_delay_ms: default_success_hide_delay_ms(),
            ids: ElementIds::default(),
        }
    }
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            form: default_form_id(),
            first_name: default_first_name_id(),
            last_name: default_last_name_id(),
            email: default_email_id(),
            password: default_password_id(),
            success: default_success_id(),
            first_name_error: None,
            last_name_error: None,
            email_error: None,
            password_error: None,
        }
    }
}

impl ElementIds {
    /// Id of the input element for `field`
    pub fn input(&self, field: FieldName) -> &str {
        match field {
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
        }
    }

    /// Id of the error container for `field`
    pub fn error(&self, field: FieldName) -> String {
        let explicit = match field {
            FieldName::FirstName => &self.first_name_error,
            FieldName::LastName => &self.last_name_error,
            FieldName::Email => &self.email_error,
            FieldName::Password => &self.password_error,
        };

        explicit
            .clone()
            .unwrap_or_else(|| format!("{}Error", self.input(field)))
    }
}

impl FormConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: FormConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./regform.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("regform.toml")
    }

    pub fn success_hide_delay(&self) -> Duration {
        Duration::from_millis(self.success_hide_delay_ms)
    }
}
