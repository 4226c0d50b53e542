pub mod check;
pub mod config;

use std::path::Path;

use anyhow::Result;
use regform::FormConfig;

/// Explicit path, or ./regform.toml (defaults when absent)
pub fn load_config(path: Option<&Path>) -> Result<FormConfig> {
    match path {
        Some(path) => {
            anyhow::ensure!(path.exists(), "Config file not found: {:?}", path);
            FormConfig::load(path)
        }
        None => FormConfig::load_default(),
    }
}
