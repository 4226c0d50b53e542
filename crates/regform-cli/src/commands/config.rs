use anyhow::{Context, Result};
use regform::FormConfig;

pub fn execute(config: &FormConfig) -> Result<()> {
    let rendered = toml::to_string_pretty(config).context("Failed to render config")?;
    print!("{}", rendered);
    Ok(())
}
