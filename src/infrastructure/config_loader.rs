use crate::domain::config::ExtractorConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load an `ExtractorConfig` from a TOML file. Keys left out keep their defaults.
pub fn load_config(path: &Path) -> Result<ExtractorConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: ExtractorConfig = toml::from_str(&content)
        .with_context(|| format!("Invalid config file {}", path.display()))?;
    Ok(config.normalized())
}
