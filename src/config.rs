//! Loading navigation configurations from JSON files.
//!
//! Both `[{...}, ...]` and `{ "items": [{...}, ...] }` are accepted. Dropdown
//! children may be listed under `children` or `dropdown`.

use anyhow::{Context, Result};
use camino::Utf8Path;

use crate::model::MenuConfiguration;

/// Parse and validate a configuration from JSON text.
pub fn parse_configuration(text: &str) -> Result<MenuConfiguration> {
    let config: MenuConfiguration =
        serde_json::from_str(text).context("Failed to parse navigation configuration")?;
    Ok(config)
}

/// Read a configuration file from disk.
pub fn load_configuration(path: &Utf8Path) -> Result<MenuConfiguration> {
    let text = std::fs::read_to_string(path).with_context(|| format!("Open {}", path))?;
    parse_configuration(&text).with_context(|| format!("Invalid configuration in {}", path))
}

/// The file at `path` when given, the built-in site navigation otherwise.
pub fn load_or_default(path: Option<&Utf8Path>) -> Result<MenuConfiguration> {
    match path {
        Some(p) => load_configuration(p),
        None => Ok(MenuConfiguration::site_default()),
    }
}

/// Pretty JSON in the `{ "items": [...] }` shape.
pub fn to_json(config: &MenuConfiguration) -> Result<String> {
    Ok(serde_json::to_string_pretty(config)?)
}
