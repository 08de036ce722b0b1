//! Portal configuration loading for the CLI.

use anyhow::Context;
use std::path::Path;

use acadex_core::PortalConfig;

/// Load a portal configuration from a TOML file, falling back to defaults
/// when the file does not exist.
pub fn load(path: &Path) -> anyhow::Result<PortalConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(PortalConfig::default());
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = toml::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

/// Save a portal configuration to a TOML file.
pub fn save(config: &PortalConfig, path: &Path) -> anyhow::Result<()> {
    let text = toml::to_string_pretty(config).context("serializing config")?;
    std::fs::write(path, text)
        .with_context(|| format!("writing config {}", path.display()))?;
    Ok(())
}
