//! Project root and configuration resolution shared by the commands

use anyhow::{Context, Result};
use scriptbind::ScriptbindConfig;
use std::path::{Path, PathBuf};

/// Project root from `--project`, defaulting to the current directory
pub fn resolve_root(project: Option<String>) -> PathBuf {
    project.map_or_else(|| PathBuf::from("."), PathBuf::from)
}

/// Load and validate the configuration for a command.
///
/// An explicit `--config` path must exist. Without one, `scriptbind.toml` in
/// the project root is used when present, otherwise the defaults.
pub fn load_config(project_root: &Path, config_path: Option<&str>) -> Result<ScriptbindConfig> {
    let config = match config_path {
        Some(path) => {
            tracing::debug!(config = path, "loading configuration");
            ScriptbindConfig::from_file(path)
                .with_context(|| format!("Failed to load config: {path}"))?
        }
        None => ScriptbindConfig::load_for_project(project_root).with_context(|| {
            format!("Failed to load config from project: {}", project_root.display())
        })?,
    };

    config.validate().context("Invalid configuration")?;
    Ok(config)
}
