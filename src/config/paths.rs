//! Platform-specific configuration paths

use crate::error::{CliError, CliResult};
use std::path::PathBuf;

/// Overrides the configuration directory
pub const CONFIG_DIR_ENV: &str = "OKTA_ADMIN_CONFIG_DIR";

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub config_dir: PathBuf,
    /// Path to config.json
    pub config_file: PathBuf,
}

impl ConfigPaths {
    /// Configuration paths for the current platform
    ///
    /// - Linux: ~/.config/okta-admin/
    /// - macOS: ~/Library/Application Support/okta-admin/
    /// - Windows: %APPDATA%\okta-admin\
    pub fn new() -> CliResult<Self> {
        let config_dir = resolve_config_dir(std::env::var(CONFIG_DIR_ENV).ok())?;
        Ok(Self::from_dir(config_dir))
    }

    pub fn from_dir(config_dir: PathBuf) -> Self {
        Self {
            config_file: config_dir.join("config.json"),
            config_dir,
        }
    }
}

fn resolve_config_dir(override_dir: Option<String>) -> CliResult<PathBuf> {
    if let Some(dir) = override_dir.filter(|d| !d.trim().is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    let base_dir = dirs::config_dir().ok_or_else(|| {
        CliError::Config("Could not determine configuration directory".to_string())
    })?;

    Ok(base_dir.join("okta-admin"))
}
