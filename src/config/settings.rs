//! Persistent settings read from config.json

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::ConfigPaths;
use crate::error::{CliError, CliResult};

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings file contents. The API token is never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Organization URL used when neither -org-url nor OKTA_ORG_URL is set
    pub org_url: Option<String>,
    /// HTTP request timeout
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            org_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    /// Load from the default location; a missing file yields defaults
    pub fn load(paths: &ConfigPaths) -> CliResult<Self> {
        Self::load_from(&paths.config_file)
    }

    pub fn load_from(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content).map_err(|e| {
            CliError::Config(format!("Invalid settings in {}: {}", path.display(), e))
        })?;

        if settings.timeout_secs == 0 {
            return Err(CliError::Config(format!(
                "timeout_secs in {} must be greater than zero",
                path.display()
            )));
        }

        Ok(settings)
    }
}
