//! Configuration management for okta-admin

mod paths;
mod settings;

pub use paths::{ConfigPaths, CONFIG_DIR_ENV};
pub use settings::{Settings, DEFAULT_TIMEOUT_SECS};

/// Environment variables backing the global options
pub const ORG_URL_ENV: &str = "OKTA_ORG_URL";
pub const API_TOKEN_ENV: &str = "OKTA_API_TOKEN";
