//! Logger configuration built from CLI flags and environment

use std::path::PathBuf;

use super::level::LogLevel;

/// Environment variables that raise the verbosity without flags
pub const ENV_VERBOSE: &str = "OKTA_ADMIN_VERBOSE";
pub const ENV_DEBUG: &str = "OKTA_ADMIN_DEBUG";
pub const ENV_TRACE: &str = "OKTA_ADMIN_TRACE";

#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    pub level: LogLevel,
    /// Append every entry, with timestamps, to this file
    pub log_file: Option<PathBuf>,
    /// Colorize terminal output
    pub color: bool,
}

impl LogConfig {
    /// Combine flags with the OKTA_ADMIN_* environment variables.
    ///
    /// A flag or a truthy variable turns a level on; the highest one wins.
    pub fn from_args_and_env(
        verbose: bool,
        debug: bool,
        trace: bool,
        log_file: Option<PathBuf>,
    ) -> Self {
        let level = LogLevel::from_flags(
            verbose || env_flag(ENV_VERBOSE),
            debug || env_flag(ENV_DEBUG),
            trace || env_flag(ENV_TRACE),
        );

        Self {
            level,
            log_file,
            color: std::env::var("NO_COLOR").is_err(),
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.level.enables(LogLevel::Verbose)
    }

    pub fn is_debug(&self) -> bool {
        self.level.enables(LogLevel::Debug)
    }

    pub fn is_trace(&self) -> bool {
        self.level.enables(LogLevel::Trace)
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| is_truthy(&v))
        .unwrap_or(false)
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
