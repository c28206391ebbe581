//! Parameter validation shared by every command

use crate::error::{CliError, CliResult};
use regex::Regex;
use reqwest::Url;
use std::sync::LazyLock;

/// Separator of multi-value options such as `-groups`
pub const LIST_SEPARATOR: &str = ",";

pub type ValidationFn = fn(&str) -> CliResult<()>;

/// A command-line parameter together with how it must be checked
#[derive(Debug, Clone, Copy)]
pub struct Parameter<'a> {
    pub name: &'a str,
    pub value: &'a str,
    pub required: bool,
    pub validation: Option<ValidationFn>,
}

impl<'a> Parameter<'a> {
    pub fn required(name: &'a str, value: &'a str) -> Self {
        Self {
            name,
            value,
            required: true,
            validation: None,
        }
    }

    pub fn optional(name: &'a str, value: &'a str) -> Self {
        Self {
            name,
            value,
            required: false,
            validation: None,
        }
    }

    pub fn validated_by(mut self, validation: ValidationFn) -> Self {
        self.validation = Some(validation);
        self
    }
}

/// Check parameters in order and stop at the first problem.
///
/// Empty required values fail with "<name> is required". Validation only
/// runs on non-empty values, so a required but invalid value reports the
/// validation error.
pub fn validate_parameters(params: &[Parameter<'_>]) -> CliResult<()> {
    for p in params {
        if p.required && p.value.is_empty() {
            return Err(CliError::MissingArgument(p.name.to_string()));
        }
        if let Some(validate) = p.validation {
            if !p.value.is_empty() {
                validate(p.value)?;
            }
        }
    }
    Ok(())
}

/// Split a raw multi-value option and trim every element.
///
/// Blank input gives an empty list; otherwise there is one element per
/// separated position, empty ones included.
pub fn parse_list_of_values(raw: &str, separator: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    raw.split(separator).map(|v| v.trim().to_string()).collect()
}

/// First non-empty string, or "" when there is none
pub fn coalesce<'a>(values: &[&'a str]) -> &'a str {
    values.iter().copied().find(|v| !v.is_empty()).unwrap_or("")
}

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@",
        r"(?:",
        r"(?:[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}",
        r"|",
        r"(?:[0-9]{1,3}\.){3}[0-9]{1,3}",
        r")$"
    ))
    .expect("Invalid email pattern")
});

pub fn validate_email(value: &str) -> CliResult<()> {
    if EMAIL_PATTERN.is_match(value) {
        Ok(())
    } else {
        Err(CliError::Validation(format!(
            "'{value}' is not a valid email ID"
        )))
    }
}

/// Absolute http(s) URL with a host
pub fn validate_url(value: &str) -> CliResult<()> {
    let invalid = |reason: String| CliError::Validation(format!("'{value}' is not a valid URL: {reason}"));

    let url = Url::parse(value).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid("missing host".to_string()));
    }
    Ok(())
}
