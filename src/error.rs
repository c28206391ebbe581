//! CLI error types and exit codes

use thiserror::Error;

/// Exit codes for the CLI
/// - 0: Success
/// - 1: Argument, client initialization or request failure
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0} is required")]
    MissingArgument(String),

    #[error("{0}")]
    Validation(String),

    #[error("Failed to parse arguments: {0}")]
    Usage(String),

    #[error("Failed to initialize Okta client: {0}")]
    ClientInit(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Connection failed: {0}\n\nTroubleshooting:\n  - Check your internet connection\n  - Verify the organization URL is correct\n  - Try again in a few moments")]
    ConnectionFailed(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Failed to read API response: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<CliError>,
    },
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Whether the error came from the transport rather than the API
    pub fn is_transport(&self) -> bool {
        match self {
            CliError::Network(_) | CliError::ConnectionFailed(_) => true,
            CliError::Context { source, .. } => source.is_transport(),
            _ => false,
        }
    }

    /// HTTP status of an API error, if the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            CliError::Api { status, .. } => Some(*status),
            CliError::NotFound(_) => Some(404),
            CliError::Context { source, .. } => source.status(),
            _ => None,
        }
    }

    /// Print the error to stderr with appropriate formatting
    pub fn print(&self) {
        let use_color = std::env::var("NO_COLOR").is_err();

        if use_color {
            eprintln!("\x1b[31mError:\x1b[0m {}", self);
        } else {
            eprintln!("Error: {}", self);
        }

        if let Some(suggestion) = self.suggestion() {
            if use_color {
                eprintln!("\n\x1b[33mSuggestion:\x1b[0m {}", suggestion);
            } else {
                eprintln!("\nSuggestion: {}", suggestion);
            }
        }
    }

    /// Get a suggested action for this error
    fn suggestion(&self) -> Option<&'static str> {
        match self {
            CliError::ClientInit(_) => {
                Some("Pass -org-url and -api-token, or set OKTA_ORG_URL and OKTA_API_TOKEN.")
            }
            CliError::Api { status: 401, .. } => {
                Some("Check that the API token is valid and has not been revoked.")
            }
            CliError::Context { source, .. } => source.suggestion(),
            _ => None,
        }
    }
}

/// Attach the failing step to an error
pub trait ResultExt<T> {
    fn context(self, context: &str) -> CliResult<T>;
}

impl<T> ResultExt<T> for CliResult<T> {
    fn context(self, context: &str) -> CliResult<T> {
        self.map_err(|source| CliError::Context {
            context: context.to_string(),
            source: Box::new(source),
        })
    }
}

impl From<reqwest::Error> for CliError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() {
            CliError::ConnectionFailed(e.to_string())
        } else if e.is_timeout() {
            CliError::Network("Request timed out".to_string())
        } else if e.is_decode() {
            CliError::InvalidResponse(e.to_string())
        } else {
            CliError::Network(e.to_string())
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::InvalidResponse(e.to_string())
    }
}

/// Keeps clap's first line without its `error: ` prefix; the usage block
/// and the `--help` hint are dropped.
impl From<clap::Error> for CliError {
    fn from(e: clap::Error) -> Self {
        let rendered = e.to_string();
        let first = rendered.lines().find(|l| !l.trim().is_empty()).unwrap_or_default();
        let message = first.strip_prefix("error:").unwrap_or(first).trim();
        CliError::Usage(message.to_string())
    }
}
