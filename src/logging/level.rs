//! Log levels for okta-admin output
//!
//! Levels are cumulative: Debug includes Verbose, Trace includes Debug.
//! `Normal` is the level of the result lines every command prints.

use std::fmt;

/// Verbosity level, ordered Normal < Verbose < Debug < Trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    /// Command results only (default)
    #[default]
    Normal = 0,
    /// Progress of each step of a command
    Verbose = 1,
    /// HTTP method, URL, status code, timing
    Debug = 2,
    /// Response bodies, redacted
    Trace = 3,
}

impl LogLevel {
    /// Highest level requested by the flags: trace > debug > verbose > normal
    pub fn from_flags(verbose: bool, debug: bool, trace: bool) -> Self {
        if trace {
            Self::Trace
        } else if debug {
            Self::Debug
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Whether a message at `level` is emitted under this configured level
    pub fn enables(&self, level: LogLevel) -> bool {
        level <= *self
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Normal => "INFO",
            Self::Verbose => "VERBOSE",
            Self::Debug => "DEBUG",
            Self::Trace => "TRACE",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
