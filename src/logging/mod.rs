//! Logging for okta-admin
//!
//! Everything a command prints flows through [`Logger`]:
//! - `info` for result lines (always shown)
//! - `verbose` for progress (`--verbose` / `OKTA_ADMIN_VERBOSE`)
//! - `debug_request` / `debug_response` for HTTP exchanges (`--debug`)
//! - `trace_body` for redacted response bodies (`--trace`)
//!
//! The logger is cloned into every command and into the API client rather
//! than kept in a global, so tests can hand in a [`MemoryWriter`].

pub mod config;
pub mod level;
pub mod output;
pub mod redaction;

pub use config::{LogConfig, ENV_DEBUG, ENV_TRACE, ENV_VERBOSE};
pub use level::LogLevel;
pub use output::{FileWriter, LogEntry, LogOutput, MemoryWriter, TerminalWriter};
pub use redaction::{Redactor, REDACTED};

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Clone)]
pub struct Logger {
    inner: Arc<LoggerInner>,
}

struct LoggerInner {
    config: LogConfig,
    outputs: Vec<Arc<dyn LogOutput>>,
    redactor: Redactor,
    trace_warned: AtomicBool,
}

impl Logger {
    /// Terminal output, plus the log file when one is configured
    pub fn new(config: LogConfig) -> io::Result<Self> {
        let mut outputs: Vec<Arc<dyn LogOutput>> = vec![Arc::new(TerminalWriter::new(config.color))];
        if let Some(ref path) = config.log_file {
            outputs.push(Arc::new(FileWriter::new(path)?));
        }
        Ok(Self::from_outputs(config, outputs))
    }

    /// Send everything to a single sink
    pub fn with_output(config: LogConfig, output: Arc<dyn LogOutput>) -> Self {
        Self::from_outputs(config, vec![output])
    }

    fn from_outputs(config: LogConfig, outputs: Vec<Arc<dyn LogOutput>>) -> Self {
        Self {
            inner: Arc::new(LoggerInner {
                config,
                outputs,
                redactor: Redactor::new(),
                trace_warned: AtomicBool::new(false),
            }),
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.inner.config.is_verbose()
    }

    pub fn is_debug(&self) -> bool {
        self.inner.config.is_debug()
    }

    pub fn is_trace(&self) -> bool {
        self.inner.config.is_trace()
    }

    fn emit(&self, entry: LogEntry) {
        if !self.inner.config.level.enables(entry.level) {
            return;
        }
        for output in &self.inner.outputs {
            let _ = output.write(&entry);
        }
    }

    /// A result line
    pub fn info(&self, message: impl Into<String>) {
        self.emit(LogEntry::new(LogLevel::Normal, message));
    }

    pub fn verbose(&self, message: impl Into<String>) {
        self.verbose_with_context("verbose", message);
    }

    pub fn verbose_with_context(&self, context: impl Into<String>, message: impl Into<String>) {
        self.emit(LogEntry::new(LogLevel::Verbose, message).with_context(context));
    }

    pub fn debug_request(&self, method: &str, url: &str) {
        if !self.is_debug() {
            return;
        }
        let message = format!("→ {} {}", method, self.inner.redactor.redact(url));
        self.emit(LogEntry::new(LogLevel::Debug, message).with_context("http"));
    }

    pub fn debug_response(&self, status: u16, status_text: &str, timing_ms: u64) {
        if !self.is_debug() {
            return;
        }
        let message = format!("← {} {} ({}ms)", status, status_text, timing_ms);
        self.emit(LogEntry::new(LogLevel::Debug, message).with_context("http"));
    }

    /// Log a response body, redacted. Empty bodies are logged as "(empty)".
    pub fn trace_body(&self, body: &str) {
        if !self.is_trace() {
            return;
        }

        if !self.inner.trace_warned.swap(true, Ordering::SeqCst) {
            let warning = TerminalWriter::new(self.inner.config.color).format_trace_warning();
            eprintln!("{}", warning);
        }

        let redacted = self.inner.redactor.redact(body);
        let message = if redacted.trim().is_empty() {
            "Body: (empty)".to_string()
        } else {
            format!("Body:\n    {}", redacted)
        };
        self.emit(LogEntry::new(LogLevel::Trace, message).with_context("http"));
    }

    pub fn flush(&self) {
        for output in &self.inner.outputs {
            let _ = output.flush();
        }
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.inner.config)
            .field("outputs", &self.inner.outputs.len())
            .finish()
    }
}
