//! Output sinks for log entries
//!
//! Every line okta-admin prints goes through a [`LogOutput`]:
//! results at `Normal` level, diagnostics at the higher levels.

use chrono::{DateTime, Local};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use super::level::LogLevel;

/// A log output destination
pub trait LogOutput: Send + Sync {
    fn write(&self, entry: &LogEntry) -> io::Result<()>;

    fn flush(&self) -> io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: LogLevel,
    pub message: String,
    /// Operation the entry belongs to (e.g. "http", "assign-groups")
    pub context: Option<String>,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            level,
            message: message.into(),
            context: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

/// Results to stdout, diagnostics to stderr
pub struct TerminalWriter {
    color: bool,
}

impl TerminalWriter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn format_diagnostic(&self, entry: &LogEntry) -> String {
        let context = entry.context.as_deref().unwrap_or("verbose");

        if !self.color {
            return format!("[{}] {}", context, entry.message);
        }

        let code = match entry.level {
            LogLevel::Debug => "33",
            LogLevel::Trace => "35",
            _ => "36",
        };
        format!("\x1b[{code}m[{context}]\x1b[0m {}", entry.message)
    }

    pub fn format_trace_warning(&self) -> &'static str {
        if self.color {
            "\x1b[33mTRACE MODE: output may contain sensitive information\x1b[0m"
        } else {
            "WARNING: TRACE MODE - output may contain sensitive information"
        }
    }
}

impl LogOutput for TerminalWriter {
    fn write(&self, entry: &LogEntry) -> io::Result<()> {
        if entry.level == LogLevel::Normal {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", entry.message)
        } else {
            let mut stderr = io::stderr().lock();
            writeln!(stderr, "{}", self.format_diagnostic(entry))
        }
    }

    fn flush(&self) -> io::Result<()> {
        io::stdout().flush()?;
        io::stderr().flush()
    }
}

/// Timestamped append-only log file
pub struct FileWriter {
    file: Mutex<File>,
}

impl FileWriter {
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            file: Mutex::new(file),
        })
    }

    fn format_entry(entry: &LogEntry) -> String {
        let timestamp = entry.timestamp.format("%Y-%m-%dT%H:%M:%S");
        let context = entry
            .context
            .as_deref()
            .map(|c| format!(" [{}]", c))
            .unwrap_or_default();

        format!(
            "[{}] [{}]{} {}",
            timestamp, entry.level, context, entry.message
        )
    }
}

impl LogOutput for FileWriter {
    fn write(&self, entry: &LogEntry) -> io::Result<()> {
        let formatted = Self::format_entry(entry);

        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::other("Failed to lock log file"))?;

        writeln!(file, "{}", formatted)?;
        file.flush()
    }

    fn flush(&self) -> io::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::other("Failed to lock log file"))?;
        file.flush()
    }
}

/// Keeps entries in memory so callers can inspect what a command printed
#[derive(Default)]
pub struct MemoryWriter {
    entries: Mutex<Vec<LogEntry>>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages written at `Normal` level, in write order
    pub fn lines(&self) -> Vec<String> {
        self.entries_at(LogLevel::Normal)
    }

    /// Messages written at exactly `level`
    pub fn entries_at(&self, level: LogLevel) -> Vec<String> {
        self.entries
            .lock()
            .map(|entries| {
                entries
                    .iter()
                    .filter(|e| e.level == level)
                    .map(|e| e.message.clone())
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl LogOutput for MemoryWriter {
    fn write(&self, entry: &LogEntry) -> io::Result<()> {
        self.entries
            .lock()
            .map_err(|_| io::Error::other("Failed to lock memory log"))?
            .push(entry.clone());
        Ok(())
    }

    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}
