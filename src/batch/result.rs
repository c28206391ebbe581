//! Per-operation outcome records and the lines they render to
//!
//! Each concurrent write (or a skipped lookup) yields one `OperationResult`.
//! The formatters are pure; callers hand the lines to the logger.

use crate::error::CliError;
use reqwest::StatusCode;
use serde::Serialize;

/// Status of a single operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationStatus {
    Success,
    Failed,
    /// Target did not exist, nothing was sent
    Skipped,
}

/// Outcome of one operation against one named target
#[derive(Debug, Clone, Serialize)]
pub struct OperationResult {
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub status: OperationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OperationResult {
    pub fn success(target: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            id: Some(id.into()),
            status: OperationStatus::Success,
            error: None,
        }
    }

    /// A failed call; the detail is the transport error text, or the
    /// status line when the server answered
    pub fn failed(target: impl Into<String>, id: Option<String>, error: &CliError) -> Self {
        Self {
            target: target.into(),
            id,
            status: OperationStatus::Failed,
            error: Some(failure_detail(error)),
        }
    }

    pub fn skipped(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            id: None,
            status: OperationStatus::Skipped,
            error: None,
        }
    }

    /// The line printed for this result
    pub fn line(&self) -> String {
        match self.status {
            OperationStatus::Success => format!("Added to {}", self.target),
            OperationStatus::Failed => format!(
                "Failed to add user to {}: {}",
                self.target,
                self.error.as_deref().unwrap_or("unknown error")
            ),
            OperationStatus::Skipped => format!("{} does not exist", self.target),
        }
    }
}

fn failure_detail(error: &CliError) -> String {
    if error.is_transport() {
        return error.to_string();
    }
    match error.status() {
        Some(code) => status_line(code),
        None => error.to_string(),
    }
}

/// `403 Forbidden`, or the bare code when it has no reason phrase
fn status_line(code: u16) -> String {
    StatusCode::from_u16(code)
        .ok()
        .and_then(|s| s.canonical_reason())
        .map(|reason| format!("{code} {reason}"))
        .unwrap_or_else(|| code.to_string())
}

/// Every result of one command invocation, in the order they were recorded
#[derive(Debug, Clone, Default, Serialize)]
pub struct OperationReport {
    pub items: Vec<OperationResult>,
}

impl OperationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, result: OperationResult) {
        self.items.push(result);
    }

    pub fn count(&self, status: OperationStatus) -> usize {
        self.items.iter().filter(|i| i.status == status).count()
    }

    pub fn success_count(&self) -> usize {
        self.count(OperationStatus::Success)
    }

    pub fn failure_count(&self) -> usize {
        self.count(OperationStatus::Failed)
    }

    pub fn skipped_count(&self) -> usize {
        self.count(OperationStatus::Skipped)
    }

    pub fn summary(&self) -> String {
        format!(
            "{} added, {} failed, {} skipped",
            self.success_count(),
            self.failure_count(),
            self.skipped_count()
        )
    }
}
