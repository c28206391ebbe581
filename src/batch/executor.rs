//! Fan-out executor
//!
//! Spawns one task per target on a `JoinSet` and joins exactly as many
//! results as were launched, handling each as it arrives.

use crate::batch::result::{OperationReport, OperationResult};
use crate::error::{CliError, CliResult};
use crate::logging::Logger;
use std::future::Future;
use tokio::task::JoinSet;

/// A resolved target: display name plus the API identifier to act on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub name: String,
    pub id: String,
}

impl Target {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }
}

/// Run `operation` concurrently for every target.
///
/// Each outcome is logged and recorded in `report` in arrival order. A task
/// that panics is recorded as a failure of its own target once the set has
/// drained.
pub async fn fan_out<F, Fut>(
    targets: Vec<Target>,
    logger: &Logger,
    report: &mut OperationReport,
    operation: F,
) where
    F: Fn(Target) -> Fut,
    Fut: Future<Output = CliResult<()>> + Send + 'static,
{
    let mut join_set = JoinSet::new();
    let mut outstanding: Vec<Target> = Vec::with_capacity(targets.len());

    for target in targets {
        let call = operation(target.clone());
        let spawned = target.clone();
        join_set.spawn(async move { (spawned, call.await) });
        outstanding.push(target);
    }

    logger.verbose_with_context("batch", format!("Waiting on {} requests", outstanding.len()));

    while let Some(joined) = join_set.join_next().await {
        match joined {
            Ok((target, outcome)) => {
                if let Some(pos) = outstanding.iter().position(|t| t == &target) {
                    outstanding.swap_remove(pos);
                }
                let result = match outcome {
                    Ok(()) => OperationResult::success(target.name, target.id),
                    Err(e) => OperationResult::failed(target.name, Some(target.id), &e),
                };
                logger.info(result.line());
                report.push(result);
            }
            Err(e) => {
                logger.verbose_with_context("batch", format!("Request task failed: {e}"));
            }
        }
    }

    // Whatever never reported back belongs to a task that died
    for target in outstanding {
        let error = CliError::Io("request task panicked".to_string());
        let result = OperationResult::failed(target.name, Some(target.id), &error);
        logger.info(result.line());
        report.push(result);
    }
}
