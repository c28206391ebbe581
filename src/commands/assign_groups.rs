//! assign-groups command
//!
//! Resolves the user and lists the organization's groups concurrently,
//! then adds the user to every requested group that exists, one
//! concurrent request per group.

use super::params::{parse_list_of_values, validate_email, Parameter, LIST_SEPARATOR};
use super::CommandParameters;
use crate::api::ApiClient;
use crate::batch::executor::{fan_out, Target};
use crate::batch::result::{OperationReport, OperationResult};
use crate::error::{CliResult, ResultExt};
use crate::models::GroupSnapshot;
use clap::Args;

/// Arguments for the assign-groups command
#[derive(Args, Debug, Clone)]
pub struct AssignGroupsArgs {
    /// Email of the member to add
    #[arg(long, default_value = "")]
    pub email: String,

    /// Comma-separated names of the groups to add the member to
    #[arg(long, default_value = "")]
    pub groups: String,
}

impl CommandParameters for AssignGroupsArgs {
    fn parameters(&self) -> Vec<Parameter<'_>> {
        vec![Parameter::required("email", &self.email).validated_by(validate_email)]
    }
}

/// Returns an error only when one of the two reads fails. Failures to add
/// the user to a group are reported per group.
pub async fn execute(args: &AssignGroupsArgs, client: &ApiClient) -> CliResult<OperationReport> {
    let logger = client.logger();
    let names = parse_list_of_values(&args.groups, LIST_SEPARATOR);

    if names.is_empty() {
        logger.info("No groups were specified, nothing to do");
        return Ok(OperationReport::new());
    }

    let (user, snapshot) = tokio::try_join!(
        async {
            client
                .get_user_by_email(&args.email)
                .await
                .context("Failed to resolve user ID")
        },
        async {
            client
                .list_groups()
                .await
                .context("Failed to fetch groups list")
        },
    )?;

    let mut report = OperationReport::new();
    let targets = resolve_targets(&names, &snapshot, &mut report);
    for skipped in &report.items {
        logger.info(skipped.line());
    }

    let user_id = user.id;
    fan_out(targets, logger, &mut report, |target| {
        let client = client.clone();
        let user_id = user_id.clone();
        async move { client.add_user_to_group(&target.id, &user_id).await }
    })
    .await;

    logger.verbose_with_context("groups", report.summary());
    Ok(report)
}

/// Split requested names into targets to act on and skipped results for
/// names with no matching group
fn resolve_targets(
    names: &[String],
    snapshot: &GroupSnapshot,
    report: &mut OperationReport,
) -> Vec<Target> {
    let mut targets = Vec::with_capacity(names.len());
    for name in names {
        match snapshot.id_of(name) {
            Some(id) => targets.push(Target::new(name.as_str(), id)),
            None => report.push(OperationResult::skipped(name.as_str())),
        }
    }
    targets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Group;
    use serde_json::json;

    fn snapshot() -> GroupSnapshot {
        let groups: Vec<Group> = serde_json::from_value(json!([
            {"id": "00g1", "profile": {"name": "Tech"}},
            {"id": "00g2", "profile": {"name": "Marketing"}}
        ]))
        .unwrap();
        GroupSnapshot::new(groups)
    }

    #[test]
    fn test_resolve_targets_skips_unknown_names() {
        let mut report = OperationReport::new();
        let names = vec![
            "Tech".to_string(),
            "Finance".to_string(),
            "Marketing".to_string(),
        ];

        let targets = resolve_targets(&names, &snapshot(), &mut report);

        assert_eq!(
            targets,
            vec![Target::new("Tech", "00g1"), Target::new("Marketing", "00g2")]
        );
        assert_eq!(report.skipped_count(), 1);
        assert_eq!(report.items[0].line(), "Finance does not exist");
    }

    #[test]
    fn test_empty_name_is_never_a_match() {
        let mut report = OperationReport::new();
        let names = vec![String::new()];

        let targets = resolve_targets(&names, &snapshot(), &mut report);

        assert!(targets.is_empty());
        assert_eq!(report.skipped_count(), 1);
    }
}
