//! list-groups command

use super::params::{parse_list_of_values, Parameter, LIST_SEPARATOR};
use super::CommandParameters;
use crate::api::ApiClient;
use crate::error::{CliResult, ResultExt};
use crate::models::Group;
use clap::Args;

/// Arguments for the list-groups command
#[derive(Args, Debug, Clone, Default)]
pub struct ListGroupsArgs {
    /// Comma-separated group names to report on; all groups when empty
    #[arg(long, default_value = "")]
    pub groups: String,

    /// Show ID, description and links of each group
    #[arg(long)]
    pub detailed: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl CommandParameters for ListGroupsArgs {
    fn parameters(&self) -> Vec<Parameter<'_>> {
        Vec::new()
    }
}

pub async fn execute(args: &ListGroupsArgs, client: &ApiClient) -> CliResult<()> {
    let names = parse_list_of_values(&args.groups, LIST_SEPARATOR);

    let snapshot = client
        .list_groups()
        .await
        .context("Failed to fetch groups list")?;
    let groups = snapshot.filter_by_names(&names);

    let logger = client.logger();
    logger.verbose_with_context(
        "groups",
        format!("{} of {} groups selected", groups.len(), snapshot.len()),
    );

    if args.json {
        logger.info(serde_json::to_string_pretty(&groups)?);
        return Ok(());
    }

    for group in groups {
        if args.detailed {
            logger.info(render_detailed(group));
            logger.info("=".repeat(40));
        } else {
            logger.info(group.name());
        }
    }

    Ok(())
}

/// Multi-line description of one group
pub fn render_detailed(group: &Group) -> String {
    let description = group
        .profile
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .unwrap_or("[None]");

    format!(
        "Name:        {}\nID:          {}\nDescription: {}\n\nLinks\n  Users: {}\n  Apps:  {}\n",
        group.name(),
        group.id,
        description,
        group.users_href().unwrap_or_default(),
        group.apps_href().unwrap_or_default(),
    )
}
