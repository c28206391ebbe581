//! webpage command

use super::params::Parameter;
use super::CommandParameters;
use crate::error::{CliError, CliResult};
use crate::logging::Logger;
use clap::Args;
use reqwest::Url;

/// Admin console pages, by type
pub const PAGES: &[(&str, &str)] = &[
    ("home", "/admin/dashboard"),
    ("api", "/admin/access/api/tokens"),
    ("apps", "/admin/apps/active"),
    ("logs", "/report/system_log_2"),
    ("people", "/admin/users"),
    ("groups", "/admin/groups"),
    ("admins", "/admin/access/admins"),
    ("account", "/admin/settings/account"),
];

/// Arguments for the webpage command
#[derive(Args, Debug, Clone)]
pub struct WebpageArgs {
    /// Page to open: home, api, apps, logs, people, groups, admins or account
    #[arg(default_value = "home")]
    pub page: String,

    /// Print the URL without launching a browser
    #[arg(long)]
    pub no_browser: bool,
}

impl CommandParameters for WebpageArgs {
    fn parameters(&self) -> Vec<Parameter<'_>> {
        Vec::new()
    }

    fn needs_api_token(&self) -> bool {
        false
    }
}

pub fn route_for(page: &str) -> Option<&'static str> {
    let page = page.to_lowercase();
    PAGES
        .iter()
        .find(|(name, _)| *name == page)
        .map(|(_, route)| *route)
}

/// Org URL with the page route as its path
pub fn page_url(org_url: &str, page: &str) -> CliResult<Url> {
    let route = route_for(page)
        .ok_or_else(|| CliError::Validation(format!("Invalid page type '{}'", page.to_lowercase())))?;
    let base = Url::parse(org_url)
        .map_err(|e| CliError::Validation(format!("'{org_url}' is not a valid URL: {e}")))?;
    base.join(route)
        .map_err(|e| CliError::Validation(format!("Cannot build page URL: {e}")))
}

/// Open the page in the default browser and print its URL. Failing to
/// launch the browser is reported but is not an error.
pub fn execute(args: &WebpageArgs, org_url: &str, logger: &Logger) -> CliResult<()> {
    let url = page_url(org_url, &args.page)?;

    if !args.no_browser {
        logger.verbose_with_context("webpage", format!("Opening {url}"));
        if let Err(e) = open::that_detached(url.as_str()) {
            logger.info(format!("Failed to open {url}: {e}"));
        }
    }

    logger.info(url.as_str());
    Ok(())
}
