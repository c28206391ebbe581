//! Command-line surface: the clap tree, argument normalization and dispatch

use crate::api::ApiClient;
use crate::commands::params::{validate_parameters, Parameter};
use crate::commands::{self, CommandParameters, GlobalOptions};
use crate::config::{Settings, API_TOKEN_ENV, ORG_URL_ENV};
use crate::error::CliResult;
use crate::logging::Logger;
use clap::{Args, Command, CommandFactory, FromArgMatches, Parser, Subcommand};
use std::collections::HashSet;
use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

/// Appended to the help of every subcommand
pub const GLOBAL_OPTIONS_HELP: &str = "\
Global Options:

  -org-url    The URL of your Okta organization, for example
              https://foo.okta.com. Can also be set with the
              OKTA_ORG_URL environment variable.
  -api-token  Okta API token. Can also be set with the
              OKTA_API_TOKEN environment variable. Not needed
              by the webpage command.";

/// Okta Admin - manage members and groups of an Okta organization
#[derive(Parser, Debug)]
#[command(name = "okta-admin")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options accepted before or after any subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// URL of the Okta organization
    #[arg(long, global = true, env = ORG_URL_ENV, value_name = "URL")]
    pub org_url: Option<String>,

    /// Okta API token
    #[arg(long, global = true, env = API_TOKEN_ENV, hide_env_values = true, value_name = "TOKEN")]
    pub api_token: Option<String>,

    /// Show progress messages
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Show HTTP requests and responses
    #[arg(long, global = true)]
    pub debug: bool,

    /// Show response bodies, with secrets redacted
    #[arg(long, global = true)]
    pub trace: bool,

    /// Also write log entries to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Create a new member in the organization
    CreateUser(commands::create_user::CreateUserArgs),

    /// Deactivate a member of the organization
    DeactivateUser(commands::deactivate_user::DeactivateUserArgs),

    /// Send a member a password reset link
    ResetUserPassword(commands::reset_user_password::ResetUserPasswordArgs),

    /// Reset all multifactors enrolled by a member
    ResetUserMfa(commands::reset_user_mfa::ResetUserMfaArgs),

    /// List groups in the organization
    ListGroups(commands::list_groups::ListGroupsArgs),

    /// Add a member to groups
    AssignGroups(commands::assign_groups::AssignGroupsArgs),

    /// Open a specific webpage of the organization
    Webpage(commands::webpage::WebpageArgs),
}

impl Commands {
    fn as_parameters(&self) -> &dyn CommandParameters {
        match self {
            Commands::CreateUser(a) => a,
            Commands::DeactivateUser(a) => a,
            Commands::ResetUserPassword(a) => a,
            Commands::ResetUserMfa(a) => a,
            Commands::ListGroups(a) => a,
            Commands::AssignGroups(a) => a,
            Commands::Webpage(a) => a,
        }
    }
}

impl CommandParameters for Commands {
    fn parameters(&self) -> Vec<Parameter<'_>> {
        self.as_parameters().parameters()
    }

    fn needs_api_token(&self) -> bool {
        self.as_parameters().needs_api_token()
    }
}

/// The command tree with `help` appended to every subcommand's help
pub fn command_with_global_help(help: &str) -> Command {
    let mut cmd = Cli::command();
    let names: Vec<String> = cmd
        .get_subcommands()
        .map(|s| s.get_name().to_string())
        .collect();
    for name in names {
        let help = help.to_string();
        cmd = cmd.mut_subcommand(name, |sub| sub.after_help(help));
    }
    cmd
}

/// Long option names anywhere in the tree
fn long_option_names(cmd: &Command) -> HashSet<String> {
    let mut names: HashSet<String> = ["help", "version"].iter().map(|s| s.to_string()).collect();
    collect_long_names(cmd, &mut names);
    names
}

fn collect_long_names(cmd: &Command, names: &mut HashSet<String>) {
    names.extend(cmd.get_arguments().filter_map(|a| a.get_long()).map(String::from));
    for sub in cmd.get_subcommands() {
        collect_long_names(sub, names);
    }
}

/// Rewrite `-email` and `-email=x` as `--email` when `email` is a known
/// long option. Everything after `--` is left alone.
pub fn normalize_args<I, T>(args: I, cmd: &Command) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let known = long_option_names(cmd);
    let mut passthrough = false;

    args.into_iter()
        .map(Into::into)
        .enumerate()
        .map(|(i, arg)| {
            if i == 0 || passthrough {
                return arg;
            }
            if arg == "--" {
                passthrough = true;
                return arg;
            }
            match arg.to_str().and_then(|text| single_dash_long(text, &known)) {
                Some(normalized) => OsString::from(normalized),
                None => arg,
            }
        })
        .collect()
}

fn single_dash_long(arg: &str, known: &HashSet<String>) -> Option<String> {
    let rest = arg.strip_prefix('-')?;
    if rest.starts_with('-') {
        return None;
    }
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    if name.len() < 2 || !known.contains(name) {
        return None;
    }
    Some(format!("-{arg}"))
}

/// Parse an argument vector, program name first
pub fn try_parse_from<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let cmd = command_with_global_help(GLOBAL_OPTIONS_HELP);
    let args = normalize_args(args, &cmd);
    let matches = cmd.try_get_matches_from(args)?;
    Cli::from_arg_matches(&matches)
}

/// Validate parameters, build the client and run the chosen command
pub async fn run(cli: Cli, settings: &Settings, logger: &Logger) -> CliResult<()> {
    let globals = GlobalOptions::resolve(
        cli.global.org_url.as_deref(),
        cli.global.api_token.as_deref(),
        settings,
    );

    let mut params = cli.command.parameters();
    params.extend(globals.parameters(cli.command.needs_api_token()));
    validate_parameters(&params)?;

    if let Commands::Webpage(args) = &cli.command {
        return commands::webpage::execute(args, &globals.org_url, logger);
    }

    let client = ApiClient::with_timeout(
        globals.credentials()?,
        logger.clone(),
        Duration::from_secs(settings.timeout_secs),
    )?;

    match &cli.command {
        Commands::CreateUser(args) => commands::create_user::execute(args, &client).await,
        Commands::DeactivateUser(args) => commands::deactivate_user::execute(args, &client).await,
        Commands::ResetUserPassword(args) => {
            commands::reset_user_password::execute(args, &client).await
        }
        Commands::ResetUserMfa(args) => commands::reset_user_mfa::execute(args, &client).await,
        Commands::ListGroups(args) => commands::list_groups::execute(args, &client).await,
        Commands::AssignGroups(args) => commands::assign_groups::execute(args, &client)
            .await
            .map(|_| ()),
        Commands::Webpage(args) => commands::webpage::execute(args, &globals.org_url, logger),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalized(args: &[&str]) -> Vec<String> {
        let cmd = command_with_global_help(GLOBAL_OPTIONS_HELP);
        normalize_args(args.iter().copied(), &cmd)
            .into_iter()
            .map(|a| a.into_string().unwrap())
            .collect()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_single_dash_long_options_normalized() {
        assert_eq!(
            normalized(&["okta-admin", "assign-groups", "-email", "h@x.com", "-groups=Tech"]),
            vec!["okta-admin", "assign-groups", "--email", "h@x.com", "--groups=Tech"]
        );
    }

    #[test]
    fn test_unknown_and_short_flags_untouched() {
        assert_eq!(
            normalized(&["okta-admin", "-h", "-bogus", "--email", "-"]),
            vec!["okta-admin", "-h", "-bogus", "--email", "-"]
        );
    }

    #[test]
    fn test_passthrough_after_double_dash() {
        assert_eq!(
            normalized(&["okta-admin", "webpage", "--", "-email"]),
            vec!["okta-admin", "webpage", "--", "-email"]
        );
    }

    #[test]
    fn test_known_long_names_include_globals_and_locals() {
        let names = long_option_names(&Cli::command());
        for name in ["org-url", "api-token", "email", "team", "fname", "groups", "no-browser"] {
            assert!(names.contains(name), "{name}");
        }
    }
}
