//! okta-admin - command-line administration for an Okta organization
//!
//! Subcommands create, deactivate and reset members, list groups and
//! assign members to groups, and open admin console pages.

use clap::error::ErrorKind;
use okta_admin::cli::{self, Cli};
use okta_admin::config::{ConfigPaths, Settings};
use okta_admin::error::{CliError, CliResult};
use okta_admin::logging::{LogConfig, Logger};

#[tokio::main]
async fn main() {
    let cli = match cli::try_parse_from(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = e.print();
                std::process::exit(0);
            }
            _ => {
                let err = CliError::from(e);
                err.print();
                std::process::exit(err.exit_code());
            }
        },
    };

    let result = run(cli).await;

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            e.print();
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let log_config = LogConfig::from_args_and_env(
        cli.global.verbose,
        cli.global.debug,
        cli.global.trace,
        cli.global.log_file.clone(),
    );
    let logger = Logger::new(log_config)?;

    let settings = Settings::load(&ConfigPaths::new()?)?;
    let result = cli::run(cli, &settings, &logger).await;

    logger.flush();
    result
}
