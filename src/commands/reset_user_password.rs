//! reset-user-password command

use super::params::{validate_email, Parameter};
use super::{resolve_user, CommandParameters};
use crate::api::ApiClient;
use crate::error::{CliResult, ResultExt};
use clap::Args;

/// Arguments for the reset-user-password command
#[derive(Args, Debug, Clone)]
pub struct ResetUserPasswordArgs {
    /// Email of the member whose password is reset
    #[arg(long, default_value = "")]
    pub email: String,
}

impl CommandParameters for ResetUserPasswordArgs {
    fn parameters(&self) -> Vec<Parameter<'_>> {
        vec![Parameter::required("email", &self.email).validated_by(validate_email)]
    }
}

/// Okta emails the member a one-time reset link
pub async fn execute(args: &ResetUserPasswordArgs, client: &ApiClient) -> CliResult<()> {
    let user = resolve_user(client, &args.email).await?;

    client
        .reset_password(&user.id)
        .await
        .context("Failed to reset member's password")?;

    client
        .logger()
        .info(format!("Reset link sent to {}", args.email));
    Ok(())
}
