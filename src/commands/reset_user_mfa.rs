//! reset-user-mfa command

use super::params::{validate_email, Parameter};
use super::{resolve_user, CommandParameters};
use crate::api::ApiClient;
use crate::error::{CliResult, ResultExt};
use clap::Args;

/// Arguments for the reset-user-mfa command
#[derive(Args, Debug, Clone)]
pub struct ResetUserMfaArgs {
    /// Email of the member whose factors are reset
    #[arg(long, default_value = "")]
    pub email: String,
}

impl CommandParameters for ResetUserMfaArgs {
    fn parameters(&self) -> Vec<Parameter<'_>> {
        vec![Parameter::required("email", &self.email).validated_by(validate_email)]
    }
}

/// Reset every enrolled factor; the member enrolls again at next sign-in
pub async fn execute(args: &ResetUserMfaArgs, client: &ApiClient) -> CliResult<()> {
    let user = resolve_user(client, &args.email).await?;

    client
        .reset_factors(&user.id)
        .await
        .context("Failed to reset member's multifactors")?;

    client.logger().info(format!(
        "All multifactors for {} have been reset",
        args.email
    ));
    Ok(())
}
