//! deactivate-user command

use super::params::{validate_email, Parameter};
use super::{resolve_user, CommandParameters};
use crate::api::ApiClient;
use crate::error::{CliResult, ResultExt};
use clap::Args;

/// Arguments for the deactivate-user command
#[derive(Args, Debug, Clone)]
pub struct DeactivateUserArgs {
    /// Email of the member to deactivate
    #[arg(long, default_value = "")]
    pub email: String,
}

impl CommandParameters for DeactivateUserArgs {
    fn parameters(&self) -> Vec<Parameter<'_>> {
        vec![Parameter::required("email", &self.email).validated_by(validate_email)]
    }
}

pub async fn execute(args: &DeactivateUserArgs, client: &ApiClient) -> CliResult<()> {
    let user = resolve_user(client, &args.email).await?;

    client
        .deactivate_user(&user.id)
        .await
        .context("Failed to deactivate member")?;

    client.logger().info(format!(
        "Successfully deactivated {} (ID: {})",
        args.email, user.id
    ));
    Ok(())
}
