//! create-user command

use super::params::{validate_email, Parameter};
use super::CommandParameters;
use crate::api::ApiClient;
use crate::error::{CliResult, ResultExt};
use crate::models::CreateUserRequest;
use clap::Args;

/// Arguments for the create-user command
#[derive(Args, Debug, Clone)]
pub struct CreateUserArgs {
    /// Email of the new member, also used as their login
    #[arg(long, default_value = "")]
    pub email: String,

    /// Team the member belongs to
    #[arg(long, default_value = "")]
    pub team: String,

    /// First name
    #[arg(long, default_value = "Default")]
    pub fname: String,

    /// Last name
    #[arg(long, default_value = "User")]
    pub lname: String,
}

impl CommandParameters for CreateUserArgs {
    fn parameters(&self) -> Vec<Parameter<'_>> {
        vec![
            Parameter::required("email", &self.email).validated_by(validate_email),
            Parameter::required("team", &self.team),
        ]
    }
}

/// Create and activate the user; Okta sends them an activation email
pub async fn execute(args: &CreateUserArgs, client: &ApiClient) -> CliResult<()> {
    let request = CreateUserRequest::new(&args.email, &args.fname, &args.lname, &args.team);

    client
        .logger()
        .verbose_with_context("users", format!("Creating user {}", args.email));
    let user = client
        .create_user(&request)
        .await
        .context("Failed to create user")?;

    client.logger().info(format!("ID: {}", user.id));
    Ok(())
}
