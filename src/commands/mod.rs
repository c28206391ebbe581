//! CLI command implementations

pub mod assign_groups;
pub mod create_user;
pub mod deactivate_user;
pub mod list_groups;
pub mod params;
pub mod reset_user_mfa;
pub mod reset_user_password;
pub mod webpage;

use crate::api::ApiClient;
use crate::config::Settings;
use crate::error::{CliResult, ResultExt};
use crate::models::{Credentials, User};
use params::{coalesce, validate_url, Parameter};

/// Parameters a command checks before it does any work
pub trait CommandParameters {
    /// Local parameters, checked before the global ones
    fn parameters(&self) -> Vec<Parameter<'_>>;

    fn needs_api_token(&self) -> bool {
        true
    }
}

/// Organization URL and API token after flags, environment and the
/// config file have been merged
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub org_url: String,
    pub api_token: String,
}

impl GlobalOptions {
    /// Flags and environment arrive merged from clap; the config file only
    /// fills in the org URL
    pub fn resolve(org_url: Option<&str>, api_token: Option<&str>, settings: &Settings) -> Self {
        let org_url = coalesce(&[
            org_url.unwrap_or_default(),
            settings.org_url.as_deref().unwrap_or_default(),
        ]);

        Self {
            org_url: org_url.to_string(),
            api_token: api_token.unwrap_or_default().to_string(),
        }
    }

    pub fn parameters(&self, needs_api_token: bool) -> Vec<Parameter<'_>> {
        let mut params = vec![Parameter::required("org-url", &self.org_url).validated_by(validate_url)];
        if needs_api_token {
            params.push(Parameter::required("api-token", &self.api_token));
        }
        params
    }

    pub fn credentials(&self) -> CliResult<Credentials> {
        Credentials::new(&self.org_url, &self.api_token)
    }
}

/// Look up the user a single-user command acts on
pub(crate) async fn resolve_user(client: &ApiClient, email: &str) -> CliResult<User> {
    client
        .logger()
        .verbose_with_context("users", format!("Resolving user {email}"));
    client
        .get_user_by_email(email)
        .await
        .context("Failed to resolve user ID")
}
