//! User API client methods

use super::client::{api_error, expect_status, read_json, ApiClient};
use crate::error::{CliError, CliResult};
use crate::models::{CreateUserRequest, User};
use reqwest::{Method, StatusCode};

impl ApiClient {
    /// Fetch the user whose login or email is `email`
    pub async fn get_user_by_email(&self, email: &str) -> CliResult<User> {
        let url = self.api_url(&["users", email]);
        let response = self.send(self.request(Method::GET, url)).await?;

        match response.status() {
            StatusCode::OK => read_json(self.logger(), response).await,
            StatusCode::NOT_FOUND => Err(CliError::NotFound(format!("User not found: {email}"))),
            _ => Err(api_error(response).await),
        }
    }

    /// Create and activate a user; Okta emails them an activation link
    pub async fn create_user(&self, request: &CreateUserRequest) -> CliResult<User> {
        let mut url = self.api_url(&["users"]);
        url.query_pairs_mut().append_pair("activate", "true");

        let response = self
            .send(self.request_json(Method::POST, url, request))
            .await?;
        let response = expect_status(response, StatusCode::OK).await?;
        read_json(self.logger(), response).await
    }

    pub async fn deactivate_user(&self, user_id: &str) -> CliResult<()> {
        self.lifecycle(user_id, "deactivate", &[]).await
    }

    /// Okta emails the user a reset link
    pub async fn reset_password(&self, user_id: &str) -> CliResult<()> {
        self.lifecycle(user_id, "reset_password", &[("sendEmail", "true")])
            .await
    }

    /// Reset every enrolled factor; the user re-enrolls at next sign-in
    pub async fn reset_factors(&self, user_id: &str) -> CliResult<()> {
        self.lifecycle(user_id, "reset_factors", &[]).await
    }

    async fn lifecycle(&self, user_id: &str, operation: &str, query: &[(&str, &str)]) -> CliResult<()> {
        let mut url = self.api_url(&["users", user_id, "lifecycle", operation]);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        let response = self.send(self.request(Method::POST, url)).await?;
        let response = expect_status(response, StatusCode::OK).await?;
        let body = response.text().await?;
        self.logger().trace_body(&body);
        Ok(())
    }
}
