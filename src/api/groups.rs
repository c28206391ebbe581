//! Group API client methods

use super::client::{expect_status, next_page, read_json, ApiClient};
use crate::error::{CliError, CliResult};
use crate::models::{Group, GroupSnapshot};
use reqwest::{Method, StatusCode};

/// A listing still pointing at a next page after this many is an error
const MAX_PAGES: usize = 100;

impl ApiClient {
    /// Every group in the organization, following `Link: rel="next"` pages
    pub async fn list_groups(&self) -> CliResult<GroupSnapshot> {
        let mut groups: Vec<Group> = Vec::new();
        let mut next = Some(self.api_url(&["groups"]));
        let mut pages = 0;

        while let Some(url) = next.take() {
            let response = self.send(self.request(Method::GET, url)).await?;
            let response = expect_status(response, StatusCode::OK).await?;
            next = next_page(&response);

            let page: Vec<Group> = read_json(self.logger(), response).await?;
            groups.extend(page);

            pages += 1;
            if pages >= MAX_PAGES && next.is_some() {
                return Err(CliError::InvalidResponse(format!(
                    "group listing exceeded {MAX_PAGES} pages"
                )));
            }
        }

        Ok(GroupSnapshot::new(groups))
    }

    /// `PUT /api/v1/groups/{group_id}/users/{user_id}`, answered with 204
    pub async fn add_user_to_group(&self, group_id: &str, user_id: &str) -> CliResult<()> {
        let url = self.api_url(&["groups", group_id, "users", user_id]);
        let response = self.send(self.request(Method::PUT, url)).await?;
        expect_status(response, StatusCode::NO_CONTENT).await?;
        Ok(())
    }
}
