//! Organization credentials

use crate::error::{CliError, CliResult};
use reqwest::Url;

/// Everything needed to authenticate against one Okta organization.
/// Built once per invocation and never mutated.
#[derive(Clone)]
pub struct Credentials {
    org_url: Url,
    api_token: String,
}

impl Credentials {
    pub fn new(org_url: &str, api_token: &str) -> CliResult<Self> {
        if org_url.trim().is_empty() {
            return Err(CliError::ClientInit("org URL cannot be empty".to_string()));
        }
        if api_token.trim().is_empty() {
            return Err(CliError::ClientInit("api token cannot be empty".to_string()));
        }

        let org_url = Url::parse(org_url.trim()).map_err(|e| {
            CliError::ClientInit(format!("Failed to parse organization url: {e}"))
        })?;
        if org_url.cannot_be_a_base() {
            return Err(CliError::ClientInit(format!(
                "Organization url '{org_url}' cannot carry API paths"
            )));
        }

        Ok(Self {
            org_url,
            api_token: api_token.trim().to_string(),
        })
    }

    /// Value of the Authorization header
    pub fn authorization(&self) -> String {
        format!("SSWS {}", self.api_token)
    }

    /// `<org-url>/<segments...>`, each segment percent-encoded
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.org_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("org_url", &self.org_url.as_str())
            .field("api_token", &crate::logging::REDACTED)
            .finish()
    }
}
