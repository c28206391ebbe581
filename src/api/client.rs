//! HTTP client wrapper for the Okta API

use crate::config::DEFAULT_TIMEOUT_SECS;
use crate::error::{CliError, CliResult};
use crate::logging::Logger;
use crate::models::Credentials;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, LINK};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// API client for one organization.
///
/// Cloning is cheap: clones share the connection pool and credentials,
/// so each concurrent request can own its own handle.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    credentials: Arc<Credentials>,
    logger: Logger,
}

impl ApiClient {
    pub fn new(credentials: Credentials, logger: Logger) -> CliResult<Self> {
        Self::with_timeout(credentials, logger, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(
        credentials: Credentials,
        logger: Logger,
        timeout: Duration,
    ) -> CliResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("okta-admin/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CliError::ClientInit(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            credentials: Arc::new(credentials),
            logger,
        })
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// `<org-url>/api/v1/<segments...>`
    pub(crate) fn api_url(&self, segments: &[&str]) -> Url {
        let mut full = Vec::with_capacity(segments.len() + 2);
        full.extend_from_slice(&["api", "v1"]);
        full.extend_from_slice(segments);
        self.credentials.endpoint(&full)
    }

    pub(crate) fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.client
            .request(method, url)
            .header(AUTHORIZATION, self.credentials.authorization())
            .header(ACCEPT, "application/json")
    }

    /// A request with a JSON body
    pub(crate) fn request_json<T: serde::Serialize>(
        &self,
        method: Method,
        url: Url,
        body: &T,
    ) -> RequestBuilder {
        self.request(method, url)
            .header(CONTENT_TYPE, "application/json")
            .json(body)
    }

    /// Send a request, logging method, URL, status and timing at debug level
    pub(crate) async fn send(&self, request: RequestBuilder) -> CliResult<Response> {
        let request = request.build()?;
        let method = request.method().to_string();
        let url = request.url().to_string();

        self.logger.debug_request(&method, &url);
        let started = Instant::now();

        let response = self.client.execute(request).await?;

        let status = response.status();
        self.logger.debug_response(
            status.as_u16(),
            status.canonical_reason().unwrap_or(""),
            started.elapsed().as_millis() as u64,
        );

        Ok(response)
    }
}

/// Pass the response through when it carries `expected`, otherwise turn it
/// into an API error with the response body as message
pub(crate) async fn expect_status(response: Response, expected: StatusCode) -> CliResult<Response> {
    if response.status() == expected {
        return Ok(response);
    }
    Err(api_error(response).await)
}

pub(crate) async fn api_error(response: Response) -> CliError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    CliError::Api {
        status: status.as_u16(),
        message: error_summary(status, &body),
    }
}

/// Okta error bodies carry `errorSummary`; fall back to the status line
fn error_summary(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("errorSummary").and_then(|s| s.as_str()).map(String::from))
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .map(|reason| format!("{} {}", status.as_u16(), reason))
                .unwrap_or_else(|| status.as_u16().to_string())
        })
}

/// Read the body as JSON, tracing it first
pub(crate) async fn read_json<T: DeserializeOwned>(
    logger: &Logger,
    response: Response,
) -> CliResult<T> {
    let body = response.text().await?;
    logger.trace_body(&body);
    serde_json::from_str(&body).map_err(Into::into)
}

/// Target of the `rel="next"` entry of a `Link` header
pub(crate) fn next_page(response: &Response) -> Option<Url> {
    response
        .headers()
        .get_all(LINK)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(parse_next_link)
        .and_then(|href| Url::parse(&href).ok())
}

fn parse_next_link(header: &str) -> Option<String> {
    header.split(',').find_map(|part| {
        let mut pieces = part.split(';');
        let target = pieces.next()?.trim();
        let is_next = pieces.any(|p| {
            let p = p.trim();
            p == r#"rel="next""# || p == "rel=next"
        });
        if !is_next {
            return None;
        }
        target
            .strip_prefix('<')
            .and_then(|t| t.strip_suffix('>'))
            .map(String::from)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogConfig;

    fn client() -> ApiClient {
        let credentials = Credentials::new("https://foo.okta.com/", "123abc").unwrap();
        let logger = Logger::with_output(
            LogConfig::default(),
            Arc::new(crate::logging::MemoryWriter::new()),
        );
        ApiClient::new(credentials, logger).unwrap()
    }

    #[test]
    fn test_api_url() {
        let url = client().api_url(&["groups", "00g1", "users", "00u1"]);
        assert_eq!(
            url.as_str(),
            "https://foo.okta.com/api/v1/groups/00g1/users/00u1"
        );
    }

    #[test]
    fn test_request_carries_ssws_token() {
        let c = client();
        let request = c
            .request(Method::GET, c.api_url(&["groups"]))
            .build()
            .unwrap();
        assert_eq!(request.headers()[AUTHORIZATION], "SSWS 123abc");
        assert_eq!(request.headers()[ACCEPT], "application/json");
    }

    #[test]
    fn test_parse_next_link() {
        let header = r#"<https://foo.okta.com/api/v1/groups?limit=200>; rel="self", <https://foo.okta.com/api/v1/groups?after=00g9&limit=200>; rel="next""#;
        assert_eq!(
            parse_next_link(header).as_deref(),
            Some("https://foo.okta.com/api/v1/groups?after=00g9&limit=200")
        );
    }

    #[test]
    fn test_parse_next_link_absent() {
        let header = r#"<https://foo.okta.com/api/v1/groups?limit=200>; rel="self""#;
        assert!(parse_next_link(header).is_none());
    }

    #[test]
    fn test_error_summary_prefers_okta_body() {
        let body = r#"{"errorCode":"E0000007","errorSummary":"Not found: Resource not found: nobody@x.com (User)"}"#;
        assert_eq!(
            error_summary(StatusCode::NOT_FOUND, body),
            "Not found: Resource not found: nobody@x.com (User)"
        );
        assert_eq!(
            error_summary(StatusCode::FORBIDDEN, "<html>"),
            "403 Forbidden"
        );
    }
}
