//! Shared fixtures for integration tests
//!
//! A wiremock server stands in for the Okta organization. Commands run
//! against an `ApiClient` pointed at it and log into a `MemoryWriter`.

#![allow(dead_code)]

use okta_admin::api::ApiClient;
use okta_admin::logging::{LogConfig, LogLevel, Logger, MemoryWriter};
use okta_admin::models::Credentials;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use wiremock::MockServer;

pub const API_TOKEN: &str = "00aBcD-test-token";

pub struct TestContext {
    pub server: MockServer,
    pub client: ApiClient,
    pub sink: Arc<MemoryWriter>,
}

impl TestContext {
    pub async fn new() -> Self {
        Self::build(LogLevel::Normal, Duration::from_secs(5)).await
    }

    pub async fn with_level(level: LogLevel) -> Self {
        Self::build(level, Duration::from_secs(5)).await
    }

    /// Requests give up after `timeout`
    pub async fn with_timeout(timeout: Duration) -> Self {
        Self::build(LogLevel::Normal, timeout).await
    }

    async fn build(level: LogLevel, timeout: Duration) -> Self {
        let server = MockServer::start().await;
        let (client, sink) = client_for(&server.uri(), level, timeout);

        Self {
            server,
            client,
            sink,
        }
    }

    /// Result lines the command printed
    pub fn lines(&self) -> Vec<String> {
        self.sink.lines()
    }

    pub fn authorization(&self) -> String {
        format!("SSWS {API_TOKEN}")
    }
}

/// A client for `base`, logging into a fresh memory sink
pub fn client_for(base: &str, level: LogLevel, timeout: Duration) -> (ApiClient, Arc<MemoryWriter>) {
    let sink = Arc::new(MemoryWriter::new());
    let config = LogConfig {
        level,
        ..LogConfig::default()
    };
    let logger = Logger::with_output(config, sink.clone());
    let credentials = Credentials::new(base, API_TOKEN).unwrap();
    let client = ApiClient::with_timeout(credentials, logger, timeout).unwrap();
    (client, sink)
}

/// Base URL of a port nothing listens on any more
pub fn closed_server_uri() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn user_json(id: &str, email: &str) -> Value {
    json!({
        "id": id,
        "status": "ACTIVE",
        "created": "2024-03-01T09:15:00.000Z",
        "profile": {
            "firstName": "Harry",
            "lastName": "Potter",
            "email": email,
            "login": email,
            "team": "Gryffindor"
        },
        "_links": {
            "self": {"href": format!("https://foo.okta.com/api/v1/users/{id}")}
        }
    })
}

pub fn group_json(base: &str, id: &str, name: &str, description: Option<&str>) -> Value {
    json!({
        "id": id,
        "type": "OKTA_GROUP",
        "profile": {"name": name, "description": description},
        "_links": {
            "logo": [{"name": "medium", "href": "https://op1static.oktacdn.com/assets/img/logos/groups/okta-medium.png", "type": "image/png"}],
            "users": {"href": format!("{base}/api/v1/groups/{id}/users")},
            "apps": {"href": format!("{base}/api/v1/groups/{id}/apps")}
        }
    })
}

pub fn error_json(code: &str, summary: &str) -> Value {
    json!({
        "errorCode": code,
        "errorSummary": summary,
        "errorLink": code,
        "errorId": "oaeTestErrorId",
        "errorCauses": []
    })
}
