//! Integration tests for assign-groups
//!
//! The user lookup and group listing run concurrently, then one PUT is
//! issued per existing group.

mod common;

use common::{error_json, group_json, user_json, TestContext};
use okta_admin::batch::result::OperationStatus;
use okta_admin::commands::assign_groups::{execute, AssignGroupsArgs};
use okta_admin::error::CliError;
use okta_admin::logging::LogLevel;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

const EMAIL: &str = "harry@hogwarts.com";
const USER_ID: &str = "00u1harry";

fn args(groups: &str) -> AssignGroupsArgs {
    AssignGroupsArgs {
        email: EMAIL.to_string(),
        groups: groups.to_string(),
    }
}

async fn mount_user(ctx: &TestContext) {
    Mock::given(method("GET"))
        .and(path(format!("/api/v1/users/{EMAIL}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(USER_ID, EMAIL)))
        .mount(&ctx.server)
        .await;
}

async fn mount_groups(ctx: &TestContext) {
    let base = ctx.server.uri();
    Mock::given(method("GET"))
        .and(path("/api/v1/groups"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            group_json(&base, "00g1tech", "Tech", Some("Engineering")),
            group_json(&base, "00g2mkt", "Marketing", None),
            group_json(&base, "00g3sales", "Sales", None),
        ])))
        .mount(&ctx.server)
        .await;
}

#[tokio::test]
async fn test_one_of_two_groups_exists() {
    let ctx = TestContext::new().await;
    mount_user(&ctx).await;
    mount_groups(&ctx).await;

    Mock::given(method("PUT"))
        .and(path(format!("/api/v1/groups/00g1tech/users/{USER_ID}")))
        .and(header("Authorization", ctx.authorization().as_str()))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let report = execute(&args("Tech, Quidditch"), &ctx.client).await.unwrap();

    let lines = ctx.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines.contains(&"Quidditch does not exist".to_string()));
    assert!(lines.contains(&"Added to Tech".to_string()));
    assert_eq!(report.success_count(), 1);
    assert_eq!(report.skipped_count(), 1);
    assert_eq!(report.failure_count(), 0);
}

#[tokio::test]
async fn test_every_existing_group_gets_one_write() {
    let ctx = TestContext::new().await;
    mount_user(&ctx).await;
    mount_groups(&ctx).await;

    for gid in ["00g1tech", "00g2mkt", "00g3sales"] {
        Mock::given(method("PUT"))
            .and(path(format!("/api/v1/groups/{gid}/users/{USER_ID}")))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&ctx.server)
            .await;
    }

    let report = execute(&args("Tech\t,    Marketing  ,\t\tSales  "), &ctx.client)
        .await
        .unwrap();

    assert_eq!(report.success_count(), 3);
    let mut lines = ctx.lines();
    lines.sort();
    assert_eq!(
        lines,
        vec!["Added to Marketing", "Added to Sales", "Added to Tech"]
    );
}

#[tokio::test]
async fn test_group_list_failure_issues_no_writes() {
    let ctx = TestContext::new().await;
    mount_user(&ctx).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/groups"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(error_json("E0000009", "Internal Server Error")),
        )
        .mount(&ctx.server)
        .await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&ctx.server)
        .await;

    let err = execute(&args("Tech"), &ctx.client).await.unwrap_err();

    assert_eq!(err.exit_code(), 1);
    assert_eq!(err.status(), Some(500));
    assert!(err.to_string().starts_with("Failed to fetch groups list"));
    assert!(ctx.lines().is_empty());
}

#[tokio::test]
async fn test_unknown_user_fails_fast() {
    let ctx = TestContext::new().await;

    Mock::given(method("GET"))
        .and(path(format!("/api/v1/users/{EMAIL}")))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(error_json("E0000007", "Not found: Resource not found: harry@hogwarts.com (User)")),
        )
        .mount(&ctx.server)
        .await;

    // Slow enough that the failed lookup has to short-circuit the join
    let base = ctx.server.uri();
    Mock::given(method("GET"))
        .and(path("/api/v1/groups"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([group_json(&base, "00g1tech", "Tech", None)]))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&ctx.server)
        .await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&ctx.server)
        .await;

    let started = std::time::Instant::now();
    let err = execute(&args("Tech"), &ctx.client).await.unwrap_err();

    assert!(started.elapsed() < Duration::from_secs(3));
    assert!(matches!(
        err,
        CliError::Context { ref source, .. } if matches!(**source, CliError::NotFound(_))
    ));
    assert!(err.to_string().starts_with("Failed to resolve user ID"));
}

#[tokio::test]
async fn test_write_failure_is_reported_not_returned() {
    let ctx = TestContext::new().await;
    mount_user(&ctx).await;
    mount_groups(&ctx).await;

    Mock::given(method("PUT"))
        .and(path(format!("/api/v1/groups/00g1tech/users/{USER_ID}")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&ctx.server)
        .await;

    Mock::given(method("PUT"))
        .and(path(format!("/api/v1/groups/00g3sales/users/{USER_ID}")))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_json(error_json("E0000006", "You do not have permission to perform the requested action")),
        )
        .expect(1)
        .mount(&ctx.server)
        .await;

    let report = execute(&args("Tech,Sales"), &ctx.client).await.unwrap();

    assert_eq!(report.success_count(), 1);
    assert_eq!(report.failure_count(), 1);
    let failed = report
        .items
        .iter()
        .find(|r| r.status == OperationStatus::Failed)
        .unwrap();
    assert_eq!(failed.target, "Sales");

    let lines = ctx.lines();
    assert!(lines.contains(&"Failed to add user to Sales: 403 Forbidden".to_string()));
    assert!(lines.contains(&"Added to Tech".to_string()));
}

#[tokio::test]
async fn test_unexpected_success_status_is_a_failure() {
    let ctx = TestContext::new().await;
    mount_user(&ctx).await;
    mount_groups(&ctx).await;

    Mock::given(method("PUT"))
        .and(path(format!("/api/v1/groups/00g2mkt/users/{USER_ID}")))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let report = execute(&args("Marketing"), &ctx.client).await.unwrap();

    assert_eq!(report.failure_count(), 1);
    assert_eq!(ctx.lines(), vec!["Failed to add user to Marketing: 200 OK"]);
}

#[tokio::test]
async fn test_no_groups_means_no_requests() {
    let ctx = TestContext::new().await;

    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&ctx.server)
        .await;

    let report = execute(&args("  \t "), &ctx.client).await.unwrap();

    assert!(report.items.is_empty());
    assert_eq!(ctx.lines(), vec!["No groups were specified, nothing to do"]);
}

#[tokio::test]
async fn test_no_requested_group_exists() {
    let ctx = TestContext::new().await;
    mount_user(&ctx).await;
    mount_groups(&ctx).await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&ctx.server)
        .await;

    let report = execute(&args("Slytherin,Hufflepuff"), &ctx.client)
        .await
        .unwrap();

    assert_eq!(report.skipped_count(), 2);
    assert_eq!(
        ctx.lines(),
        vec!["Slytherin does not exist", "Hufflepuff does not exist"]
    );
}

#[tokio::test]
async fn test_unreachable_organization_aborts() {
    let (client, sink) = common::client_for(
        &common::closed_server_uri(),
        LogLevel::Normal,
        Duration::from_secs(5),
    );

    let err = execute(&args("Tech"), &client).await.unwrap_err();

    assert!(err.is_transport());
    assert_eq!(err.exit_code(), 1);
    let message = err.to_string();
    assert!(
        message.starts_with("Failed to resolve user ID: Connection failed")
            || message.starts_with("Failed to fetch groups list: Connection failed"),
        "{message}"
    );
    assert!(sink.lines().is_empty());
}

#[tokio::test]
async fn test_write_transport_failure_is_reported_per_group() {
    let ctx = TestContext::with_timeout(Duration::from_secs(1)).await;
    mount_user(&ctx).await;
    mount_groups(&ctx).await;

    Mock::given(method("PUT"))
        .and(path(format!("/api/v1/groups/00g1tech/users/{USER_ID}")))
        .respond_with(ResponseTemplate::new(204).set_delay(Duration::from_secs(3)))
        .expect(1)
        .mount(&ctx.server)
        .await;

    Mock::given(method("PUT"))
        .and(path(format!("/api/v1/groups/00g2mkt/users/{USER_ID}")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let report = execute(&args("Tech,Marketing"), &ctx.client).await.unwrap();

    assert_eq!(report.success_count(), 1);
    assert_eq!(report.failure_count(), 1);
    assert_eq!(
        ctx.lines(),
        vec![
            "Added to Marketing",
            "Failed to add user to Tech: Network error: Request timed out",
        ]
    );
}
