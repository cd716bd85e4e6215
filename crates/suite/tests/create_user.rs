//! Creating users.

use pretty_assertions::assert_eq;
use reqres_domain::ApiFlavor;
use reqres_domain::testing::StatusExpectation;
use reqres_suite::{ResponseExt, SuiteContext};

type TestResult = Result<(), Box<dyn std::error::Error>>;

async fn context() -> Result<SuiteContext, reqres_suite::SuiteError> {
    SuiteContext::with_flavor(ApiFlavor::Httpbin).await
}

#[tokio::test]
async fn test_create_user() -> TestResult {
    let ctx = context().await?;

    let response = ctx.users().create_user("John Doe", "QA Engineer").await?;

    response
        .assert_status_in(StatusExpectation::OneOf(vec![200, 201]))
        .assert_contains("John Doe")
        .assert_contains("QA Engineer");
    Ok(())
}

#[tokio::test]
async fn test_create_user_response_structure() -> TestResult {
    let ctx = context().await?;

    let response = ctx.users().create_user("Jane Smith", "DevOps Engineer").await?;

    response
        .assert_status(200)
        .assert_contains("json")
        .assert_contains("name")
        .assert_not_empty();
    Ok(())
}

#[tokio::test]
async fn test_create_user_with_special_characters() -> TestResult {
    let ctx = context().await?;

    let response = ctx
        .users()
        .create_user("John O'Brien-Smith", "Software Engineer (QA)")
        .await?;

    response.assert_success().assert_contains("O'Brien");
    let echoed = response.body_as_json().map(|json| json["json"].clone());
    assert_eq!(
        echoed.and_then(|json| json["job"].as_str().map(String::from)),
        Some("Software Engineer (QA)".to_string())
    );
    Ok(())
}

#[tokio::test]
async fn test_create_multiple_users() -> TestResult {
    let ctx = context().await?;
    let users = ctx.users();

    for (name, job) in [
        ("Alice Johnson", "Data Analyst"),
        ("Bob Wilson", "Backend Developer"),
        ("Carol White", "Frontend Developer"),
    ] {
        users
            .create_user(name, job)
            .await?
            .assert_status(200)
            .assert_contains(name);
    }
    Ok(())
}

#[tokio::test]
async fn test_create_user_with_empty_job() -> TestResult {
    let ctx = context().await?;

    let response = ctx.users().create_user("Test User", "").await?;

    response.assert_success().assert_contains("Test User");
    Ok(())
}
