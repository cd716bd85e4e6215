//! Registration requests.

use reqres_domain::{ApiFlavor, Credentials};
use reqres_suite::{ResponseExt, SuiteContext};

const TEST_EMAIL: &str = "sydney@fife";
const TEST_PASSWORD: &str = "pistol";

type TestResult = Result<(), Box<dyn std::error::Error>>;

async fn context() -> Result<SuiteContext, reqres_suite::SuiteError> {
    SuiteContext::with_flavor(ApiFlavor::Httpbin).await
}

#[tokio::test]
async fn test_register_with_valid_data() -> TestResult {
    let ctx = context().await?;

    let response = ctx
        .register()
        .register(&Credentials::new(TEST_EMAIL, TEST_PASSWORD))
        .await?;

    response
        .assert_status(200)
        .assert_contains("email")
        .assert_contains("password");
    Ok(())
}

#[tokio::test]
async fn test_register_without_password() -> TestResult {
    let ctx = context().await?;

    let response = ctx.register().register(&Credentials::email_only(TEST_EMAIL)).await?;

    response.assert_status(200).assert_contains("email");
    Ok(())
}

#[tokio::test]
async fn test_register_with_empty_data() -> TestResult {
    let ctx = context().await?;

    let response = ctx.register().register(&Credentials::empty()).await?;

    response.assert_status(200).assert_contains("json");
    Ok(())
}

#[tokio::test]
async fn test_register_response_structure() -> TestResult {
    let ctx = context().await?;

    let response = ctx
        .register()
        .register(&Credentials::new(TEST_EMAIL, TEST_PASSWORD))
        .await?;

    response.assert_status(200).assert_contains("json");
    Ok(())
}
