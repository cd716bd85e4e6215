//! Chainable response checks for tests.
//!
//! Each check runs through [`TestRunner`] and panics with every failed
//! assertion and the response body, so a failing test shows what the
//! server actually sent.

#![allow(clippy::panic)]

use std::fmt::Write as _;

use reqres_domain::response::ResponseSpec;
use reqres_domain::testing::{Assertion, StatusExpectation, TestResults, TestSuite};
use serde_json::Value;
use reqres_infrastructure::TestRunner;

/// Assertions on a [`ResponseSpec`].
pub trait ResponseExt {
    /// Runs every assertion of `suite` and panics if any fails.
    fn assert_all(&self, suite: &TestSuite) -> &Self;

    /// Status equals `expected`.
    fn assert_status(&self, expected: u16) -> &Self;

    /// Status satisfies `expected`.
    fn assert_status_in(&self, expected: StatusExpectation) -> &Self;

    /// Status is 2xx.
    fn assert_success(&self) -> &Self;

    /// Body contains `text` (case-sensitive).
    fn assert_contains(&self, text: &str) -> &Self;

    /// Body does not contain `text`.
    fn assert_not_contains(&self, text: &str) -> &Self;

    /// Body is not empty.
    fn assert_not_empty(&self) -> &Self;

    /// Body is JSON and the value at the dotted `path` equals `expected`.
    fn assert_json(&self, path: &str, expected: impl Into<Value>) -> &Self;
}

impl ResponseExt for ResponseSpec {
    #[track_caller]
    fn assert_all(&self, suite: &TestSuite) -> &Self {
        let results = TestRunner::new().run(suite, self);
        if !results.all_passed() {
            panic!("{}", report(&results, self));
        }
        self
    }

    #[track_caller]
    fn assert_status(&self, expected: u16) -> &Self {
        assert_one(self, Assertion::status(expected))
    }

    #[track_caller]
    fn assert_status_in(&self, expected: StatusExpectation) -> &Self {
        assert_one(self, Assertion::Status(expected))
    }

    #[track_caller]
    fn assert_success(&self) -> &Self {
        self.assert_status_in(StatusExpectation::success())
    }

    #[track_caller]
    fn assert_contains(&self, text: &str) -> &Self {
        assert_one(self, Assertion::contains(text))
    }

    #[track_caller]
    fn assert_not_contains(&self, text: &str) -> &Self {
        assert_one(self, Assertion::not_contains(text))
    }

    #[track_caller]
    fn assert_not_empty(&self) -> &Self {
        assert_one(self, Assertion::BodyNotEmpty)
    }

    #[track_caller]
    fn assert_json(&self, path: &str, expected: impl Into<Value>) -> &Self {
        assert_one(self, Assertion::json_eq(path, expected))
    }
}

#[track_caller]
fn assert_one(response: &ResponseSpec, assertion: Assertion) -> &ResponseSpec {
    let name = assertion.to_string();
    response.assert_all(&TestSuite::new(name).with_assertion(assertion))
}

fn report(results: &TestResults, response: &ResponseSpec) -> String {
    let mut out = format!(
        "{}: {} of {} assertions failed (status {})",
        results.suite_name,
        results.failed(),
        results.total(),
        response.status
    );
    for failure in results.failures() {
        let _ = write!(
            out,
            "\n  - {}: {}",
            failure.assertion,
            failure.error.as_deref().unwrap_or("failed")
        );
    }
    let _ = write!(out, "\n  body: {}", response.body);
    out
}
