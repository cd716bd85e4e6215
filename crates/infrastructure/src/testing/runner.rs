//! Evaluates assertions against a response.

use reqres_domain::response::ResponseSpec;
use reqres_domain::testing::{Assertion, AssertionResult, TestResults, TestSuite};
use serde_json::Value;

/// Longest body excerpt quoted in a failure message, in characters.
const PREVIEW_CHARS: usize = 200;

/// Runs [`TestSuite`]s against responses.
#[derive(Debug, Default, Clone, Copy)]
pub struct TestRunner;

impl TestRunner {
    /// A runner.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Runs every assertion of `suite`, or up to the first failure when the
    /// suite asks for that.
    #[must_use]
    pub fn run(&self, suite: &TestSuite, response: &ResponseSpec) -> TestResults {
        let mut results = Vec::with_capacity(suite.assertions.len());
        for assertion in &suite.assertions {
            let result = Self::check(assertion, response);
            let stop = suite.stop_on_failure && !result.passed();
            results.push(result);
            if stop {
                break;
            }
        }
        TestResults::new(&suite.name, results)
    }

    /// Evaluates one assertion.
    #[must_use]
    pub fn check(assertion: &Assertion, response: &ResponseSpec) -> AssertionResult {
        let failure = match assertion {
            Assertion::Status(expected) => (!expected.matches(response.status))
                .then(|| format!("expected status {expected}, got {}", response.status)),
            Assertion::BodyContains(text) => (!response.body_contains(text)).then(|| {
                format!("body does not contain '{text}': {}", preview(&response.body))
            }),
            Assertion::BodyNotContains(text) => response
                .body_contains(text)
                .then(|| format!("body contains '{text}': {}", preview(&response.body))),
            Assertion::BodyNotEmpty => response.body.is_empty().then(|| "body is empty".to_string()),
            Assertion::JsonPath { path, expected } => json_path_failure(response, path, expected.as_ref()),
        };

        match failure {
            Some(error) => AssertionResult::fail(assertion.clone(), error),
            None => AssertionResult::pass(assertion.clone()),
        }
    }
}

fn json_path_failure(response: &ResponseSpec, path: &str, expected: Option<&Value>) -> Option<String> {
    let json: Value = match serde_json::from_str(&response.body) {
        Ok(json) => json,
        Err(e) => return Some(format!("body is not JSON ({e}): {}", preview(&response.body))),
    };
    match (lookup(&json, path), expected) {
        (None, _) => Some(format!("nothing at '{path}'")),
        (Some(actual), Some(expected)) if actual != expected => {
            Some(format!("expected {expected} at '{path}', got {actual}"))
        }
        _ => None,
    }
}

/// Walks a dotted path; a leading `$` or `$.` is ignored and numeric
/// segments index arrays.
fn lookup<'a>(json: &'a Value, path: &str) -> Option<&'a Value> {
    let path = path.trim().trim_start_matches('$').trim_start_matches('.');
    if path.is_empty() {
        return Some(json);
    }
    path.split('.').try_fold(json, |node, segment| match node {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

fn preview(body: &str) -> String {
    match body.char_indices().nth(PREVIEW_CHARS) {
        Some((end, _)) => format!("{}...", &body[..end]),
        None => body.to_string(),
    }
}
