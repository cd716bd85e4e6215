//! Response as seen by a test.
//!
//! Kept opaque on purpose: status, header map and body text. Callers check it
//! with substring or JSON-path assertions.

use std::collections::HashMap;
use std::time::Duration;

/// What an endpoint caller got back.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResponseSpec {
    /// Status code.
    pub status: u16,
    /// Headers by lowercase name; repeated headers are joined with `", "`.
    pub headers: HashMap<String, String>,
    /// Body decoded as lossy UTF-8.
    pub body: String,
    /// Time from send to last body byte.
    pub duration: Duration,
    /// Body length in bytes before decoding.
    pub size: usize,
}

impl ResponseSpec {
    /// Builds a response from the raw parts.
    #[must_use]
    pub fn new(
        status: u16,
        headers: HashMap<String, String>,
        body: &[u8],
        duration: Duration,
    ) -> Self {
        Self {
            status,
            headers,
            body: String::from_utf8_lossy(body).into_owned(),
            duration,
            size: body.len(),
        }
    }

    /// Case-sensitive substring check on the body.
    #[must_use]
    pub fn body_contains(&self, text: &str) -> bool {
        self.body.contains(text)
    }

    /// The body parsed as JSON, if it is JSON.
    #[must_use]
    pub fn body_as_json(&self) -> Option<serde_json::Value> {
        serde_json::from_str(&self.body).ok()
    }

    /// Whether the `Content-Type` header names a JSON media type.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case("content-type"))
            .is_some_and(|(_, ct)| ct.contains("application/json") || ct.contains("+json"))
    }
}
