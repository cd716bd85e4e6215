//! Shared request configuration.
//!
//! A `RequestConfig` bundles the default headers, base URI/path and logging
//! options that every endpoint call starts from. It is assembled once per
//! fixture through [`RequestConfigBuilder`] and never mutated afterwards.

use crate::request::{Header, Headers};

/// JSON media type used for both `Content-Type` and `Accept`.
pub const APPLICATION_JSON: &str = "application/json";

/// Which parts of an exchange get logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogOptions {
    /// Log outgoing requests.
    pub requests: bool,
    /// Log incoming responses.
    pub responses: bool,
}

impl LogOptions {
    /// Logs both directions.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            requests: true,
            responses: true,
        }
    }

    /// Logs nothing.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            requests: false,
            responses: false,
        }
    }
}

/// Immutable request configuration shared by the endpoint callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestConfig {
    base_uri: String,
    base_path: String,
    headers: Headers,
    log: LogOptions,
}

impl RequestConfig {
    /// Starts a builder for the given base URI.
    #[must_use]
    pub fn builder(base_uri: impl Into<String>) -> RequestConfigBuilder {
        RequestConfigBuilder::new(base_uri)
    }

    /// JSON content type and accept headers, both log hooks, empty base path.
    #[must_use]
    pub fn standard(base_uri: impl Into<String>) -> Self {
        Self::builder(base_uri)
            .content_type(APPLICATION_JSON)
            .accept(APPLICATION_JSON)
            .logging(true)
            .build()
    }

    /// Same as [`RequestConfig::standard`] plus a bearer token.
    ///
    /// An empty token leaves the `Authorization` header out.
    #[must_use]
    pub fn with_auth(base_uri: impl Into<String>, token: &str) -> Self {
        Self::builder(base_uri)
            .content_type(APPLICATION_JSON)
            .accept(APPLICATION_JSON)
            .bearer_token(token)
            .logging(true)
            .build()
    }

    /// Returns the base URI.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path prefixed to every endpoint path.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers.
    #[must_use]
    pub const fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Returns the logging options.
    #[must_use]
    pub const fn log(&self) -> LogOptions {
        self.log
    }

    /// The same configuration with both log hooks set to `enabled`.
    #[must_use]
    pub const fn with_logging(mut self, enabled: bool) -> Self {
        self.log = LogOptions {
            requests: enabled,
            responses: enabled,
        };
        self
    }

    /// Joins base URI, base path and `path` with single slashes.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        let mut url = self.base_uri.trim_end_matches('/').to_string();
        for segment in [self.base_path.as_str(), path] {
            let segment = segment.trim_matches('/');
            if !segment.is_empty() {
                url.push('/');
                url.push_str(segment);
            }
        }
        url
    }
}

/// Builder for [`RequestConfig`]. No validation happens here; absent
/// options simply leave the corresponding header out.
#[derive(Debug, Clone)]
pub struct RequestConfigBuilder {
    base_uri: String,
    base_path: String,
    headers: Headers,
    log: LogOptions,
}

impl RequestConfigBuilder {
    fn new(base_uri: impl Into<String>) -> Self {
        Self {
            base_uri: base_uri.into(),
            base_path: String::new(),
            headers: Headers::new(),
            log: LogOptions::none(),
        }
    }

    /// Sets the `Content-Type` header.
    #[must_use]
    pub fn content_type(self, value: impl Into<String>) -> Self {
        self.header("Content-Type", value)
    }

    /// Sets the `Accept` header.
    #[must_use]
    pub fn accept(self, value: impl Into<String>) -> Self {
        self.header("Accept", value)
    }

    /// Adds `Authorization: Bearer <token>` unless the token is blank.
    #[must_use]
    pub fn bearer_token(self, token: &str) -> Self {
        let token = token.trim();
        if token.is_empty() {
            self
        } else {
            self.header("Authorization", format!("Bearer {token}"))
        }
    }

    /// Sets an arbitrary default header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.set(Header::new(name, value));
        self
    }

    /// Sets the base path.
    #[must_use]
    pub fn base_path(mut self, path: impl Into<String>) -> Self {
        self.base_path = path.into();
        self
    }

    /// Turns both log hooks on or off.
    #[must_use]
    pub const fn logging(mut self, enabled: bool) -> Self {
        self.log = LogOptions {
            requests: enabled,
            responses: enabled,
        };
        self
    }

    /// Turns the request log hook on or off.
    #[must_use]
    pub const fn log_requests(mut self, enabled: bool) -> Self {
        self.log.requests = enabled;
        self
    }

    /// Turns the response log hook on or off.
    #[must_use]
    pub const fn log_responses(mut self, enabled: bool) -> Self {
        self.log.responses = enabled;
        self
    }

    /// Finishes the configuration.
    #[must_use]
    pub fn build(self) -> RequestConfig {
        RequestConfig {
            base_uri: self.base_uri,
            base_path: self.base_path,
            headers: self.headers,
            log: self.log,
        }
    }
}
