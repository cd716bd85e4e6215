//! A fully resolved request.

use url::Url;

use super::{Headers, HttpMethod, QueryParams, RequestBody};
use crate::error::{DomainError, DomainResult};

/// Default total timeout applied to a request, in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 15_000;

/// A single fully-resolved HTTP call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    /// Human-readable operation name, used in log events
    pub name: String,
    /// HTTP method
    pub method: HttpMethod,
    /// Absolute target URL without the query string
    pub url: String,
    /// HTTP headers
    pub headers: Headers,
    /// Query parameters appended to the URL
    pub query: QueryParams,
    /// Request body
    pub body: RequestBody,
    /// Total timeout in milliseconds
    pub timeout_ms: u64,
}

impl RequestSpec {
    /// Creates a request for the given method and URL.
    #[must_use]
    pub fn new(name: impl Into<String>, method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            method,
            url: url.into(),
            headers: Headers::new(),
            query: QueryParams::new(),
            body: RequestBody::none(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Returns the URL with the query parameters form-urlencoded onto it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidUrl` if the URL does not parse.
    pub fn full_url(&self) -> DomainResult<Url> {
        let mut url =
            Url::parse(&self.url).map_err(|e| DomainError::InvalidUrl(format!("{e}: {}", self.url)))?;
        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for param in self.query.iter() {
                pairs.append_pair(&param.key, &param.value);
            }
        }
        Ok(url)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_get_request() {
        let req = RequestSpec::new("list users", HttpMethod::Get, "https://httpbin.org/get");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.timeout_ms, DEFAULT_TIMEOUT_MS);
        assert!(req.body.is_empty());
    }

    #[test]
    fn test_full_url_appends_query() {
        let mut req = RequestSpec::new("by id", HttpMethod::Get, "https://httpbin.org/get");
        req.query = QueryParams::new().with("id", 1).with("q", "a b&c");

        assert_eq!(
            req.full_url().unwrap().as_str(),
            "https://httpbin.org/get?id=1&q=a+b%26c"
        );
    }

    #[test]
    fn test_full_url_without_query() {
        let req = RequestSpec::new("plain", HttpMethod::Get, "https://httpbin.org/get");
        assert_eq!(req.full_url().unwrap().as_str(), "https://httpbin.org/get");
    }

    #[test]
    fn test_full_url_invalid() {
        let req = RequestSpec::new("broken", HttpMethod::Get, "not a url");
        assert!(matches!(req.full_url(), Err(DomainError::InvalidUrl(_))));
    }
}
