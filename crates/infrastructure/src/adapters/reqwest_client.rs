//! HTTP Client implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port using the reqwest library.
//! It performs one network call per request and never retries.

use std::collections::HashMap;
use std::error::Error as _;
use std::time::{Duration, Instant};

use reqres_application::ports::{HttpClient, HttpClientError, HttpFuture};
use reqres_domain::request::{HttpMethod, RequestBody, RequestSpec};
use reqres_domain::response::ResponseSpec;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method};

use crate::settings::Timeouts;

const MAX_REDIRECTS: usize = 10;
const USER_AGENT: &str = concat!("reqres-suite/", env!("CARGO_PKG_VERSION"));

/// HTTP client implementation using reqwest.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Creates a client with the default 15 second timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new() -> Result<Self, HttpClientError> {
        Self::with_timeouts(&Timeouts::default())
    }

    /// Creates a client with the given connect and read timeouts.
    ///
    /// The response timeout travels on each `RequestSpec`.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn with_timeouts(timeouts: &Timeouts) -> Result<Self, HttpClientError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(Duration::from_millis(timeouts.connect_ms))
            .read_timeout(Duration::from_millis(timeouts.read_ms))
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        Ok(Self { client })
    }

    /// Creates a new HTTP client with a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Converts domain `HttpMethod` to reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    /// Attaches the body, rejecting JSON bodies that do not parse.
    fn build_body(
        builder: reqwest::RequestBuilder,
        body: &RequestBody,
    ) -> Result<reqwest::RequestBuilder, HttpClientError> {
        match body {
            RequestBody::Empty => Ok(builder),
            RequestBody::Json(text) => {
                if !text.is_empty() {
                    let _: serde_json::Value = serde_json::from_str(text)
                        .map_err(|e| HttpClientError::InvalidBody(format!("Invalid JSON: {e}")))?;
                }
                Ok(builder.body(text.clone()))
            }
        }
    }

    /// Flattens response headers, joining repeated names with `", "`.
    fn collect_headers(headers: &HeaderMap) -> HashMap<String, String> {
        let mut collected: HashMap<String, String> = HashMap::with_capacity(headers.keys_len());
        for (name, value) in headers {
            let value = value.to_str().unwrap_or("<binary>");
            collected
                .entry(name.to_string())
                .and_modify(|joined| {
                    joined.push_str(", ");
                    joined.push_str(value);
                })
                .or_insert_with(|| value.to_string());
        }
        collected
    }

    /// Full message of an error including its sources.
    fn error_chain(error: &reqwest::Error) -> String {
        let mut message = error.to_string();
        let mut source = error.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }

    /// Maps reqwest errors to the port's `HttpClientError`.
    fn map_error(error: &reqwest::Error, timeout_ms: u64) -> HttpClientError {
        if error.is_timeout() {
            return HttpClientError::Timeout { timeout_ms };
        }

        let host = error
            .url()
            .and_then(|u| u.host_str())
            .unwrap_or("unknown")
            .to_string();

        if error.is_connect() {
            let message = Self::error_chain(error);
            let lower = message.to_lowercase();
            if lower.contains("dns") || lower.contains("resolve") {
                return HttpClientError::DnsError { host, message };
            }
            if lower.contains("refused") {
                return HttpClientError::ConnectionRefused {
                    host,
                    port: error
                        .url()
                        .and_then(reqwest::Url::port_or_known_default)
                        .unwrap_or(80),
                };
            }
            return HttpClientError::ConnectionFailed(message);
        }

        if error.is_redirect() {
            return HttpClientError::TooManyRedirects { max: MAX_REDIRECTS };
        }

        HttpClientError::Other(Self::error_chain(error))
    }
}

impl HttpClient for ReqwestHttpClient {
    fn execute(&self, request: &RequestSpec) -> HttpFuture<'_> {
        let method = request.method;
        let url = request.full_url();
        let headers: Vec<_> = request
            .headers
            .iter()
            .map(|h| (h.name.clone(), h.value.clone()))
            .collect();
        let body = request.body.clone();
        let timeout_ms = request.timeout_ms;

        Box::pin(async move {
            let url = url.map_err(|e| HttpClientError::InvalidUrl(e.to_string()))?;

            let mut builder = self
                .client
                .request(Self::to_reqwest_method(method), url)
                .timeout(Duration::from_millis(timeout_ms));

            for (name, value) in &headers {
                builder = builder.header(name, value);
            }

            if let Some(content_type) = body.content_type() {
                let has_content_type = headers
                    .iter()
                    .any(|(name, _)| name.eq_ignore_ascii_case("content-type"));
                if !has_content_type {
                    builder = builder.header("Content-Type", content_type);
                }
            }

            builder = Self::build_body(builder, &body)?;

            let start = Instant::now();
            let response = builder
                .send()
                .await
                .map_err(|e| Self::map_error(&e, timeout_ms))?;

            let status = response.status().as_u16();
            let response_headers = Self::collect_headers(response.headers());

            let body_bytes = response
                .bytes()
                .await
                .map_err(|e| Self::map_error(&e, timeout_ms))?;

            Ok(ResponseSpec::new(
                status,
                response_headers,
                &body_bytes,
                start.elapsed(),
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use reqwest::header::HeaderValue;
    use tokio::net::TcpListener;

    #[test]
    fn test_to_reqwest_method() {
        assert_eq!(
            ReqwestHttpClient::to_reqwest_method(HttpMethod::Get),
            Method::GET
        );
        assert_eq!(
            ReqwestHttpClient::to_reqwest_method(HttpMethod::Patch),
            Method::PATCH
        );
        assert_eq!(
            ReqwestHttpClient::to_reqwest_method(HttpMethod::Delete),
            Method::DELETE
        );
    }

    #[test]
    fn test_client_creation() {
        let client = ReqwestHttpClient::with_timeouts(&Timeouts {
            connect_ms: 1_000,
            read_ms: 2_000,
            response_ms: 3_000,
        });
        assert!(client.is_ok());
    }

    #[test]
    fn test_invalid_json_body() {
        let body = RequestBody::json("{invalid json}");
        let client = Client::new();
        let builder = client.post("https://example.com");
        let result = ReqwestHttpClient::build_body(builder, &body);
        assert!(matches!(result, Err(HttpClientError::InvalidBody(_))));
    }

    #[test]
    fn test_valid_json_body() {
        let body = RequestBody::json(r#"{"name": "O'Connor & Sons"}"#);
        let client = Client::new();
        let builder = client.post("https://example.com");
        assert!(ReqwestHttpClient::build_body(builder, &body).is_ok());
    }

    #[tokio::test]
    async fn test_invalid_url_is_reported() {
        let client = ReqwestHttpClient::with_client(Client::new());
        let request = RequestSpec::new("broken", HttpMethod::Get, "not a url");
        let result = client.execute(&request).await;
        assert!(matches!(result, Err(HttpClientError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_connection_failure_is_transport_error() {
        let client = ReqwestHttpClient::with_client(Client::new());
        let request = RequestSpec::new("closed port", HttpMethod::Get, "http://127.0.0.1:1/get");
        let result = client.execute(&request).await;
        assert!(matches!(
            result,
            Err(HttpClientError::ConnectionRefused { .. } | HttpClientError::ConnectionFailed(_))
        ));
    }

    #[test]
    fn test_repeated_response_headers_are_joined() {
        let mut headers = HeaderMap::new();
        headers.append("set-cookie", HeaderValue::from_static("a=1"));
        headers.append("set-cookie", HeaderValue::from_static("b=2"));
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let collected = ReqwestHttpClient::collect_headers(&headers);
        assert_eq!(collected.len(), 2);
        assert_eq!(collected["set-cookie"], "a=1, b=2");
        assert_eq!(collected["content-type"], "application/json");
    }

    #[tokio::test]
    #[allow(clippy::unwrap_used)]
    async fn test_silent_server_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let hold = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
            drop(socket);
        });

        let client = ReqwestHttpClient::with_client(Client::new());
        let mut request = RequestSpec::new("silent", HttpMethod::Get, format!("http://{addr}/get"));
        request.timeout_ms = 300;
        let result = client.execute(&request).await;

        assert!(matches!(result, Err(HttpClientError::Timeout { timeout_ms: 300 })));
        hold.abort();
    }
}
