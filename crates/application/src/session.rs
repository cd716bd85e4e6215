//! Request dispatch shared by every endpoint caller.

use std::sync::Arc;

use reqres_domain::{
    ApiFlavor, Endpoint, RequestConfig,
    request::{DEFAULT_TIMEOUT_MS, RequestBody, RequestSpec},
    response::ResponseSpec,
};

use crate::ApplicationResult;
use crate::ports::HttpClient;

/// A client bound to one immutable [`RequestConfig`].
///
/// Every call copies the configuration's default headers, resolves the URL
/// for the configured API flavour, emits the request/response log events the
/// configuration asks for and performs exactly one `execute` on the client.
pub struct ApiSession<C: HttpClient> {
    client: Arc<C>,
    config: Arc<RequestConfig>,
    flavor: ApiFlavor,
    timeout_ms: u64,
}

impl<C: HttpClient> Clone for ApiSession<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            config: Arc::clone(&self.config),
            flavor: self.flavor,
            timeout_ms: self.timeout_ms,
        }
    }
}

impl<C: HttpClient> ApiSession<C> {
    /// Creates a session over `client` using `config`.
    pub fn new(client: Arc<C>, config: RequestConfig, flavor: ApiFlavor) -> Self {
        Self {
            client,
            config: Arc::new(config),
            flavor,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Sets the total timeout given to every request.
    #[must_use]
    pub const fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Returns the shared configuration.
    #[must_use]
    pub fn config(&self) -> &RequestConfig {
        &self.config
    }

    /// Returns the API flavour requests are routed for.
    #[must_use]
    pub const fn flavor(&self) -> ApiFlavor {
        self.flavor
    }

    /// Builds the request for an endpoint without sending it.
    ///
    /// # Errors
    ///
    /// Returns a domain error if a configured header is not valid HTTP.
    pub fn compose(
        &self,
        name: &str,
        endpoint: Endpoint,
        body: RequestBody,
    ) -> ApplicationResult<RequestSpec> {
        let route = self.flavor.route(endpoint);
        let mut request = RequestSpec::new(name, route.method, self.config.url_for(&route.path));
        for header in self.config.headers().iter() {
            header.validate()?;
            request.headers.set(header.clone());
        }
        request.query = route.query;
        request.body = body;
        request.timeout_ms = self.timeout_ms;
        Ok(request)
    }

    /// Composes and sends the request for an endpoint.
    ///
    /// The response is returned whatever its status; only composition and
    /// transport failures are errors.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Domain` for an unusable configuration and
    /// `ApplicationError::Http` when the transport fails.
    pub async fn send(
        &self,
        name: &str,
        endpoint: Endpoint,
        body: RequestBody,
    ) -> ApplicationResult<ResponseSpec> {
        let request = self.compose(name, endpoint, body)?;
        let log = self.config.log();

        if log.requests {
            tracing::info!(
                request = %request.name,
                method = %request.method,
                url = %request.url,
                "sending request"
            );
            tracing::debug!(
                headers = ?request.headers,
                query = ?request.query,
                body = %request.body.content(),
                "request details"
            );
        }

        let response = match self.client.execute(&request).await {
            Ok(response) => response,
            Err(error) => {
                tracing::warn!(request = %request.name, %error, "request failed");
                return Err(error.into());
            }
        };

        if log.responses {
            tracing::info!(
                request = %request.name,
                status = response.status,
                duration_ms = u64::try_from(response.duration.as_millis()).unwrap_or(u64::MAX),
                size = response.size,
                "received response"
            );
            tracing::debug!(headers = ?response.headers, body = %response.body, "response details");
        }

        Ok(response)
    }
}
