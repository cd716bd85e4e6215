//! Per-test setup.

use std::sync::Arc;

use reqres_application::{ApiSession, HttpClientError, LoginApi, RegisterApi, UserApi};
use reqres_domain::{ApiFlavor, RequestConfig};
use reqres_echo::{EchoError, EchoServer};
use reqres_infrastructure::{ReqwestHttpClient, Settings, SettingsError, telemetry};
use thiserror::Error;

/// Errors raised while preparing a test.
#[derive(Debug, Error)]
pub enum SuiteError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// The local mock endpoint failed to start.
    #[error(transparent)]
    Echo(#[from] EchoError),

    /// The HTTP client could not be built.
    #[error(transparent)]
    Http(#[from] HttpClientError),
}

/// A configured session plus, in hermetic mode, the mock it points at.
///
/// The mock stops when the context is dropped.
pub struct SuiteContext {
    settings: Settings,
    session: ApiSession<ReqwestHttpClient>,
    server: Option<EchoServer>,
}

impl SuiteContext {
    /// Loads settings and prepares a session for the configured flavour.
    ///
    /// # Errors
    ///
    /// Fails if the settings are malformed, the mock cannot bind or the
    /// client cannot be built.
    pub async fn start() -> Result<Self, SuiteError> {
        Self::from_settings(Settings::load()?).await
    }

    /// Same as [`SuiteContext::start`] with the flavour forced.
    ///
    /// # Errors
    ///
    /// See [`SuiteContext::start`].
    pub async fn with_flavor(flavor: ApiFlavor) -> Result<Self, SuiteError> {
        let mut settings = Settings::load()?;
        settings.flavor = flavor;
        Self::from_settings(settings).await
    }

    /// Prepares a session from explicit settings.
    ///
    /// # Errors
    ///
    /// See [`SuiteContext::start`].
    pub async fn from_settings(settings: Settings) -> Result<Self, SuiteError> {
        telemetry::init();

        let server = if settings.live {
            None
        } else {
            Some(EchoServer::start_local().await?)
        };
        let base_url = server
            .as_ref()
            .map_or_else(|| settings.base_url.clone(), EchoServer::base_url);

        let config = match settings.auth_token.as_deref() {
            Some(token) => RequestConfig::with_auth(&base_url, token),
            None => RequestConfig::standard(&base_url),
        }
        .with_logging(settings.log_http);

        let client = ReqwestHttpClient::with_timeouts(&settings.timeouts)?;
        let session = ApiSession::new(Arc::new(client), config, settings.flavor)
            .with_timeout_ms(settings.timeouts.response_ms);

        tracing::debug!(
            %base_url,
            flavor = %settings.flavor,
            live = settings.live,
            "suite context ready"
        );

        Ok(Self {
            settings,
            session,
            server,
        })
    }

    /// The effective settings.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Whether requests go to a real service.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        self.server.is_none()
    }

    /// The API flavour requests are routed for.
    #[must_use]
    pub const fn flavor(&self) -> ApiFlavor {
        self.session.flavor()
    }

    /// The shared session.
    #[must_use]
    pub const fn session(&self) -> &ApiSession<ReqwestHttpClient> {
        &self.session
    }

    /// User endpoints.
    #[must_use]
    pub fn users(&self) -> UserApi<ReqwestHttpClient> {
        UserApi::new(self.session.clone())
    }

    /// Login endpoint.
    #[must_use]
    pub fn login(&self) -> LoginApi<ReqwestHttpClient> {
        LoginApi::new(self.session.clone())
    }

    /// Registration endpoint.
    #[must_use]
    pub fn register(&self) -> RegisterApi<ReqwestHttpClient> {
        RegisterApi::new(self.session.clone())
    }

    /// Stops the mock and waits for it to finish.
    ///
    /// # Errors
    ///
    /// Fails if the mock's task ended with an error.
    pub async fn shutdown(self) -> Result<(), SuiteError> {
        if let Some(server) = self.server {
            server.shutdown().await?;
        }
        Ok(())
    }
}
