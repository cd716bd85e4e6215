//! Suite settings.
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! `reqres.toml` in the working directory, then `REQRES_*` environment
//! variables (`__` separates nested keys, e.g. `REQRES_TIMEOUTS__CONNECT_MS`).

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use reqres_domain::ApiFlavor;
use serde::Deserialize;
use thiserror::Error;

/// Default public endpoint.
pub const DEFAULT_BASE_URL: &str = "https://httpbin.org";

/// Default connect, read and response timeout.
pub const DEFAULT_TIMEOUT_MS: u64 = 15_000;

const ENV_PREFIX: &str = "REQRES";
const FILE_NAME: &str = "reqres";

/// Errors raised while loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A source could not be read or a value has the wrong type.
    #[error("failed to load settings: {0}")]
    Load(#[from] config::ConfigError),
}

/// Transport timeouts in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Timeouts {
    /// Time allowed to establish a connection.
    pub connect_ms: u64,
    /// Time allowed between reads.
    pub read_ms: u64,
    /// Total time allowed for a request.
    pub response_ms: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            connect_ms: DEFAULT_TIMEOUT_MS,
            read_ms: DEFAULT_TIMEOUT_MS,
            response_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Settings for a suite run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the live target.
    pub base_url: String,
    /// Shape of the target API.
    pub flavor: ApiFlavor,
    /// Hit `base_url` instead of a local mock endpoint.
    pub live: bool,
    /// Transport timeouts.
    pub timeouts: Timeouts,
    /// Bearer token attached to every request.
    pub auth_token: Option<String>,
    /// Emit request/response log events.
    pub log_http: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            flavor: ApiFlavor::default(),
            live: false,
            timeouts: Timeouts::default(),
            auth_token: None,
            log_http: true,
        }
    }
}

impl Settings {
    /// Loads defaults, `reqres.toml` (optional) and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a source is malformed.
    pub fn load() -> Result<Self, SettingsError> {
        let builder = Config::builder().add_source(File::with_name(FILE_NAME).required(false));
        Self::build(builder, Environment::default())
    }

    /// Loads defaults plus the environment only.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable has the wrong type.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::build(Config::builder(), Environment::default())
    }

    fn build(
        builder: ConfigBuilder<DefaultState>,
        env: Environment,
    ) -> Result<Self, SettingsError> {
        let settings = builder
            .add_source(
                env.prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}
