//! Reqres Infrastructure - Adapters and implementations
//!
//! Concrete implementations behind the application ports, plus the ambient
//! pieces every suite run needs: settings, tracing and the assertion runner.

pub mod adapters;
pub mod settings;
pub mod telemetry;
pub mod testing;

pub use adapters::ReqwestHttpClient;
pub use settings::{Settings, SettingsError, Timeouts};
pub use testing::TestRunner;
