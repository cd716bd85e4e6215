//! Reqres Domain - Core types
//!
//! Request and response models, the shared request configuration, endpoint
//! routing and response assertions. Pure Rust, no I/O.

pub mod config;
pub mod error;
pub mod request;
pub mod response;
pub mod routes;
pub mod testing;
pub mod user;

pub use config::{APPLICATION_JSON, LogOptions, RequestConfig, RequestConfigBuilder};
pub use error::{DomainError, DomainResult};
pub use routes::{ApiFlavor, Endpoint, Route};
pub use testing::{Assertion, AssertionResult, StatusExpectation, TestResults, TestSuite};
pub use user::{Credentials, UserPayload};
