//! Reqres Application - Endpoint callers and ports
//!
//! This crate defines:
//! - The `HttpClient` port the transport adapter implements
//! - `ApiSession`, which applies the shared request configuration
//! - The user, login and register endpoint callers

pub mod api;
pub mod error;
pub mod ports;
pub mod session;

pub use api::{LoginApi, RegisterApi, UserApi};
pub use error::{ApplicationError, ApplicationResult};
pub use ports::{HttpClient, HttpClientError, HttpFuture};
pub use session::ApiSession;
