//! Port definitions (interfaces)
//!
//! Ports define the boundary between the endpoint callers and the transport.
//! Adapters in the infrastructure layer implement them.

mod http_client;

pub use http_client::{HttpClient, HttpClientError, HttpFuture};
