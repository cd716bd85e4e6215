//! API test suite for the reqres user, login and register endpoints.
//!
//! Each integration test opens a [`SuiteContext`], calls an endpoint through
//! the handles it hands out and checks the response with [`ResponseExt`].
//! By default the context serves requests from an in-process mock; set
//! `REQRES_LIVE=true` (and `REQRES_BASE_URL`) to target a real service.

pub mod expect;
pub mod fixture;

pub use expect::ResponseExt;
pub use fixture::{SuiteContext, SuiteError};
