//! Endpoint callers
//!
//! One method per logical operation. Each maps its scalar parameters onto a
//! route and a JSON body and returns the raw response.

mod auth;
mod users;

pub use auth::{LoginApi, RegisterApi};
pub use users::UserApi;
