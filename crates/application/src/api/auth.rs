//! Login and register endpoint callers.

use reqres_domain::{Credentials, Endpoint, request::RequestBody, response::ResponseSpec};

use crate::ApplicationResult;
use crate::ports::HttpClient;
use crate::session::ApiSession;

/// Calls the login endpoint.
pub struct LoginApi<C: HttpClient> {
    session: ApiSession<C>,
}

impl<C: HttpClient> LoginApi<C> {
    /// Wraps a session.
    pub const fn new(session: ApiSession<C>) -> Self {
        Self { session }
    }

    /// Posts the credentials; absent fields are left out of the body.
    ///
    /// # Errors
    ///
    /// Propagates composition and transport failures.
    pub async fn login(&self, credentials: &Credentials) -> ApplicationResult<ResponseSpec> {
        let body = RequestBody::to_json(credentials)?;
        self.session.send("login", Endpoint::Login, body).await
    }
}

/// Calls the register endpoint.
pub struct RegisterApi<C: HttpClient> {
    session: ApiSession<C>,
}

impl<C: HttpClient> RegisterApi<C> {
    /// Wraps a session.
    pub const fn new(session: ApiSession<C>) -> Self {
        Self { session }
    }

    /// Posts the credentials; absent fields are left out of the body.
    ///
    /// # Errors
    ///
    /// Propagates composition and transport failures.
    pub async fn register(&self, credentials: &Credentials) -> ApplicationResult<ResponseSpec> {
        let body = RequestBody::to_json(credentials)?;
        self.session.send("register", Endpoint::Register, body).await
    }
}
