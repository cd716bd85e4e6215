//! User CRUD endpoint callers.

use reqres_domain::{Endpoint, UserPayload, request::RequestBody, response::ResponseSpec};

use crate::ApplicationResult;
use crate::ports::HttpClient;
use crate::session::ApiSession;

/// Calls the user endpoints.
pub struct UserApi<C: HttpClient> {
    session: ApiSession<C>,
}

impl<C: HttpClient> UserApi<C> {
    /// Wraps a session.
    pub const fn new(session: ApiSession<C>) -> Self {
        Self { session }
    }

    /// Lists users, the default page when `page` is `None`.
    ///
    /// # Errors
    ///
    /// Propagates composition and transport failures.
    pub async fn get_users(&self, page: Option<u32>) -> ApplicationResult<ResponseSpec> {
        self.session
            .send("list users", Endpoint::ListUsers { page }, RequestBody::none())
            .await
    }

    /// Fetches a single user. Unknown ids are sent like any other.
    ///
    /// # Errors
    ///
    /// Propagates composition and transport failures.
    pub async fn get_user(&self, id: u32) -> ApplicationResult<ResponseSpec> {
        self.session
            .send("get user", Endpoint::GetUser { id }, RequestBody::none())
            .await
    }

    /// Creates a user from `name` and `job`.
    ///
    /// # Errors
    ///
    /// Propagates composition and transport failures.
    pub async fn create_user(&self, name: &str, job: &str) -> ApplicationResult<ResponseSpec> {
        let body = RequestBody::to_json(&UserPayload::new(name, job))?;
        self.session.send("create user", Endpoint::CreateUser, body).await
    }

    /// Replaces a user (PUT).
    ///
    /// # Errors
    ///
    /// Propagates composition and transport failures.
    pub async fn update_user(&self, id: u32, name: &str, job: &str) -> ApplicationResult<ResponseSpec> {
        let body = self.update_body(id, name, job)?;
        self.session
            .send("update user", Endpoint::UpdateUser { id }, body)
            .await
    }

    /// Partially updates a user (PATCH).
    ///
    /// # Errors
    ///
    /// Propagates composition and transport failures.
    pub async fn patch_user(&self, id: u32, name: &str, job: &str) -> ApplicationResult<ResponseSpec> {
        let body = self.update_body(id, name, job)?;
        self.session
            .send("patch user", Endpoint::PatchUser { id }, body)
            .await
    }

    /// Deletes a user.
    ///
    /// # Errors
    ///
    /// Propagates composition and transport failures.
    pub async fn delete_user(&self, id: u32) -> ApplicationResult<ResponseSpec> {
        self.session
            .send("delete user", Endpoint::DeleteUser { id }, RequestBody::none())
            .await
    }

    fn update_body(&self, id: u32, name: &str, job: &str) -> ApplicationResult<RequestBody> {
        let payload = UserPayload::new(name, job);
        let payload = if self.session.flavor().embeds_id_in_body() {
            payload.with_id(id)
        } else {
            payload
        };
        Ok(RequestBody::to_json(&payload)?)
    }
}
