//! Request payloads for the user, login and register endpoints.

use serde::{Deserialize, Serialize};

/// Body of create, update and partial-update calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPayload {
    /// User id, only sent when the route does not carry it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    /// Display name.
    pub name: String,
    /// Job title.
    pub job: String,
}

impl UserPayload {
    /// Creates a payload without an id.
    #[must_use]
    pub fn new(name: impl Into<String>, job: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            job: job.into(),
        }
    }

    /// Attaches an id.
    #[must_use]
    pub const fn with_id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }
}

/// Body of login and register calls. Missing fields are left out of the JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Account email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Account password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Credentials {
    /// Email and password.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }

    /// Email without a password.
    #[must_use]
    pub fn email_only(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            password: None,
        }
    }

    /// Neither field.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            email: None,
            password: None,
        }
    }
}
