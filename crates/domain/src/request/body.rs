//! Request bodies.

use serde::Serialize;

use crate::config::APPLICATION_JSON;
use crate::error::{DomainError, DomainResult};

/// What a request carries after its headers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestBody {
    /// Nothing; GET and DELETE calls.
    #[default]
    Empty,
    /// Encoded JSON text.
    Json(String),
}

impl RequestBody {
    /// No body.
    #[must_use]
    pub const fn none() -> Self {
        Self::Empty
    }

    /// A JSON body from text that is already encoded.
    #[must_use]
    pub fn json(content: impl Into<String>) -> Self {
        Self::Json(content.into())
    }

    /// Encodes `payload` with serde, so every string is escaped properly.
    ///
    /// # Errors
    ///
    /// Returns `InvalidBody` if the payload cannot be encoded.
    pub fn to_json<T: Serialize + ?Sized>(payload: &T) -> DomainResult<Self> {
        serde_json::to_string(payload)
            .map(Self::Json)
            .map_err(|e| DomainError::InvalidBody(e.to_string()))
    }

    /// The body text; empty for [`RequestBody::Empty`].
    #[must_use]
    pub fn content(&self) -> &str {
        match self {
            Self::Empty => "",
            Self::Json(text) => text,
        }
    }

    /// Media type to announce, if there is a body.
    #[must_use]
    pub const fn content_type(&self) -> Option<&'static str> {
        match self {
            Self::Empty => None,
            Self::Json(_) => Some(APPLICATION_JSON),
        }
    }

    /// Whether there is nothing to send.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content().is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    #[test]
    fn test_to_json_escapes_quotes() {
        let payload = BTreeMap::from([("name", r#"Say "hi""#)]);
        let body = RequestBody::to_json(&payload).unwrap();
        assert_eq!(body.content(), r#"{"name":"Say \"hi\""}"#);
        assert_eq!(body.content_type(), Some("application/json"));
    }

    #[test]
    fn test_empty() {
        assert!(RequestBody::none().is_empty());
        assert!(RequestBody::json("").is_empty());
        assert_eq!(RequestBody::none().content_type(), None);
    }
}
