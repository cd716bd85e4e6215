//! Request headers.

use crate::error::{DomainError, DomainResult};

/// Separator bytes RFC 9110 allows in a header name besides alphanumerics.
const TOKEN_PUNCTUATION: &[u8] = b"!#$%&'*+-.^_`|~";

/// One header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Name as it will be sent.
    pub name: String,
    /// Value.
    pub value: String,
}

impl Header {
    /// A header line.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Checks the name is an HTTP token and the value holds no control
    /// characters other than tab.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHeaderName` or `InvalidHeaderValue`.
    pub fn validate(&self) -> DomainResult<()> {
        let name_ok = !self.name.is_empty()
            && self
                .name
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || TOKEN_PUNCTUATION.contains(&b));
        if !name_ok {
            return Err(DomainError::InvalidHeaderName(self.name.clone()));
        }
        if self.value.bytes().any(|b| b.is_ascii_control() && b != b'\t') {
            return Err(DomainError::InvalidHeaderValue(self.value.clone()));
        }
        Ok(())
    }
}

/// Headers in send order, at most one per name (compared case-insensitively).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers(Vec<Header>);

impl Headers {
    /// No headers.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Adds `header`, replacing one of the same name in place.
    pub fn set(&mut self, header: Header) {
        match self
            .0
            .iter_mut()
            .find(|h| h.name.eq_ignore_ascii_case(&header.name))
        {
            Some(existing) => *existing = header,
            None => self.0.push(header),
        }
    }

    /// Value for `name`, ignoring case.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|h| h.name.eq_ignore_ascii_case(name))
            .map(|h| h.value.as_str())
    }

    /// Headers in send order.
    pub fn iter(&self) -> impl Iterator<Item = &Header> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_set_replaces_in_place() {
        let mut headers = Headers::new();
        headers.set(Header::new("Accept", "text/plain"));
        headers.set(Header::new("Authorization", "Bearer abc"));
        headers.set(Header::new("accept", "application/json"));

        let lines: Vec<_> = headers
            .iter()
            .map(|h| (h.name.as_str(), h.value.as_str()))
            .collect();
        assert_eq!(
            lines,
            [("accept", "application/json"), ("Authorization", "Bearer abc")]
        );
        assert_eq!(headers.get("ACCEPT"), Some("application/json"));
        assert_eq!(headers.get("X-Missing"), None);
    }

    #[test]
    fn test_validate() {
        assert!(Header::new("X-Api-Key", "reqres-free-v1").validate().is_ok());
        assert!(Header::new("X-Tab", "a\tb").validate().is_ok());
        assert!(matches!(
            Header::new("Bad Name", "v").validate(),
            Err(DomainError::InvalidHeaderName(_))
        ));
        assert!(matches!(
            Header::new("", "v").validate(),
            Err(DomainError::InvalidHeaderName(_))
        ));
        assert!(matches!(
            Header::new("X-Line", "a\nb").validate(),
            Err(DomainError::InvalidHeaderValue(_))
        ));
    }
}
