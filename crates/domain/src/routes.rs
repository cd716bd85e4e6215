//! Endpoint routing per API flavour.
//!
//! The suite can target the echo service (every call lands on a
//! method-named path and the identifiers travel as query parameters or in
//! the body) or the reqres-style REST API (identifiers in the path).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::request::{HttpMethod, QueryParams};

/// The API shape a target speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiFlavor {
    /// httpbin-style echo endpoints (`/get`, `/post`, ...).
    #[default]
    Httpbin,
    /// reqres-style REST endpoints (`/api/users/{id}`, ...).
    Reqres,
}

impl ApiFlavor {
    /// Returns the flavour name used in configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Httpbin => "httpbin",
            Self::Reqres => "reqres",
        }
    }

    /// Whether update bodies carry the user id (the path has none).
    #[must_use]
    pub const fn embeds_id_in_body(self) -> bool {
        matches!(self, Self::Httpbin)
    }

    /// Resolves an operation to its method, path and query.
    #[must_use]
    pub fn route(self, endpoint: Endpoint) -> Route {
        match self {
            Self::Httpbin => Self::httpbin_route(endpoint),
            Self::Reqres => Self::reqres_route(endpoint),
        }
    }

    fn httpbin_route(endpoint: Endpoint) -> Route {
        match endpoint {
            Endpoint::ListUsers { page } => {
                let query = page.map_or_else(QueryParams::new, |p| QueryParams::new().with("page", p));
                Route::new(HttpMethod::Get, "/get").with_query(query)
            }
            Endpoint::GetUser { id } => {
                Route::new(HttpMethod::Get, "/get").with_query(QueryParams::new().with("id", id))
            }
            Endpoint::CreateUser | Endpoint::Login | Endpoint::Register => {
                Route::new(HttpMethod::Post, "/post")
            }
            Endpoint::UpdateUser { .. } => Route::new(HttpMethod::Put, "/put"),
            Endpoint::PatchUser { .. } => Route::new(HttpMethod::Patch, "/patch"),
            Endpoint::DeleteUser { id } => Route::new(HttpMethod::Delete, "/delete")
                .with_query(QueryParams::new().with("id", id)),
        }
    }

    fn reqres_route(endpoint: Endpoint) -> Route {
        match endpoint {
            Endpoint::ListUsers { page } => {
                let query = page.map_or_else(QueryParams::new, |p| QueryParams::new().with("page", p));
                Route::new(HttpMethod::Get, "/api/users").with_query(query)
            }
            Endpoint::GetUser { id } => Route::new(HttpMethod::Get, format!("/api/users/{id}")),
            Endpoint::CreateUser => Route::new(HttpMethod::Post, "/api/users"),
            Endpoint::UpdateUser { id } => Route::new(HttpMethod::Put, format!("/api/users/{id}")),
            Endpoint::PatchUser { id } => Route::new(HttpMethod::Patch, format!("/api/users/{id}")),
            Endpoint::DeleteUser { id } => {
                Route::new(HttpMethod::Delete, format!("/api/users/{id}"))
            }
            Endpoint::Login => Route::new(HttpMethod::Post, "/api/login"),
            Endpoint::Register => Route::new(HttpMethod::Post, "/api/register"),
        }
    }
}

impl fmt::Display for ApiFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiFlavor {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "httpbin" => Ok(Self::Httpbin),
            "reqres" => Ok(Self::Reqres),
            other => Err(DomainError::UnknownFlavor(other.to_string())),
        }
    }
}

/// A logical operation of the user/login/register API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// List users, optionally a specific page.
    ListUsers {
        /// Page number.
        page: Option<u32>,
    },
    /// Fetch one user.
    GetUser {
        /// User id.
        id: u32,
    },
    /// Create a user.
    CreateUser,
    /// Replace a user (PUT).
    UpdateUser {
        /// User id.
        id: u32,
    },
    /// Partially update a user (PATCH).
    PatchUser {
        /// User id.
        id: u32,
    },
    /// Delete a user.
    DeleteUser {
        /// User id.
        id: u32,
    },
    /// Log in.
    Login,
    /// Register.
    Register,
}

/// Method, path and query of a resolved endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// HTTP method.
    pub method: HttpMethod,
    /// Path relative to the base URI and base path.
    pub path: String,
    /// Query parameters.
    pub query: QueryParams,
}

impl Route {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: QueryParams::new(),
        }
    }

    fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn query_pairs(route: &Route) -> Vec<(String, String)> {
        route
            .query
            .iter()
            .map(|p| (p.key.clone(), p.value.clone()))
            .collect()
    }

    #[test]
    fn test_flavor_from_str() {
        assert_eq!("httpbin".parse::<ApiFlavor>().unwrap(), ApiFlavor::Httpbin);
        assert_eq!(" ReqRes ".parse::<ApiFlavor>().unwrap(), ApiFlavor::Reqres);
        assert_eq!(
            "jsonplaceholder".parse::<ApiFlavor>(),
            Err(DomainError::UnknownFlavor("jsonplaceholder".to_string()))
        );
    }

    #[test]
    fn test_httpbin_routes() {
        let flavor = ApiFlavor::Httpbin;

        let list = flavor.route(Endpoint::ListUsers { page: None });
        assert_eq!((list.method, list.path.as_str()), (HttpMethod::Get, "/get"));
        assert!(list.query.is_empty());

        let page = flavor.route(Endpoint::ListUsers { page: Some(2) });
        assert_eq!(query_pairs(&page), [("page".to_string(), "2".to_string())]);

        let delete = flavor.route(Endpoint::DeleteUser { id: 10 });
        assert_eq!(delete.method, HttpMethod::Delete);
        assert_eq!(delete.path, "/delete");
        assert_eq!(query_pairs(&delete), [("id".to_string(), "10".to_string())]);

        assert_eq!(flavor.route(Endpoint::Login).path, "/post");
        assert_eq!(flavor.route(Endpoint::PatchUser { id: 2 }).method, HttpMethod::Patch);
    }

    #[test]
    fn test_reqres_routes() {
        let flavor = ApiFlavor::Reqres;

        let get = flavor.route(Endpoint::GetUser { id: 2 });
        assert_eq!(get.path, "/api/users/2");
        assert!(get.query.is_empty());

        let update = flavor.route(Endpoint::UpdateUser { id: 7 });
        assert_eq!((update.method, update.path.as_str()), (HttpMethod::Put, "/api/users/7"));

        assert_eq!(flavor.route(Endpoint::Register).path, "/api/register");
        assert_eq!(flavor.route(Endpoint::CreateUser).method, HttpMethod::Post);
    }

    #[test]
    fn test_id_in_body() {
        assert!(ApiFlavor::Httpbin.embeds_id_in_body());
        assert!(!ApiFlavor::Reqres.embeds_id_in_body());
    }
}
