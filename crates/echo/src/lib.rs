//! Local mock of the httpbin and reqres endpoints the suite exercises.
//!
//! [`router`] serves both route families from one listener. [`EchoServer`]
//! runs it on a background task for the lifetime of a test, and
//! [`run_server`] backs the standalone binary.

pub mod echo;
pub mod fixtures;
pub mod reqres;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;

use crate::reqres::ReqresState;

/// Errors raised while starting or stopping the server.
#[derive(Debug, Error)]
pub enum EchoError {
    /// The listener could not be bound.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        /// Requested address.
        addr: SocketAddr,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Serving failed after the listener was bound.
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),

    /// The background task panicked or was cancelled.
    #[error("Server task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Both route families behind a request trace layer.
pub fn router() -> Router {
    echo::routes()
        .merge(reqres::routes(Arc::new(ReqresState::default())))
        .layer(TraceLayer::new_for_http())
}

/// A server running on a background task.
///
/// Dropping the handle signals shutdown without waiting for it.
#[derive(Debug)]
pub struct EchoServer {
    local_addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<std::io::Result<()>>>,
}

impl EchoServer {
    /// Binds `addr` (port 0 picks a free port) and starts serving.
    pub async fn start(addr: SocketAddr) -> Result<Self, EchoError> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| EchoError::Bind { addr, source })?;
        let local_addr = listener.local_addr()?;
        let (tx, rx) = oneshot::channel::<()>();

        let app = router().into_make_service_with_connect_info::<SocketAddr>();
        let task = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = rx.await;
                })
                .await
        });

        tracing::debug!(%local_addr, "echo server listening");

        Ok(Self {
            local_addr,
            shutdown: Some(tx),
            task: Some(task),
        })
    }

    /// Starts on an ephemeral loopback port.
    pub async fn start_local() -> Result<Self, EchoError> {
        Self::start(SocketAddr::from(([127, 0, 0, 1], 0))).await
    }

    /// The bound address.
    #[must_use]
    pub const fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// `http://host:port` of the bound address.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}", self.local_addr)
    }

    /// Stops the server and waits for in-flight requests to finish.
    pub async fn shutdown(mut self) -> Result<(), EchoError> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        match self.task.take() {
            Some(task) => Ok(task.await??),
            None => Ok(()),
        }
    }
}

impl Drop for EchoServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

/// Serves on `addr` until Ctrl-C.
pub async fn run_server(addr: SocketAddr) -> Result<(), EchoError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| EchoError::Bind { addr, source })?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    let app = router().into_make_service_with_connect_info::<SocketAddr>();
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!("Failed to listen for Ctrl-C: {e}");
            }
        })
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        extract::connect_info::MockConnectInfo,
        http::{Method, Request, StatusCode, header},
    };
    use http_body_util::BodyExt;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app() -> Router {
        router().layer(MockConnectInfo(SocketAddr::from(([127, 0, 0, 1], 40000))))
    }

    async fn call(method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::HOST, "localhost:8080");
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_get_echoes_args_and_headers() {
        let (status, body) = call(Method::GET, "/get?page=2", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["args"], json!({"page": "2"}));
        assert_eq!(body["headers"]["Host"], "localhost:8080");
        assert_eq!(body["origin"], "127.0.0.1");
        assert_eq!(body["url"], "http://localhost:8080/get?page=2");
    }

    #[tokio::test]
    async fn test_post_echoes_body() {
        let payload = json!({"name": "John O'Brien-Smith", "job": "QA"});
        let (status, body) = call(Method::POST, "/post", Some(payload.clone())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["json"], payload);
        assert_eq!(body["data"], payload.to_string());
        assert_eq!(body["headers"]["Content-Type"], "application/json");
    }

    #[tokio::test]
    async fn test_delete_with_query() {
        let (status, body) = call(Method::DELETE, "/delete?id=10", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["args"]["id"], "10");
        assert_eq!(body["json"], Value::Null);
    }

    #[tokio::test]
    async fn test_method_mismatch_is_rejected() {
        let (status, _) = call(Method::GET, "/post", None).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_reqres_list_and_single() {
        let (status, body) = call(Method::GET, "/api/users?page=2", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["page"], 2);
        assert_eq!(body["total"], 12);
        assert_eq!(body["data"][0]["id"], 7);

        let (status, body) = call(Method::GET, "/api/users/2", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["first_name"], "Janet");

        let (status, body) = call(Method::GET, "/api/users/23", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({}));
    }

    #[tokio::test]
    async fn test_reqres_writes() {
        let (status, body) = call(
            Method::POST,
            "/api/users",
            Some(json!({"name": "morpheus", "job": "leader"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["name"], "morpheus");
        assert!(body["id"].is_string());
        assert!(body["createdAt"].is_string());

        let (status, body) = call(
            Method::PATCH,
            "/api/users/2",
            Some(json!({"job": "zion resident"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["job"], "zion resident");
        assert!(body["updatedAt"].is_string());

        let (status, body) = call(Method::DELETE, "/api/users/2", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(body, Value::Null);
    }

    #[tokio::test]
    async fn test_reqres_login_and_register() {
        let (status, body) = call(
            Method::POST,
            "/api/login",
            Some(json!({"email": "eve.holt@reqres.in", "password": "cityslicka"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["token"], fixtures::TOKEN);

        let (status, body) = call(
            Method::POST,
            "/api/login",
            Some(json!({"email": "peter@klaven"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing password");

        let (status, body) = call(
            Method::POST,
            "/api/register",
            Some(json!({"email": "eve.holt@reqres.in", "password": "pistol"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], 4);

        let (status, body) = call(
            Method::POST,
            "/api/register",
            Some(json!({"email": "sydney@fife", "password": "pistol"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Note: Only defined users succeed registration");
    }

    #[tokio::test]
    async fn test_server_start_and_shutdown() {
        let server = EchoServer::start_local().await.unwrap();
        assert_ne!(server.local_addr().port(), 0);
        assert!(server.base_url().starts_with("http://127.0.0.1:"));
        server.shutdown().await.unwrap();
    }
}
