//! reqres-style user, login and register routes.
//!
//! Writes are not persisted: create/update echo the submitted fields with a
//! generated id or timestamp, delete always answers 204.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{SecondsFormat, Utc};
use serde::Deserialize;
use serde_json::{Map, Value, json};

use crate::fixtures::{self, PER_PAGE, TOKEN, User};

/// First id handed out by `POST /api/users`.
const FIRST_CREATED_ID: u32 = 100;

/// Shared state of the reqres routes.
#[derive(Debug)]
pub struct ReqresState {
    next_id: AtomicU32,
}

impl Default for ReqresState {
    fn default() -> Self {
        Self {
            next_id: AtomicU32::new(FIRST_CREATED_ID),
        }
    }
}

/// Routes under `/api`.
pub fn routes(state: Arc<ReqresState>) -> Router {
    Router::new()
        .route("/api/users", get(list_users).post(create_user))
        .route(
            "/api/users/{id}",
            get(get_user)
                .put(update_user)
                .patch(update_user)
                .delete(delete_user),
        )
        .route("/api/login", post(login))
        .route("/api/register", post(register))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct PageQuery {
    page: Option<usize>,
}

async fn list_users(Query(query): Query<PageQuery>) -> Json<Value> {
    let page = query.page.unwrap_or(1);
    let data: Vec<Value> = fixtures::page(page).iter().map(user_json).collect();

    Json(json!({
        "page": page,
        "per_page": PER_PAGE,
        "total": fixtures::USERS.len(),
        "total_pages": fixtures::total_pages(),
        "data": data,
    }))
}

async fn get_user(Path(id): Path<u32>) -> Response {
    fixtures::by_id(id).map_or_else(
        || (StatusCode::NOT_FOUND, Json(json!({}))).into_response(),
        |user| Json(json!({ "data": user_json(user) })).into_response(),
    )
}

async fn create_user(State(state): State<Arc<ReqresState>>, body: Bytes) -> Response {
    let mut fields = object_body(&body);
    let id = state.next_id.fetch_add(1, Ordering::Relaxed);
    fields.insert("id".to_string(), Value::String(id.to_string()));
    fields.insert("createdAt".to_string(), Value::String(timestamp()));
    (StatusCode::CREATED, Json(Value::Object(fields))).into_response()
}

async fn update_user(Path(_id): Path<u32>, body: Bytes) -> Json<Value> {
    let mut fields = object_body(&body);
    fields.insert("updatedAt".to_string(), Value::String(timestamp()));
    Json(Value::Object(fields))
}

async fn delete_user(Path(_id): Path<u32>) -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn login(body: Bytes) -> Response {
    match authenticate(&object_body(&body)) {
        Ok(_) => Json(json!({ "token": TOKEN })).into_response(),
        Err(failure) => bad_request(failure.message()),
    }
}

async fn register(body: Bytes) -> Response {
    match authenticate(&object_body(&body)) {
        Ok(user) => Json(json!({ "id": user.id, "token": TOKEN })).into_response(),
        Err(AuthFailure::UnknownUser) => {
            bad_request("Note: Only defined users succeed registration")
        }
        Err(failure) => bad_request(failure.message()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthFailure {
    MissingIdentity,
    MissingPassword,
    UnknownUser,
}

impl AuthFailure {
    const fn message(self) -> &'static str {
        match self {
            Self::MissingIdentity => "Missing email or username",
            Self::MissingPassword => "Missing password",
            Self::UnknownUser => "user not found",
        }
    }
}

fn authenticate(fields: &Map<String, Value>) -> Result<&'static User, AuthFailure> {
    let text = |key: &str| {
        fields
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
    };

    let identity = text("email")
        .or_else(|| text("username"))
        .ok_or(AuthFailure::MissingIdentity)?;
    text("password").ok_or(AuthFailure::MissingPassword)?;
    fixtures::by_email(identity).ok_or(AuthFailure::UnknownUser)
}

/// The body as a JSON object; anything else counts as an empty object.
fn object_body(body: &[u8]) -> Map<String, Value> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

fn user_json(user: &User) -> Value {
    json!({
        "id": user.id,
        "email": user.email,
        "first_name": user.first_name,
        "last_name": user.last_name,
        "avatar": format!("https://reqres.in/img/faces/{}-image.jpg", user.id),
    })
}

fn bad_request(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
