//! httpbin-style echo routes.
//!
//! Every route reflects the request back as JSON: query arguments, headers,
//! caller address and URL, plus the raw and parsed body for methods that
//! carry one.

use std::collections::BTreeMap;
use std::net::SocketAddr;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{ConnectInfo, Query},
    http::{HeaderMap, Uri, header},
    routing::{any, delete, get, patch, post, put},
};
use serde_json::{Value, json};

/// Routes: `/get`, `/post`, `/put`, `/patch`, `/delete`, `/anything[/..]`.
pub fn routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/get", get(echo))
        .route("/post", post(echo_with_body))
        .route("/put", put(echo_with_body))
        .route("/patch", patch(echo_with_body))
        .route("/delete", delete(echo_with_body))
        .route("/anything", any(echo_with_body))
        .route("/anything/{*rest}", any(echo_with_body))
}

async fn echo(
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    uri: Uri,
    headers: HeaderMap,
    Query(args): Query<BTreeMap<String, String>>,
) -> Json<Value> {
    Json(json!({
        "args": args,
        "headers": header_map(&headers),
        "origin": peer.ip().to_string(),
        "url": full_url(&headers, &uri),
    }))
}

async fn echo_with_body(
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    uri: Uri,
    headers: HeaderMap,
    Query(args): Query<BTreeMap<String, String>>,
    body: Bytes,
) -> Json<Value> {
    let data = String::from_utf8_lossy(&body).into_owned();
    let parsed = serde_json::from_slice::<Value>(&body).unwrap_or(Value::Null);

    Json(json!({
        "args": args,
        "data": data,
        "files": {},
        "form": {},
        "headers": header_map(&headers),
        "json": parsed,
        "origin": peer.ip().to_string(),
        "url": full_url(&headers, &uri),
    }))
}

/// Header names in `Title-Case`, repeated headers joined with commas.
fn header_map(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut map: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        map.entry(title_case(name.as_str()))
            .and_modify(|existing| {
                existing.push(',');
                existing.push_str(&value);
            })
            .or_insert(value);
    }
    map
}

fn title_case(name: &str) -> String {
    name.split('-')
        .map(|part| {
            let mut chars = part.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
            })
        })
        .collect::<Vec<_>>()
        .join("-")
}

fn full_url(headers: &HeaderMap, uri: &Uri) -> String {
    let host = headers
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("localhost");
    format!("http://{host}{uri}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("content-type"), "Content-Type");
        assert_eq!(title_case("x-api-key"), "X-Api-Key");
        assert_eq!(title_case("accept"), "Accept");
    }

    #[test]
    fn test_header_map_joins_repeats() {
        let mut headers = HeaderMap::new();
        headers.append("x-tag", "a".parse().unwrap());
        headers.append("x-tag", "b".parse().unwrap());

        let map = header_map(&headers);
        assert_eq!(map.get("X-Tag").map(String::as_str), Some("a,b"));
    }

    #[test]
    fn test_full_url() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, "127.0.0.1:8080".parse().unwrap());
        let uri: Uri = "/get?page=2".parse().unwrap();
        assert_eq!(full_url(&headers, &uri), "http://127.0.0.1:8080/get?page=2");
    }
}
