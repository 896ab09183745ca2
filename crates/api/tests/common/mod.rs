//! Shared helpers for API integration tests.
//!
//! Requests go straight into the router with `tower::ServiceExt::oneshot`;
//! no TCP listener is involved. Repositories are backed by a `MemoryStore`
//! the test keeps a handle on, so it can seed data, inject faults and inspect
//! the mutation journal.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use memequotes_api::config::{LogFormat, ServerConfig};
use memequotes_api::router::build_app_router;
use memequotes_api::state::AppState;
use memequotes_db::repositories::MemoryStore;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "postgres://unused".to_string(),
        db_max_connections: 1,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        log_format: LogFormat::Pretty,
        hostname: "test-host".to_string(),
    }
}

/// Build the full application router (same middleware stack as production)
/// on top of the given store.
pub fn build_test_app(store: Arc<MemoryStore>) -> Router {
    build_app_router(AppState::in_memory(store, test_config()))
}

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(body)).await
}

/// Send a request with a raw (possibly malformed) JSON body.
pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Create a character through the API and return its id.
pub async fn create_character(store: &Arc<MemoryStore>, name: &str) -> i64 {
    let app = build_test_app(store.clone());
    let response = post_json(app, "/character", serde_json::json!({ "name": name })).await;
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a phrase through the API and return its id.
pub async fn create_phrase(store: &Arc<MemoryStore>, character_id: i64, content: &str) -> i64 {
    let app = build_test_app(store.clone());
    let response = post_json(
        app,
        &format!("/character/{character_id}/phrase"),
        serde_json::json!({ "content": content }),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}
