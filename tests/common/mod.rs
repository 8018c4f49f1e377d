// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use dayplan::config::Config;
use dayplan::routes::create_router;
use dayplan::services::ScheduleService;
use dayplan::store::MemoryStore;
use dayplan::AppState;
use std::sync::Arc;
use tower::ServiceExt;

/// Create a test app backed by a fresh in-memory store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let schedule = ScheduleService::new(MemoryStore::new());

    let state = Arc::new(AppState { config, schedule });

    (create_router(state.clone()), state)
}

/// Create a test JWT token for `user_id` (same path the session service
/// uses).
#[allow(dead_code)]
pub fn create_test_jwt(user_id: u64, signing_key: &[u8]) -> String {
    dayplan::middleware::auth::create_jwt(user_id, signing_key).expect("Failed to create JWT")
}

/// Fire one request at the router with optional bearer auth and JSON body.
#[allow(dead_code)]
pub async fn request(
    app: &axum::Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Convenience: request expecting a status, returning the JSON body.
#[allow(dead_code)]
pub async fn request_json(
    app: &axum::Router,
    method: &str,
    uri: &str,
    token: &str,
    body: Option<serde_json::Value>,
    expected: StatusCode,
) -> serde_json::Value {
    let response = request(app, method, uri, Some(token), body).await;
    assert_eq!(response.status(), expected, "unexpected status for {}", uri);
    body_json(response).await
}
