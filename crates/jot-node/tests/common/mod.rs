//! Shared helpers for end-to-end tests.

use axum::{body::Body, http::Request};
use jot_auth::AuthStore;
use jot_node::api::{create_router, AppState};
use jot_realtime::{EventHub, EventRouter};
use jot_store::NoteStore;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

/// Build a router plus the state backing it, so tests can observe the
/// event stream and drive presence without a transport.
pub fn create_test_app() -> (axum::Router, AppState) {
    let state = AppState {
        notes: Arc::new(NoteStore::new()),
        auth: Arc::new(AuthStore::new()),
        realtime: Arc::new(EventRouter::new(Arc::new(EventHub::new()))),
    };
    (create_router(state.clone()), state)
}

pub async fn json_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Register an account and log in, returning the bearer token and user id.
pub async fn register_and_login(app: &axum::Router, username: &str) -> (String, String) {
    let email = format!("{}@example.com", username);

    let register = Request::builder()
        .method("POST")
        .uri("/api/auth/register")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "username": username,
                "email": email,
                "password": "hunter2"
            })
            .to_string(),
        ))
        .unwrap();
    let response = app.clone().oneshot(register).await.unwrap();
    assert_eq!(response.status(), 201);

    let login = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({
                "email": email,
                "password": "hunter2"
            })
            .to_string(),
        ))
        .unwrap();
    let response = app.clone().oneshot(login).await.unwrap();
    assert_eq!(response.status(), 200);

    let body = json_body(response).await;
    (
        body["token"].as_str().unwrap().to_string(),
        body["user"]["id"].as_str().unwrap().to_string(),
    )
}
