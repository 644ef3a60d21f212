//! End-to-end tests for note CRUD and its broadcast side effects.

mod common;

use axum::{body::Body, http::Request};
use common::{create_test_app, json_body, register_and_login};
use jot_realtime::NoteEvent;
use serde_json::{json, Value};
use tower::ServiceExt;

#[tokio::test]
async fn test_create_note_broadcasts() {
    let (app, state) = create_test_app();
    let (token, user_id) = register_and_login(&app, "alice").await;
    let mut events = state.realtime.hub().subscribe_events();

    let request = Request::builder()
        .method("POST")
        .uri("/api/notes")
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::from(
            json!({
                "title": "Groceries",
                "content": "milk, eggs"
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), 201);

    let note = json_body(response).await;
    assert_eq!(note["title"], "Groceries");
    assert_eq!(note["author"], Value::String(user_id));
    assert!(!note["id"].as_str().unwrap().is_empty());

    // The mutation reached the broadcast hub
    let event = events.try_recv().unwrap();
    assert!(matches!(event, NoteEvent::NoteCreated { note } if note.title == "Groceries"));
}

#[tokio::test]
async fn test_create_note_validation_no_broadcast() {
    let (app, state) = create_test_app();
    let (token, _user_id) = register_and_login(&app, "alice").await;
    let mut events = state.realtime.hub().subscribe_events();

    let request = Request::builder()
        .method("POST")
        .uri("/api/notes")
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::from(
            json!({
                "title": "",
                "content": "body"
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), 400);

    // Failed operations never produce events
    assert!(events.try_recv().is_err());
}

#[tokio::test]
async fn test_list_notes() {
    let (app, _state) = create_test_app();
    let (token, _user_id) = register_and_login(&app, "alice").await;

    for title in ["First", "Second"] {
        let request = Request::builder()
            .method("POST")
            .uri("/api/notes")
            .header("content-type", "application/json")
            .header("authorization", format!("Bearer {}", token))
            .body(Body::from(
                json!({ "title": title, "content": "body" }).to_string(),
            ))
            .unwrap();
        app.clone().oneshot(request).await.unwrap();
    }

    let request = Request::builder()
        .method("GET")
        .uri("/api/notes")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), 200);

    let notes = json_body(response).await;
    assert_eq!(notes.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_note_broadcasts() {
    let (app, state) = create_test_app();
    let (token, user_id) = register_and_login(&app, "alice").await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/notes")
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::from(
            json!({ "title": "Draft", "content": "v1" }).to_string(),
        ))
        .unwrap();
    let note = json_body(app.clone().oneshot(request).await.unwrap()).await;
    let note_id = note["id"].as_str().unwrap();

    let mut events = state.realtime.hub().subscribe_events();

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/api/notes/{}", note_id))
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::from(
            json!({ "title": "Draft", "content": "v2" }).to_string(),
        ))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), 200);

    let updated = json_body(response).await;
    assert_eq!(updated["content"], "v2");
    // Author is immutable across updates
    assert_eq!(updated["author"], Value::String(user_id));

    let event = events.try_recv().unwrap();
    assert!(matches!(event, NoteEvent::NoteUpdated { note } if note.content == "v2"));
}

#[tokio::test]
async fn test_update_missing_note_is_isolated() {
    let (app, state) = create_test_app();
    let (token, _user_id) = register_and_login(&app, "alice").await;
    let mut events = state.realtime.hub().subscribe_events();

    let request = Request::builder()
        .method("PUT")
        .uri("/api/notes/does-not-exist")
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::from(
            json!({ "title": "x", "content": "y" }).to_string(),
        ))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), 404);

    // NotFound is reported to the caller only, with zero broadcast events
    assert!(events.try_recv().is_err());
}

#[tokio::test]
async fn test_delete_note_broadcasts() {
    let (app, state) = create_test_app();
    let (token, _user_id) = register_and_login(&app, "alice").await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/notes")
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::from(
            json!({ "title": "Doomed", "content": "body" }).to_string(),
        ))
        .unwrap();
    let note = json_body(app.clone().oneshot(request).await.unwrap()).await;
    let note_id = note["id"].as_str().unwrap().to_string();

    let mut events = state.realtime.hub().subscribe_events();

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/notes/{}", note_id))
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), 200);

    let event = events.try_recv().unwrap();
    assert!(matches!(event, NoteEvent::NoteDeleted { note_id: id } if id == note_id));

    // Deleting again is a 404
    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/notes/{}", note_id))
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_health_and_stats() {
    let (app, _state) = create_test_app();

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(json_body(response).await["status"], "ok");

    let request = Request::builder()
        .method("GET")
        .uri("/api/realtime/stats")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), 200);
    let stats = json_body(response).await;
    assert_eq!(stats["current_connections"], 0);
}
