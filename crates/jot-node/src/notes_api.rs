//! # Notes API
//!
//! Bearer-authenticated CRUD over shared notes:
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/api/notes` | List all notes |
//! | POST | `/api/notes` | Create a note |
//! | PUT | `/api/notes/{id}` | Update title and content |
//! | DELETE | `/api/notes/{id}` | Delete a note |
//!
//! Every successful mutation is forwarded to the event router, which
//! broadcasts it to all connected real-time clients. Failed operations are
//! reported to the caller only and never produce a broadcast.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;

use crate::api::{authenticate, ApiError, AppState};

/// Creates the notes API routes.
pub fn notes_routes() -> Router<AppState> {
    Router::new()
        .route("/api/notes", get(list_notes).post(create_note))
        .route("/api/notes/{id}", put(update_note).delete(delete_note))
}

/// Request to create a note.
#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    pub title: String,
    pub content: String,
}

/// Request to update a note.
#[derive(Debug, Deserialize)]
pub struct UpdateNoteRequest {
    pub title: String,
    pub content: String,
}

/// List all notes.
async fn list_notes(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    authenticate(&state, &headers)?;

    Ok(Json(state.notes.list()))
}

/// Create a note authored by the authenticated user.
async fn create_note(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<CreateNoteRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let author = authenticate(&state, &headers)?;

    let note = state.notes.create(req.title, req.content, author)?;
    state.realtime.note_created(note.clone());

    Ok((StatusCode::CREATED, Json(note)))
}

/// Update a note's title and content.
async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(req): Json<UpdateNoteRequest>,
) -> Result<impl IntoResponse, ApiError> {
    authenticate(&state, &headers)?;

    let note = state.notes.update(&id, req.title, req.content)?;
    state.realtime.note_updated(note.clone());

    Ok(Json(note))
}

/// Delete a note.
async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    authenticate(&state, &headers)?;

    state.notes.delete(&id)?;
    state.realtime.note_deleted(id);

    Ok(Json(serde_json::json!({ "message": "note deleted" })))
}
