//! HTTP API assembly for the Jot node.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use jot_auth::{parse_bearer, AuthError, AuthStore};
use jot_realtime::EventRouter;
use jot_store::{NoteStore, StoreError};
use jot_types::UserId;
use serde::Serialize;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{auth_api, notes_api, realtime_api};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Note store.
    pub notes: Arc<NoteStore>,
    /// Account and session store.
    pub auth: Arc<AuthStore>,
    /// Real-time event router.
    pub realtime: Arc<EventRouter>,
}

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Store(StoreError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Auth(AuthError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Auth(AuthError::AlreadyExists(_)) => StatusCode::CONFLICT,
            ApiError::Auth(AuthError::InvalidCredentials)
            | ApiError::Auth(AuthError::InvalidTokenFormat)
            | ApiError::Auth(AuthError::InvalidToken)
            | ApiError::Auth(AuthError::Unauthenticated) => StatusCode::UNAUTHORIZED,
            ApiError::Auth(AuthError::Crypto(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Verify the bearer token on a request and return the authenticated user.
pub fn authenticate(state: &AppState, headers: &axum::http::HeaderMap) -> Result<UserId, ApiError> {
    let header = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AuthError::Unauthenticated)?;

    let token = parse_bearer(header).ok_or(AuthError::Unauthenticated)?;

    Ok(state.auth.verify(token)?)
}

/// Creates the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Feature routes
        .merge(auth_api::auth_routes())
        .merge(notes_api::notes_routes())
        .merge(realtime_api::realtime_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jot_realtime::EventHub;

    #[test]
    fn test_error_status_mapping() {
        let cases = [
            (
                ApiError::Store(StoreError::Validation("empty".into())),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::Store(StoreError::NotFound("n1".into())),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::Auth(AuthError::InvalidCredentials),
                StatusCode::UNAUTHORIZED,
            ),
            (
                ApiError::Auth(AuthError::AlreadyExists("x".into())),
                StatusCode::CONFLICT,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_authenticate_rejects_missing_header() {
        let state = AppState {
            notes: Arc::new(NoteStore::new()),
            auth: Arc::new(AuthStore::new()),
            realtime: Arc::new(EventRouter::new(Arc::new(EventHub::new()))),
        };

        let headers = axum::http::HeaderMap::new();
        assert!(matches!(
            authenticate(&state, &headers),
            Err(ApiError::Auth(AuthError::Unauthenticated))
        ));
    }
}
