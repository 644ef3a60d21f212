//! Authentication API endpoints: register, login, logout.

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use jot_auth::{parse_bearer, PublicAccount};
use serde::{Deserialize, Serialize};

use crate::api::{ApiError, AppState};

/// Creates the authentication API routes.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
}

/// Request to register a new account.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Request to log in.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response for a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Bearer token, shown only once.
    pub token: String,
    /// The logged-in account.
    pub user: PublicAccount,
}

/// Register a new account.
async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let account = state.auth.register(req.username, req.email, req.password)?;

    Ok((StatusCode::CREATED, Json(account.to_public())))
}

/// Log in and receive a bearer token.
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (token, account) = state.auth.login(&req.email, &req.password)?;

    Ok(Json(LoginResponse {
        token,
        user: account.to_public(),
    }))
}

/// Revoke the presented bearer token. Always succeeds.
async fn logout(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    if let Some(token) = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(parse_bearer)
    {
        state.auth.logout(token);
    }

    Json(serde_json::json!({ "message": "logged out" }))
}
