//! Real-time WebSocket API for live updates.
//!
//! This module provides the WebSocket endpoints for real-time
//! communication:
//!
//! - `/ws` - Main WebSocket endpoint for presence and note events
//! - `/api/realtime/stats` - Statistics about real-time connections
//!
//! ## WebSocket Protocol
//!
//! Clients declare editing activity; the server broadcasts note changes
//! and editor sets to every connection:
//!
//! ```json
//! // Declare editing
//! {"type": "startEditing", "noteId": "...", "userId": "..."}
//!
//! // Stop editing
//! {"type": "stopEditing", "noteId": "...", "userId": "..."}
//!
//! // Ping for keepalive
//! {"type": "ping"}
//! ```

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use futures_util::{SinkExt, StreamExt};
use jot_realtime::{EventRouter, PresenceCommand};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::api::AppState;

/// Create the real-time API routes.
pub fn realtime_routes() -> Router<AppState> {
    Router::new()
        .route("/ws", get(ws_handler))
        .route("/api/realtime/stats", get(get_stats))
}

/// WebSocket upgrade handler.
async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state.realtime.clone()))
}

/// Handle a WebSocket connection.
async fn handle_socket(socket: WebSocket, router: Arc<EventRouter>) {
    // Register the connection with the hub
    let (client, mut receiver) = match router.connect() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to connect client: {}", e);
            return;
        }
    };

    let client_id = client.id.clone();
    info!(client_id = %client_id, "WebSocket client connected");

    // Split the WebSocket into sender and receiver
    let (mut ws_sender, mut ws_receiver) = socket.split();

    // Spawn a task to forward messages from the hub to the WebSocket
    let client_id_clone = client_id.clone();
    let send_task = tokio::spawn(async move {
        while let Some(msg) = receiver.recv().await {
            if ws_sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
        debug!(client_id = %client_id_clone, "Send task ended");
    });

    // Handle incoming messages from the WebSocket
    while let Some(msg) = ws_receiver.next().await {
        match msg {
            Ok(Message::Text(text)) => {
                let text_str: &str = &text;
                match serde_json::from_str::<PresenceCommand>(text_str) {
                    Ok(cmd) => {
                        // Presence messages are fire-and-forget; only ping
                        // produces a direct reply
                        if let Some(reply) = router.handle_presence(&client, cmd) {
                            if let Ok(json) = serde_json::to_string(&reply) {
                                let _ = client.send(json);
                            }
                        }
                    }
                    Err(e) => {
                        // Malformed presence messages are dropped, never fatal
                        debug!(client_id = %client_id, error = %e, "Dropping malformed message");
                    }
                }
            }
            Ok(Message::Close(_)) => {
                debug!(client_id = %client_id, "WebSocket close received");
                break;
            }
            Ok(Message::Ping(data)) => {
                // Axum handles pong automatically, but log it
                debug!(client_id = %client_id, "Ping received, len={}", data.len());
            }
            Ok(Message::Pong(_)) => {
                // Ignore pong
            }
            Ok(Message::Binary(_)) => {
                // We don't support binary messages
                debug!(client_id = %client_id, "Binary message ignored");
            }
            Err(e) => {
                error!(client_id = %client_id, error = %e, "WebSocket error");
                break;
            }
        }
    }

    // Clean up: unregister and drop the user's presence entries
    send_task.abort();
    router.disconnect(&client_id);
    info!(client_id = %client_id, "WebSocket client disconnected");
}

/// Statistics response.
#[derive(Serialize)]
struct StatsResponse {
    current_connections: usize,
    total_connections: u64,
    total_events: u64,
}

/// Get real-time connection statistics.
async fn get_stats(State(state): State<AppState>) -> impl IntoResponse {
    let stats = state.realtime.hub().stats();
    Json(StatsResponse {
        current_connections: stats.current_connections,
        total_connections: stats.total_connections,
        total_events: stats.total_events,
    })
}
