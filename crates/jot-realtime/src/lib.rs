//! # Jot Real-time
//!
//! Real-time presence and broadcast core for the Jot note platform.
//!
//! This crate tracks which users are editing which notes and fans out
//! note-change events to every connected client:
//!
//! - **Event Hub**: connection registry and best-effort fan-out sink
//! - **Presence Tracker**: per-note editing sets with set semantics
//! - **Event Router**: dispatches CRUD results and presence commands
//!
//! ## Example
//!
//! ```rust
//! use jot_realtime::{EventHub, EventRouter, PresenceCommand};
//! use std::sync::Arc;
//!
//! let hub = Arc::new(EventHub::new());
//! let router = EventRouter::new(hub.clone());
//!
//! // Register a connection
//! let (client, mut receiver) = router.connect().unwrap();
//!
//! // The client declares that alice is editing a note
//! router.handle_presence(
//!     &client,
//!     PresenceCommand::StartEditing {
//!         note_id: "note1".to_string(),
//!         user_id: "alice".to_string(),
//!     },
//! );
//!
//! // Every connection receives the updated editor set
//! let frame = receiver.try_recv().unwrap();
//! assert!(frame.contains("activeEditors"));
//! ```
//!
//! ## Wire Protocol
//!
//! ### Client -> Server Messages
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
//!
//! ### Server -> Client Messages
//!
//! ```json
//! // Note lifecycle
//! {"type": "noteCreated", "note": {...}}
//! {"type": "noteUpdated", "note": {...}}
//! {"type": "noteDeleted", "noteId": "..."}
//!
//! // Presence update
//! {"type": "activeEditors", "noteId": "...", "editors": ["..."]}
//!
//! // Pong response
//! {"type": "pong"}
//! ```
//!
//! ## Delivery semantics
//!
//! Broadcast is best-effort with no acknowledgment: events published by a
//! single mutation reach each connection in publish order, but no ordering
//! holds across independent mutations racing concurrently. CRUD failures
//! never produce events; malformed presence messages are dropped. A
//! disconnect removes the connection's last-known user from every editing
//! set and broadcasts the shrunken sets, so no ghost editors survive.

pub mod client;
pub mod error;
pub mod event;
pub mod hub;
pub mod presence;
pub mod router;

// Re-export main types
pub use client::{Client, ClientId, ClientReceiver};
pub use error::RealtimeError;
pub use event::{NoteEvent, PresenceCommand, ServerReply};
pub use hub::{EventHub, HubStats};
pub use presence::PresenceTracker;
pub use router::EventRouter;
