//! # Jot Node
//!
//! Collaborative note server library.
//!
//! This crate wires the note store, the auth store, and the real-time
//! presence core into one axum application.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                       Jot Node                          │
//! ├─────────────────────────────────────────────────────────┤
//! │                                                         │
//! │  ┌──────────────────────────────────────────────────┐  │
//! │  │                 HTTP API Layer                    │  │
//! │  │  • Auth API (register, login, logout)            │  │
//! │  │  • Notes API (bearer-authenticated CRUD)         │  │
//! │  │  • WebSocket endpoint (/ws)                       │  │
//! │  └──────────────────────────────────────────────────┘  │
//! │               │                        │                │
//! │  ┌────────────▼───────────┐  ┌─────────▼────────────┐  │
//! │  │       Stores            │  │   Real-time Core     │  │
//! │  │  • NoteStore (CRUD)     │  │  • Event Router      │  │
//! │  │  • AuthStore (sessions) │  │  • Presence Tracker  │  │
//! │  └────────────────────────┘  │  • Event Hub         │  │
//! │                               └──────────────────────┘  │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! A successful note mutation flows from the HTTP handler through the
//! store, then into the event router, which broadcasts it to every open
//! WebSocket connection. Presence messages arrive over `/ws`, mutate the
//! editing sets, and fan back out as `activeEditors` updates.
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run --bin jot-node -- --api-addr 127.0.0.1:8080
//! ```
//!
//! ## Modules
//!
//! - [`api`] - Application state, error mapping, router assembly
//! - [`auth_api`] - Authentication endpoints
//! - [`notes_api`] - Note CRUD endpoints
//! - [`realtime_api`] - WebSocket endpoint and connection stats
//! - [`config`] - Node configuration
//! - [`observability`] - Structured logging

pub mod api;
pub mod auth_api;
pub mod config;
pub mod notes_api;
pub mod observability;
pub mod realtime_api;
