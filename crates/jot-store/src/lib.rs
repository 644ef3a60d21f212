//! # Jot Store
//!
//! Note persistence for the Jot collaborative note platform.
//!
//! The store is the CRUD collaborator of the real-time core: it owns the
//! note records and performs create/read/update/delete, returning the
//! resulting record or a typed error. The core never holds note state of
//! its own; completed store results are handed to the event router for
//! broadcast.

pub mod error;
pub mod store;

pub use error::StoreError;
pub use store::{NoteStore, MAX_CONTENT_LENGTH, MAX_TITLE_LENGTH};
