//! The shared note record.

use serde::{Deserialize, Serialize};

use crate::UserId;

/// Unique identifier for a note.
pub type NoteId = String;

/// A shared note.
///
/// Owned by the persistence layer; the real-time core only transits
/// records through itself and never holds an independent copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique note identifier.
    pub id: NoteId,
    /// Note title (never empty).
    pub title: String,
    /// Note body (never empty).
    pub content: String,
    /// User who created the note. Immutable after creation.
    pub author: UserId,
    /// Unix timestamp of the last modification.
    pub updated_at: u64,
}

impl Note {
    /// Create a new note record stamped with the given timestamp.
    pub fn new(
        id: NoteId,
        title: String,
        content: String,
        author: UserId,
        updated_at: u64,
    ) -> Self {
        Self {
            id,
            title,
            content,
            author,
            updated_at,
        }
    }
}
