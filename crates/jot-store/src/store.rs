//! In-memory note store.

use jot_types::{unix_now, Note, NoteId, UserId};
use parking_lot::RwLock;
use std::collections::HashMap;

use crate::error::{Result, StoreError};

/// Maximum length of a note title.
pub const MAX_TITLE_LENGTH: usize = 256;

/// Maximum length of a note body.
pub const MAX_CONTENT_LENGTH: usize = 65536;

/// Thread-safe in-memory store for note records.
#[derive(Debug, Default)]
pub struct NoteStore {
    /// Notes by ID.
    notes: RwLock<HashMap<NoteId, Note>>,
}

impl NoteStore {
    /// Create a new empty note store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new note.
    pub fn create(&self, title: String, content: String, author: UserId) -> Result<Note> {
        validate_fields(&title, &content)?;

        let note = Note::new(
            uuid::Uuid::new_v4().to_string(),
            title,
            content,
            author,
            unix_now(),
        );

        self.notes.write().insert(note.id.clone(), note.clone());
        Ok(note)
    }

    /// Get a note by ID.
    pub fn get(&self, id: &str) -> Result<Note> {
        self.notes
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// List all notes, most recently modified first.
    pub fn list(&self) -> Vec<Note> {
        let mut notes: Vec<Note> = self.notes.read().values().cloned().collect();
        notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(a.id.cmp(&b.id)));
        notes
    }

    /// Update a note's title and content. The author is immutable.
    pub fn update(&self, id: &str, title: String, content: String) -> Result<Note> {
        validate_fields(&title, &content)?;

        let mut notes = self.notes.write();
        let note = notes
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        note.title = title;
        note.content = content;
        note.updated_at = unix_now();

        Ok(note.clone())
    }

    /// Delete a note by ID.
    pub fn delete(&self, id: &str) -> Result<()> {
        self.notes
            .write()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Number of stored notes.
    pub fn count(&self) -> usize {
        self.notes.read().len()
    }
}

/// Validate note fields before a write.
fn validate_fields(title: &str, content: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(StoreError::Validation("title cannot be empty".to_string()));
    }
    if title.len() > MAX_TITLE_LENGTH {
        return Err(StoreError::Validation(format!(
            "title exceeds {} characters",
            MAX_TITLE_LENGTH
        )));
    }
    if content.trim().is_empty() {
        return Err(StoreError::Validation(
            "content cannot be empty".to_string(),
        ));
    }
    if content.len() > MAX_CONTENT_LENGTH {
        return Err(StoreError::Validation(format!(
            "content exceeds {} characters",
            MAX_CONTENT_LENGTH
        )));
    }
    Ok(())
}
