//! Presence tracking: which users are editing which notes.

use jot_types::{NoteId, UserId};
use std::collections::{HashMap, HashSet};

/// Tracks, per note, the set of users currently editing it.
///
/// This is a plain owned state object with no interior locking; the event
/// router mutates it under a single-writer lock and never awaits while
/// holding it, so every mutation plus its returned snapshot is atomic.
///
/// Within one note each user appears at most once; a user may appear in
/// several notes' sets at the same time (multi-tab). A note's entry is
/// created lazily on the first start event and removed as soon as its set
/// empties, so the map never accumulates dead notes.
#[derive(Debug, Default)]
pub struct PresenceTracker {
    /// Editing sets by note ID.
    editors: HashMap<NoteId, HashSet<UserId>>,
}

impl PresenceTracker {
    /// Create a new empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a user to a note's editing set.
    ///
    /// Idempotent: adding an already-present member is a no-op that still
    /// yields the full set, so callers can re-broadcast under at-least-once
    /// delivery. Returns the post-mutation set, sorted for stable output.
    pub fn start_editing(&mut self, note_id: &str, user_id: &str) -> Vec<UserId> {
        let set = self.editors.entry(note_id.to_string()).or_default();
        set.insert(user_id.to_string());
        sorted(set)
    }

    /// Remove a user from a note's editing set.
    ///
    /// Removing an absent member is a no-op, not an error. Returns the
    /// post-mutation set; drops the note's entry entirely once empty.
    pub fn stop_editing(&mut self, note_id: &str, user_id: &str) -> Vec<UserId> {
        match self.editors.get_mut(note_id) {
            Some(set) => {
                set.remove(user_id);
                if set.is_empty() {
                    self.editors.remove(note_id);
                    Vec::new()
                } else {
                    sorted(set)
                }
            }
            None => Vec::new(),
        }
    }

    /// Remove a user from every note's editing set.
    ///
    /// Disconnect cleanup: returns each affected note with its post-removal
    /// set so the caller can broadcast one update per note.
    pub fn remove_user(&mut self, user_id: &str) -> Vec<(NoteId, Vec<UserId>)> {
        let mut affected = Vec::new();

        self.editors.retain(|note_id, set| {
            if set.remove(user_id) {
                affected.push((note_id.clone(), sorted(set)));
            }
            !set.is_empty()
        });

        affected.sort_by(|a, b| a.0.cmp(&b.0));
        affected
    }

    /// The current editing set for a note.
    pub fn editors(&self, note_id: &str) -> Vec<UserId> {
        self.editors.get(note_id).map(sorted).unwrap_or_default()
    }

    /// Number of notes with a non-empty editing set.
    pub fn note_count(&self) -> usize {
        self.editors.len()
    }
}

fn sorted(set: &HashSet<UserId>) -> Vec<UserId> {
    let mut users: Vec<UserId> = set.iter().cloned().collect();
    users.sort();
    users
}
