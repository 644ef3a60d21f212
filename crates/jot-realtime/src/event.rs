//! Wire-level event types.
//!
//! Events are transient: they exist only on the wire and are never
//! persisted. All messages are JSON with a `type` tag and camelCase
//! field names.

use jot_types::{Note, NoteId, UserId};
use serde::{Deserialize, Serialize};

/// A domain event describing a completed state change, broadcast to all
/// connected clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum NoteEvent {
    /// A note was created.
    NoteCreated { note: Note },
    /// A note's title or content changed.
    NoteUpdated { note: Note },
    /// A note was deleted.
    NoteDeleted { note_id: NoteId },
    /// The set of users editing a note changed.
    ActiveEditors { note_id: NoteId, editors: Vec<UserId> },
}

impl NoteEvent {
    /// The note this event concerns.
    pub fn note_id(&self) -> &str {
        match self {
            NoteEvent::NoteCreated { note } | NoteEvent::NoteUpdated { note } => &note.id,
            NoteEvent::NoteDeleted { note_id } | NoteEvent::ActiveEditors { note_id, .. } => {
                note_id
            }
        }
    }
}

/// Presence control messages clients send over the real-time channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum PresenceCommand {
    /// The user began editing a note.
    StartEditing { note_id: NoteId, user_id: UserId },
    /// The user stopped editing a note.
    StopEditing { note_id: NoteId, user_id: UserId },
    /// Keepalive.
    Ping,
}

/// Direct replies sent to a single client, never broadcast.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerReply {
    /// Pong response to ping.
    Pong,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_note() -> Note {
        Note::new(
            "note-1".into(),
            "Title".into(),
            "Body".into(),
            "alice".into(),
            1_700_000_000,
        )
    }

    #[test]
    fn test_note_event_wire_names() {
        let json = serde_json::to_string(&NoteEvent::NoteCreated {
            note: sample_note(),
        })
        .unwrap();
        assert!(json.contains("\"type\":\"noteCreated\""));

        let json = serde_json::to_string(&NoteEvent::NoteDeleted {
            note_id: "note-1".into(),
        })
        .unwrap();
        assert!(json.contains("\"type\":\"noteDeleted\""));
        assert!(json.contains("\"noteId\":\"note-1\""));

        let json = serde_json::to_string(&NoteEvent::ActiveEditors {
            note_id: "note-1".into(),
            editors: vec!["alice".into(), "bob".into()],
        })
        .unwrap();
        assert!(json.contains("\"type\":\"activeEditors\""));
        assert!(json.contains("\"editors\":[\"alice\",\"bob\"]"));
    }

    #[test]
    fn test_presence_command_parse() {
        let cmd: PresenceCommand =
            serde_json::from_str(r#"{"type":"startEditing","noteId":"n1","userId":"alice"}"#)
                .unwrap();
        assert!(matches!(
            cmd,
            PresenceCommand::StartEditing { note_id, user_id }
                if note_id == "n1" && user_id == "alice"
        ));

        let cmd: PresenceCommand =
            serde_json::from_str(r#"{"type":"stopEditing","noteId":"n1","userId":"alice"}"#)
                .unwrap();
        assert!(matches!(cmd, PresenceCommand::StopEditing { .. }));

        let cmd: PresenceCommand = serde_json::from_str(r#"{"type":"ping"}"#).unwrap();
        assert!(matches!(cmd, PresenceCommand::Ping));
    }

    #[test]
    fn test_presence_command_missing_fields_rejected() {
        // A start without a userId is malformed and must not parse
        assert!(
            serde_json::from_str::<PresenceCommand>(r#"{"type":"startEditing","noteId":"n1"}"#)
                .is_err()
        );
        assert!(serde_json::from_str::<PresenceCommand>(r#"{"type":"unknown"}"#).is_err());
    }

    #[test]
    fn test_note_event_note_id() {
        let event = NoteEvent::NoteUpdated {
            note: sample_note(),
        };
        assert_eq!(event.note_id(), "note-1");

        let event = NoteEvent::ActiveEditors {
            note_id: "n2".into(),
            editors: vec![],
        };
        assert_eq!(event.note_id(), "n2");
    }

    #[test]
    fn test_server_reply_pong() {
        let json = serde_json::to_string(&ServerReply::Pong).unwrap();
        assert_eq!(json, r#"{"type":"pong"}"#);
    }
}
