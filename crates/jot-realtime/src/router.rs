//! Event routing between CRUD results, presence commands, and the hub.

use jot_types::{Note, NoteId};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::debug;

use crate::client::{Client, ClientReceiver};
use crate::error::RealtimeError;
use crate::event::{NoteEvent, PresenceCommand, ServerReply};
use crate::hub::EventHub;
use crate::presence::PresenceTracker;

/// Dispatches inbound events to the presence tracker and the hub.
///
/// Two input sources feed the router: completed CRUD results from the
/// persistence layer, forwarded verbatim to the hub, and presence commands
/// from connections, which mutate the tracker and broadcast the updated
/// set. The router performs no filtering, no authorization, and no
/// deduplication.
///
/// The tracker lives behind a single mutex and every mutation happens
/// synchronously while it is held, together with the resulting publish, so
/// presence updates reach the hub in mutation order.
#[derive(Debug)]
pub struct EventRouter {
    /// The broadcast hub.
    hub: Arc<EventHub>,
    /// Presence state, single-writer.
    presence: Mutex<PresenceTracker>,
}

impl EventRouter {
    /// Create a router around an event hub.
    pub fn new(hub: Arc<EventHub>) -> Self {
        Self {
            hub,
            presence: Mutex::new(PresenceTracker::new()),
        }
    }

    /// The underlying hub.
    pub fn hub(&self) -> &Arc<EventHub> {
        &self.hub
    }

    /// Register a new connection.
    pub fn connect(&self) -> Result<(Arc<Client>, ClientReceiver), RealtimeError> {
        self.hub.connect()
    }

    /// Unregister a connection and clean up its presence entries.
    ///
    /// The connection's last-known user is removed from every note's
    /// editing set and one `activeEditors` update is broadcast per affected
    /// note. Without this, a closed tab would leave a ghost editor behind.
    pub fn disconnect(&self, client_id: &str) {
        let Some(client) = self.hub.disconnect(client_id) else {
            return;
        };
        let Some(user_id) = client.identity() else {
            return;
        };

        let mut presence = self.presence.lock();
        let affected = presence.remove_user(&user_id);
        for (note_id, editors) in affected {
            self.hub.publish(NoteEvent::ActiveEditors { note_id, editors });
        }
    }

    /// Forward a completed note creation to all clients.
    pub fn note_created(&self, note: Note) {
        self.hub.publish(NoteEvent::NoteCreated { note });
    }

    /// Forward a completed note update to all clients.
    pub fn note_updated(&self, note: Note) {
        self.hub.publish(NoteEvent::NoteUpdated { note });
    }

    /// Forward a completed note deletion to all clients.
    pub fn note_deleted(&self, note_id: NoteId) {
        self.hub.publish(NoteEvent::NoteDeleted { note_id });
    }

    /// Handle a presence command from a connection.
    ///
    /// Start/stop commands are fire-and-forget: they mutate the tracker and
    /// broadcast the updated set, with no reply to the sender. Commands with
    /// an empty note or user id are dropped. Only `ping` produces a direct
    /// reply.
    pub fn handle_presence(
        &self,
        client: &Arc<Client>,
        command: PresenceCommand,
    ) -> Option<ServerReply> {
        match command {
            PresenceCommand::StartEditing { note_id, user_id } => {
                if note_id.is_empty() || user_id.is_empty() {
                    debug!(client_id = %client.id, "Dropping malformed presence message");
                    return None;
                }
                client.bind_identity(user_id.clone());

                let mut presence = self.presence.lock();
                let editors = presence.start_editing(&note_id, &user_id);
                debug!(client_id = %client.id, note_id = %note_id, user_id = %user_id, "Start editing");
                self.hub.publish(NoteEvent::ActiveEditors { note_id, editors });
                None
            }
            PresenceCommand::StopEditing { note_id, user_id } => {
                if note_id.is_empty() || user_id.is_empty() {
                    debug!(client_id = %client.id, "Dropping malformed presence message");
                    return None;
                }
                client.bind_identity(user_id.clone());

                let mut presence = self.presence.lock();
                let editors = presence.stop_editing(&note_id, &user_id);
                debug!(client_id = %client.id, note_id = %note_id, user_id = %user_id, "Stop editing");
                self.hub.publish(NoteEvent::ActiveEditors { note_id, editors });
                None
            }
            PresenceCommand::Ping => Some(ServerReply::Pong),
        }
    }

    /// The current editing set for a note.
    pub fn editors(&self, note_id: &str) -> Vec<jot_types::UserId> {
        self.presence.lock().editors(note_id)
    }
}
