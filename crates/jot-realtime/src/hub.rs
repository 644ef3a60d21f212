//! Event hub for managing real-time connections and broadcasting.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, info};

use crate::client::{create_client, Client, ClientId, ClientReceiver};
use crate::error::RealtimeError;
use crate::event::NoteEvent;

/// Capacity of the broadcast mirror channel.
const BROADCAST_CAPACITY: usize = 1024;

/// Maximum number of concurrent connections.
const MAX_CONNECTIONS: usize = 10000;

/// Event hub manages all real-time connections and event broadcasting.
///
/// The hub is a fan-out sink, not a sequencer: `publish` delivers one event
/// to every registered connection in call order, best-effort, with no
/// acknowledgment and no retry. Publishing with zero connections is a no-op.
#[derive(Debug)]
pub struct EventHub {
    /// Connected clients indexed by ID.
    clients: RwLock<HashMap<ClientId, Arc<Client>>>,
    /// Mirror channel for in-process listeners.
    event_tx: broadcast::Sender<NoteEvent>,
    /// Statistics.
    stats: RwLock<HubStats>,
}

impl EventHub {
    /// Create a new event hub.
    pub fn new() -> Self {
        let (event_tx, _) = broadcast::channel(BROADCAST_CAPACITY);
        Self {
            clients: RwLock::new(HashMap::new()),
            event_tx,
            stats: RwLock::new(HubStats::default()),
        }
    }

    /// Register a new connection and return its message receiver.
    pub fn connect(&self) -> Result<(Arc<Client>, ClientReceiver), RealtimeError> {
        let clients = self.clients.read();
        if clients.len() >= MAX_CONNECTIONS {
            return Err(RealtimeError::SendFailed(
                "maximum connections reached".to_string(),
            ));
        }
        drop(clients);

        let client_id = uuid::Uuid::new_v4().to_string();
        let (client, receiver) = create_client(client_id.clone());

        self.clients
            .write()
            .insert(client_id.clone(), client.clone());
        self.stats.write().total_connections += 1;

        info!(client_id = %client_id, "Client connected");

        Ok((client, receiver))
    }

    /// Unregister a connection, returning it for presence cleanup.
    ///
    /// Unknown ids are an idempotent no-op.
    pub fn disconnect(&self, client_id: &str) -> Option<Arc<Client>> {
        let client = self.clients.write().remove(client_id);
        if client.is_some() {
            info!(client_id = %client_id, "Client disconnected");
        }
        client
    }

    /// Get a client by ID.
    pub fn get_client(&self, client_id: &str) -> Option<Arc<Client>> {
        self.clients.read().get(client_id).cloned()
    }

    /// Broadcast an event to every connected client.
    pub fn publish(&self, event: NoteEvent) {
        let json = match serde_json::to_string(&event) {
            Ok(json) => json,
            Err(e) => {
                debug!(error = %e, "Failed to serialize event");
                return;
            }
        };

        let mut recipient_count = 0;
        let clients = self.clients.read();
        for client in clients.values() {
            // A closed receiver just means the connection is going away
            if client.send(json.clone()).is_ok() {
                recipient_count += 1;
            }
        }
        drop(clients);

        debug!(
            note_id = %event.note_id(),
            recipients = recipient_count,
            "Event broadcast"
        );

        // Mirror for in-process listeners
        let _ = self.event_tx.send(event);

        self.stats.write().total_events += 1;
    }

    /// Subscribe to the in-process mirror of the event stream.
    pub fn subscribe_events(&self) -> broadcast::Receiver<NoteEvent> {
        self.event_tx.subscribe()
    }

    /// Get current connection count.
    pub fn connection_count(&self) -> usize {
        self.clients.read().len()
    }

    /// Get hub statistics.
    pub fn stats(&self) -> HubStats {
        let mut stats = self.stats.read().clone();
        stats.current_connections = self.connection_count();
        stats
    }
}

impl Default for EventHub {
    fn default() -> Self {
        Self::new()
    }
}

/// Hub statistics.
#[derive(Debug, Clone, Default)]
pub struct HubStats {
    /// Current number of connections.
    pub current_connections: usize,
    /// Total connections since start.
    pub total_connections: u64,
    /// Total events broadcast since start.
    pub total_events: u64,
}
