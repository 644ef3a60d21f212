//! Client connection management.

use jot_types::UserId;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::error::RealtimeError;

/// Unique identifier for a connected client.
pub type ClientId = String;

/// A connected real-time client.
///
/// A connection is associated with zero or one user identity. The identity
/// is attached lazily: each presence message a connection sends records its
/// user as the connection's last-known user, which is what disconnect
/// cleanup operates on.
#[derive(Debug)]
pub struct Client {
    /// Unique client identifier.
    pub id: ClientId,
    /// Channel for sending messages to this client.
    sender: mpsc::UnboundedSender<String>,
    /// Last-known user identity on this connection.
    identity: RwLock<Option<UserId>>,
}

impl Client {
    /// Create a new client with a message sender.
    pub fn new(id: ClientId, sender: mpsc::UnboundedSender<String>) -> Self {
        Self {
            id,
            sender,
            identity: RwLock::new(None),
        }
    }

    /// Send a message to this client.
    pub fn send(&self, message: String) -> Result<(), RealtimeError> {
        self.sender
            .send(message)
            .map_err(|_| RealtimeError::ChannelClosed)
    }

    /// Record the user identity behind this connection.
    pub fn bind_identity(&self, user_id: UserId) {
        *self.identity.write() = Some(user_id);
    }

    /// The connection's last-known user, if any.
    pub fn identity(&self) -> Option<UserId> {
        self.identity.read().clone()
    }
}

/// Handle for receiving messages from the hub to send over the transport.
pub type ClientReceiver = mpsc::UnboundedReceiver<String>;

/// Create a new client with its message receiver.
pub fn create_client(id: ClientId) -> (Arc<Client>, ClientReceiver) {
    let (sender, receiver) = mpsc::unbounded_channel();
    let client = Arc::new(Client::new(id, sender));
    (client, receiver)
}
