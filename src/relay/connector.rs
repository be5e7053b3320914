use std::sync::Arc;
use tokio::sync::mpsc;

use super::error::RelayError;
use super::messages::RelayEvent;
use crate::session::AssistantConfig;

/// A freshly opened relay connection: the session handle plus its ordered
/// event stream.
pub struct RelayConnection {
    pub session: Arc<dyn RelaySession>,
    pub events: mpsc::Receiver<RelayEvent>,
}

/// Opens sessions on an external speech/LLM relay
///
/// Implementations:
/// - `NatsRelay`: relay reachable over NATS subjects
/// - test doubles that script events directly
#[async_trait::async_trait]
pub trait RelayConnector: Send + Sync {
    /// Open a connection and subscribe to its events.
    ///
    /// Events must be delivered on the returned channel in emission order.
    async fn connect(&self) -> Result<RelayConnection, RelayError>;

    /// Get connector name for logging
    fn name(&self) -> &str;
}

/// Handle to one live relay session
#[async_trait::async_trait]
pub trait RelaySession: Send + Sync {
    /// Relay-side session identifier
    fn id(&self) -> &str;

    /// Start the conversation with the given assistant configuration
    async fn start(&self, config: &AssistantConfig) -> Result<(), RelayError>;

    /// Speak a line as the assistant
    async fn say(&self, text: &str) -> Result<(), RelayError>;

    /// Stop the conversation and release relay resources
    async fn stop(&self) -> Result<(), RelayError>;
}
