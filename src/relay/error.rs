use thiserror::Error;

/// Errors raised while talking to the voice relay
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Failed to connect to relay at {url}: {reason}")]
    Connect { url: String, reason: String },

    #[error("Failed to subscribe to {subject}: {reason}")]
    Subscribe { subject: String, reason: String },

    #[error("Failed to publish to {subject}: {reason}")]
    Publish { subject: String, reason: String },

    #[error("Failed to encode relay message: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Relay session {0} is closed")]
    Closed(String),
}
