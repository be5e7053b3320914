use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of the controller's single session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    #[default]
    Idle,
    Initializing,
    Active,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionState::Idle => "idle",
            SessionState::Initializing => "initializing",
            SessionState::Active => "active",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// `"assistant"` maps to the assistant, any other speaker is the user
    pub fn from_speaker(speaker: &str) -> Self {
        if speaker == "assistant" {
            Role::Assistant
        } else {
            Role::User
        }
    }
}

/// One speech turn in the transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptMessage {
    pub role: Role,
    pub content: String,
}

/// Change notification for transcript observers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptUpdate {
    /// A new session started and the transcript was cleared
    Reset,
    Appended(TranscriptMessage),
}

/// Result of an `initialize` call. Failures are reported here, never raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum InitOutcome {
    Started { session_id: String },
    /// A session was already initializing or active
    AlreadyRunning,
    /// Torn down before the connection finished opening
    Cancelled,
    Failed { reason: String },
}

/// Snapshot of the controller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStats {
    pub state: SessionState,

    /// Relay session identifier, while a session is held
    pub session_id: Option<String>,

    /// Incremented on every initialize, teardown and call end
    pub generation: u64,

    pub started_at: Option<DateTime<Utc>>,

    /// Number of transcript messages for the current or last session
    pub transcript_messages: usize,

    pub greetings_sent: usize,

    /// Last error reported by the relay or raised during initialization
    pub last_error: Option<String>,
}
