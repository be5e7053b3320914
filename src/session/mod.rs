//! Assistant voice session management
//!
//! This module provides the `VoiceSessionController` that manages:
//! - A single relay session at a time (idle → initializing → active)
//! - Ordered transcript collection from relay events
//! - The delayed greeting once the call is live
//! - Teardown on stop, call end and scope exit

mod config;
mod controller;
mod prompt;
mod state;

pub use config::{AssistantConfig, ModelConfig, PromptMessage, TranscriberConfig, VoiceConfig};
pub use controller::{MountGuard, VoiceSessionController};
pub use prompt::{GREETING, SYSTEM_PROMPT};
pub use state::{
    InitOutcome, Role, SessionState, SessionStats, TranscriptMessage, TranscriptUpdate,
};
