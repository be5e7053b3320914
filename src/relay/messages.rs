use serde::{Deserialize, Serialize};

use crate::session::{AssistantConfig, ModelConfig, TranscriberConfig};

/// Event delivered by the relay for a live session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum RelayEvent {
    #[serde(rename = "call-start")]
    SessionStarted,
    #[serde(rename = "message")]
    Message { message: RelayMessage },
    #[serde(rename = "call-end")]
    SessionEnded,
    #[serde(rename = "error")]
    Error { error: String },
}

/// Payload of a `message` event; `kind` discriminates the payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayMessage {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript: Option<TranscriptPayload>,
}

impl RelayMessage {
    pub const TRANSCRIPT: &'static str = "transcript";

    pub fn transcript(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: Self::TRANSCRIPT.to_string(),
            transcript: Some(TranscriptPayload {
                speaker: speaker.into(),
                text: text.into(),
            }),
        }
    }

    pub fn is_transcript(&self) -> bool {
        self.kind == Self::TRANSCRIPT
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptPayload {
    pub speaker: String,
    pub text: String,
}

/// Start request published to the relay
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartSessionRequest {
    pub session_id: String,
    pub transcriber: TranscriberConfig,
    pub model: ModelConfig,
    pub voice: VoiceSettings,
    pub name: String,
    pub timestamp: String, // RFC3339 timestamp
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceSettings {
    pub provider: String,
    pub voice_id: String,
}

impl StartSessionRequest {
    pub fn new(session_id: &str, config: &AssistantConfig) -> Self {
        Self {
            session_id: session_id.to_string(),
            transcriber: config.transcriber.clone(),
            model: config.model.clone(),
            voice: VoiceSettings {
                provider: config.voice.provider.clone(),
                voice_id: config.voice.voice_id.clone(),
            },
            name: config.name.clone(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Outbound utterance spoken by the assistant
#[derive(Debug, Serialize, Deserialize)]
pub struct SayRequest {
    pub session_id: String,
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StopRequest {
    pub session_id: String,
    pub timestamp: String,
}
