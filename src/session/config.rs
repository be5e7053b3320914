use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::prompt::{GREETING, SYSTEM_PROMPT};

/// Configuration for an assistant voice session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Speech-to-text settings
    pub transcriber: TranscriberConfig,

    /// Response generation settings, including the fixed system prompt
    pub model: ModelConfig,

    /// Speech synthesis settings
    pub voice: VoiceConfig,

    /// Human-readable session name shown by the relay
    pub name: String,

    /// Text spoken once the session is confirmed live
    pub greeting: String,

    /// Delay between session start and the greeting
    /// Default: 1000ms
    pub greeting_delay_ms: u64,

    /// Tear the session down when the relay reports an error.
    /// Off by default: errors are logged and the session stays active.
    pub teardown_on_error: bool,
}

impl AssistantConfig {
    pub fn greeting_delay(&self) -> Duration {
        Duration::from_millis(self.greeting_delay_ms)
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            transcriber: TranscriberConfig::default(),
            model: ModelConfig::default(),
            voice: VoiceConfig::default(),
            name: "SwarmFund AI Assistant".to_string(),
            greeting: GREETING.to_string(),
            greeting_delay_ms: 1000,
            teardown_on_error: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriberConfig {
    pub provider: String,
    pub model: String,
    pub language: String,
}

impl Default for TranscriberConfig {
    fn default() -> Self {
        Self {
            provider: "deepgram".to_string(),
            model: "nova-2".to_string(),
            language: "en-US".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub provider: String,
    pub model: String,
    pub messages: Vec<PromptMessage>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            provider: "openai".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            messages: vec![PromptMessage {
                role: "system".to_string(),
                content: SYSTEM_PROMPT.to_string(),
            }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceConfig {
    pub provider: String,
    pub voice_id: String,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            provider: "11labs".to_string(),
            voice_id: "21m00Tcm4TlvDq8ikWAM".to_string(),
        }
    }
}
