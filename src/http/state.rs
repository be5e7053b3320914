use crate::catalog::SwipeConfirm;
use crate::session::VoiceSessionController;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// The assistant's single voice session
    pub assistant: VoiceSessionController,

    /// Gesture used to evaluate confirm swipes
    pub swipe: SwipeConfirm,
}

impl AppState {
    pub fn new(assistant: VoiceSessionController) -> Self {
        Self {
            assistant,
            swipe: SwipeConfirm::default(),
        }
    }
}
