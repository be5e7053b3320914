pub mod catalog;
pub mod config;
pub mod http;
pub mod relay;
pub mod session;

pub use catalog::{Investment, InvestmentFlow, Strategy, StrategyTier, SwipeConfirm, SwipeOutcome};
pub use config::Config;
pub use http::{create_router, AppState};
pub use relay::{NatsRelay, RelayConnector, RelayError, RelayEvent, RelayMessage, RelaySession};
pub use session::{
    AssistantConfig, InitOutcome, MountGuard, Role, SessionState, SessionStats,
    TranscriptMessage, TranscriptUpdate, VoiceSessionController,
};
