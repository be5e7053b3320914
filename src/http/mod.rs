//! HTTP API for the view layer
//!
//! This module provides a REST API over the catalog and the assistant session:
//! - GET /strategies - List strategy tiers
//! - GET /strategies/:tier - Strategy and investment detail
//! - POST /strategies/:tier/confirm - Evaluate a confirm swipe
//! - POST /assistant/session/start - Initialize the voice session
//! - POST /assistant/session/stop - Tear the voice session down
//! - GET /assistant/session - Query session status
//! - GET /assistant/transcript - Get accumulated transcript
//! - GET /assistant/transcript/latest - Latest transcript entry
//! - GET /health - Health check

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
