use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Strategy catalog
        .route("/strategies", get(handlers::list_strategies))
        .route("/strategies/:tier", get(handlers::get_strategy))
        .route("/strategies/:tier/confirm", post(handlers::confirm_strategy))
        // Assistant session control
        .route("/assistant/session", get(handlers::get_session_status))
        .route("/assistant/session/start", post(handlers::start_session))
        .route("/assistant/session/stop", post(handlers::stop_session))
        // Transcript queries
        .route("/assistant/transcript", get(handlers::get_transcript))
        .route(
            "/assistant/transcript/latest",
            get(handlers::get_latest_transcript),
        )
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
