use super::state::AppState;
use crate::catalog::{Investment, InvestmentFlow, Strategy, StrategyTier, SwipeOutcome};
use crate::session::{InitOutcome, SessionStats};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use tracing::info;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct StrategyDetailResponse {
    pub strategy: Strategy,
    pub investment: Investment,
}

#[derive(Debug, Deserialize)]
pub struct ConfirmRequest {
    /// Horizontal drag distance at release, in pixels
    pub offset_px: f32,
}

#[derive(Debug, Serialize)]
pub struct ConfirmResponse {
    pub tier: StrategyTier,
    pub progress: f32,
    pub outcome: SwipeOutcome,
}

#[derive(Debug, Serialize)]
pub struct StopSessionResponse {
    pub status: String,
    pub stats: SessionStats,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorResponse { error })).into_response()
}

fn parse_tier(tier: &str) -> Result<StrategyTier, Response> {
    tier.parse::<StrategyTier>()
        .map_err(|e| error_response(StatusCode::NOT_FOUND, e.to_string()))
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /strategies
pub async fn list_strategies() -> impl IntoResponse {
    let strategies: Vec<Strategy> = StrategyTier::ALL.iter().map(|t| t.strategy()).collect();
    (StatusCode::OK, Json(strategies))
}

/// GET /strategies/:tier
pub async fn get_strategy(Path(tier): Path<String>) -> Response {
    let tier = match parse_tier(&tier) {
        Ok(tier) => tier,
        Err(response) => return response,
    };

    (
        StatusCode::OK,
        Json(StrategyDetailResponse {
            strategy: tier.strategy(),
            investment: tier.investment(),
        }),
    )
        .into_response()
}

/// POST /strategies/:tier/confirm
/// Evaluate a confirm swipe released at the given offset
pub async fn confirm_strategy(
    State(state): State<AppState>,
    Path(tier): Path<String>,
    Json(req): Json<ConfirmRequest>,
) -> Response {
    let tier = match parse_tier(&tier) {
        Ok(tier) => tier,
        Err(response) => return response,
    };

    let mut flow = InvestmentFlow::new(state.swipe);
    flow.select(tier);
    flow.open_confirm();
    flow.drag(req.offset_px);
    let progress = flow.progress();

    let outcome = flow.release(req.offset_px).unwrap_or(SwipeOutcome::Reset);

    (
        StatusCode::OK,
        Json(ConfirmResponse {
            tier,
            progress,
            outcome,
        }),
    )
        .into_response()
}

/// POST /assistant/session/start
/// Initialize the voice session; repeated calls are no-ops while one is live
pub async fn start_session(State(state): State<AppState>) -> impl IntoResponse {
    let outcome = state.assistant.initialize().await;

    let status = match &outcome {
        InitOutcome::Started { .. } => StatusCode::OK,
        InitOutcome::AlreadyRunning => StatusCode::CONFLICT,
        InitOutcome::Cancelled => StatusCode::CONFLICT,
        InitOutcome::Failed { .. } => StatusCode::BAD_GATEWAY,
    };

    (status, Json(outcome))
}

/// POST /assistant/session/stop
pub async fn stop_session(State(state): State<AppState>) -> impl IntoResponse {
    state.assistant.teardown().await;
    info!("Assistant session stopped via API");

    (
        StatusCode::OK,
        Json(StopSessionResponse {
            status: "stopped".to_string(),
            stats: state.assistant.stats().await,
        }),
    )
}

/// GET /assistant/session
pub async fn get_session_status(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.assistant.stats().await))
}

/// GET /assistant/transcript
pub async fn get_transcript(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.assistant.transcript().await))
}

/// GET /assistant/transcript/latest
pub async fn get_latest_transcript(State(state): State<AppState>) -> Response {
    match state.assistant.latest_message().await {
        Some(message) => (StatusCode::OK, Json(message)).into_response(),
        None => error_response(StatusCode::NOT_FOUND, "Transcript is empty".to_string()),
    }
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
