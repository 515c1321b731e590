//! API route handlers.

use std::time::Instant;

use axum::extract::State;
use axum::Json;
use tracing::{debug, info};

use crate::models::{AnalyzeRequest, AnalyzeResponse, HealthResponse};
use crate::state::AppState;

/// POST /api/analyze - Score a message and return the full analysis.
///
/// Total over its input: any string yields a result, including empty text.
pub async fn analyze_text(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Json<AnalyzeResponse> {
    debug!(text_len = req.text.len(), "Analyzing message");

    let start = Instant::now();
    let result = state.analyzer.analyze(&req.text);
    let latency_ms = start.elapsed().as_millis() as u64;

    info!(
        risk_score = result.risk_score,
        category = result.category.name(),
        threat_level = result.threat_level.name(),
        indicators = result.indicators.len(),
        latency_ms,
        "Analysis complete"
    );

    Json(AnalyzeResponse::from_result(result, latency_ms))
}

/// GET /api/health - Liveness check.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
