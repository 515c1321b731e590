//! API request and response models.

use serde::{Deserialize, Serialize};
use vigil_engine::{AnalysisResult, Layer, ThreatCategory, ThreatLevel, TriagePriority};

/// Request body for POST /api/analyze.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// The message text to score.
    pub text: String,
}

/// Indicator entry in the response.
#[derive(Debug, Serialize)]
pub struct IndicatorResponse {
    pub phrase: String,
    pub reason: String,
    pub weight: i32,
    pub layer: Layer,
}

/// Raw per-layer totals in the response.
#[derive(Debug, Serialize)]
pub struct LayerScoresResponse {
    pub keyword: f64,
    pub context: f64,
    pub behavior: f64,
}

/// Response body for POST /api/analyze.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    /// Final aggregate risk, 0-100.
    pub risk_score: u8,
    pub category: ThreatCategory,
    pub threat_level: ThreatLevel,
    /// 15-99 for non-empty input, 0 for empty input.
    pub confidence: u8,
    /// Presentation triage band derived from the risk score.
    pub priority: TriagePriority,
    /// All detections, in detection order.
    pub indicators: Vec<IndicatorResponse>,
    pub layers: LayerScoresResponse,
    /// Engine latency measured at this boundary.
    pub latency_ms: u64,
}

impl AnalyzeResponse {
    /// Builds a response from an engine result.
    pub fn from_result(result: AnalysisResult, latency_ms: u64) -> Self {
        let priority = result.priority();
        Self {
            risk_score: result.risk_score,
            category: result.category,
            threat_level: result.threat_level,
            confidence: result.confidence,
            priority,
            indicators: result
                .indicators
                .into_iter()
                .map(|i| IndicatorResponse {
                    phrase: i.phrase,
                    reason: i.reason,
                    weight: i.weight,
                    layer: i.layer,
                })
                .collect(),
            layers: LayerScoresResponse {
                keyword: result.layers.keyword,
                context: result.layers.context,
                behavior: result.layers.behavior,
            },
            latency_ms,
        }
    }
}

/// Response body for GET /api/health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
