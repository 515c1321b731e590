//! Multi-layer threat analysis.
//!
//! Five components run as a single synchronous pipeline over the normalized
//! input text: keyword signal scoring, context analysis (damped when no
//! keyword fired), behavioral indicator scoring, the benign-context safety
//! offset, and final category/confidence classification.

mod behavior;
mod classify;
mod context;
mod engine;
mod keyword;
mod report;
mod safety;

pub use behavior::{BehaviorScorer, BEHAVIOR_LAYER_CAP};
pub use classify::{Classifier, MAX_CONFIDENCE, MIN_CONFIDENCE, SAFE_BELOW};
pub use context::{ContextAnalyzer, CONTEXT_LAYER_CAP, NO_KEYWORD_DAMPING};
pub use engine::{analyze, ThreatAnalyzer};
pub use keyword::{KeywordScorer, KEYWORD_LAYER_CAP};
pub use report::{
    AnalysisResult, Indicator, Layer, LayerScores, ThreatCategory, ThreatLevel, TriagePriority,
    PRIORITY_RED_AT, PRIORITY_YELLOW_AT,
};
pub use safety::{SafetyAdjustment, SafetyOffsets, MAX_REDUCTION, REDUCTION_PER_HIT};

/// A layer's clamped total plus the indicators it recorded.
pub struct LayerOutput {
    /// The clamped layer total.
    pub score: f64,
    /// Indicators recorded by the layer, in detection order.
    pub indicators: Vec<Indicator>,
}
