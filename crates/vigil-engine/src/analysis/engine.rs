//! The analysis pipeline.
//!
//! Data flows strictly forward: raw text, trimmed and lower-cased, is fed
//! through the three independent detector layers; their clamped totals are
//! summed, the benign-context offset is applied, and the classifier
//! consumes the final score plus the full indicator list.

use std::sync::LazyLock;

use tracing::debug;

use super::behavior::BehaviorScorer;
use super::classify::{self, Classifier};
use super::context::ContextAnalyzer;
use super::keyword::KeywordScorer;
use super::report::{AnalysisResult, Indicator, Layer, LayerScores};
use super::safety::SafetyOffsets;

/// Weight recorded on the benign-context indicator. Informational only;
/// the actual reduction is computed by the safety offset.
const BENIGN_INDICATOR_WEIGHT: i32 = -8;

const BENIGN_REASON: &str = "Benign context reduced risk (fiction/media context)";

/// Multi-layer threat scorer.
///
/// Holds the compiled pattern tables; construction compiles every pattern
/// and panics on a malformed one. All tables are read-only afterwards, so a
/// single instance can serve unsynchronized concurrent calls.
pub struct ThreatAnalyzer {
    keyword: KeywordScorer,
    context: ContextAnalyzer,
    behavior: BehaviorScorer,
    safety: SafetyOffsets,
    classifier: Classifier,
}

impl ThreatAnalyzer {
    /// Creates an analyzer with the default pattern tables.
    pub fn new() -> Self {
        Self {
            keyword: KeywordScorer::new(),
            context: ContextAnalyzer::new(),
            behavior: BehaviorScorer::new(),
            safety: SafetyOffsets::new(),
            classifier: Classifier::new(),
        }
    }

    /// Scores a message. Total over its input domain: any string produces a
    /// result, and empty or whitespace-only input short-circuits to the
    /// zero result without running any detector.
    pub fn analyze(&self, raw_text: &str) -> AnalysisResult {
        let text = raw_text.trim();
        if text.is_empty() {
            return AnalysisResult::empty_input();
        }

        let lower = text.to_lowercase();

        let keyword = self.keyword.score(&lower);
        let keyword_detected = keyword.score > 0.0;
        let context = self.context.score(&lower, keyword_detected);
        let behavior = self.behavior.score(&lower);

        let raw_total = keyword.score + context.score + behavior.score;
        let adjusted = self.safety.apply(&lower, raw_total);
        let risk_score = adjusted.adjusted.round().clamp(0.0, 100.0) as u8;

        let mut indicators = keyword.indicators;
        indicators.extend(context.indicators);
        indicators.extend(behavior.indicators);

        if !adjusted.matched.is_empty() {
            indicators.push(Indicator {
                phrase: adjusted.matched.join(", "),
                reason: BENIGN_REASON.to_string(),
                weight: BENIGN_INDICATOR_WEIGHT,
                layer: Layer::ContextAnalysis,
            });
        }

        let (category, threat_level) = self.classifier.classify(risk_score, &indicators);
        let confidence = classify::confidence(risk_score, indicators.len());

        debug!(
            risk_score,
            category = category.name(),
            threat_level = threat_level.name(),
            indicators = indicators.len(),
            "analysis complete"
        );

        AnalysisResult {
            risk_score,
            category,
            threat_level,
            confidence,
            indicators,
            layers: LayerScores {
                keyword: keyword.score,
                context: context.score,
                behavior: behavior.score,
            },
        }
    }
}

impl Default for ThreatAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

static DEFAULT_ANALYZER: LazyLock<ThreatAnalyzer> = LazyLock::new(ThreatAnalyzer::new);

/// Scores a message with the process-wide default analyzer.
///
/// The analyzer is built on first use and shared by all callers; concurrent
/// calls need no coordination.
pub fn analyze(raw_text: &str) -> AnalysisResult {
    DEFAULT_ANALYZER.analyze(raw_text)
}
