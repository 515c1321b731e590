//! Analysis result types.

use serde::{Deserialize, Serialize};

/// Threat categories a message can be classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreatCategory {
    /// No meaningful threat content.
    Safe,
    /// Explosive references at high aggregate risk.
    TerrorRelated,
    /// Cyber attack or related illegal activity.
    IllegalActivity,
    /// Violence or weapon references with supporting context.
    ViolentIntent,
    /// Urgency-driven content that may need fast review.
    EmergencyWarning,
    /// Elevated risk without a specific category signal.
    Suspicious,
}

impl ThreatCategory {
    /// Returns all available categories.
    pub fn all() -> &'static [ThreatCategory] {
        &[
            ThreatCategory::Safe,
            ThreatCategory::TerrorRelated,
            ThreatCategory::IllegalActivity,
            ThreatCategory::ViolentIntent,
            ThreatCategory::EmergencyWarning,
            ThreatCategory::Suspicious,
        ]
    }

    /// Returns a human-readable name for this category.
    pub fn name(&self) -> &'static str {
        match self {
            ThreatCategory::Safe => "Safe",
            ThreatCategory::TerrorRelated => "Terror Related",
            ThreatCategory::IllegalActivity => "Illegal Activity",
            ThreatCategory::ViolentIntent => "Violent Intent",
            ThreatCategory::EmergencyWarning => "Emergency Warning",
            ThreatCategory::Suspicious => "Suspicious",
        }
    }
}

/// Ordered severity label derived from category rules and score thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ThreatLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl ThreatLevel {
    /// Returns a human-readable name for this level.
    pub fn name(&self) -> &'static str {
        match self {
            ThreatLevel::Low => "LOW",
            ThreatLevel::Medium => "MEDIUM",
            ThreatLevel::High => "HIGH",
            ThreatLevel::Critical => "CRITICAL",
        }
    }
}

/// Triage band for presentation, derived from the final risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriagePriority {
    Green,
    Yellow,
    Red,
}

/// Score at or above which a result is banded RED.
pub const PRIORITY_RED_AT: u8 = 75;

/// Score at or above which a result is banded YELLOW.
pub const PRIORITY_YELLOW_AT: u8 = 40;

impl TriagePriority {
    /// Derives the triage band for a risk score.
    pub fn from_score(score: u8) -> Self {
        if score >= PRIORITY_RED_AT {
            TriagePriority::Red
        } else if score >= PRIORITY_YELLOW_AT {
            TriagePriority::Yellow
        } else {
            TriagePriority::Green
        }
    }

    /// Returns the presentation banner for this band.
    pub fn label(&self) -> &'static str {
        match self {
            TriagePriority::Red => "RED - HIGH RISK",
            TriagePriority::Yellow => "YELLOW - SUSPICIOUS",
            TriagePriority::Green => "GREEN - SAFE",
        }
    }
}

/// The detector layer an indicator originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    KeywordSignals,
    ContextAnalysis,
    BehavioralIndicators,
}

impl Layer {
    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Layer::KeywordSignals => "Keyword Signals",
            Layer::ContextAnalysis => "Context Analysis",
            Layer::BehavioralIndicators => "Behavioral Indicators",
        }
    }
}

/// One recorded detection event.
///
/// Indicators are appended in detection order, not severity order. The
/// weight is informational once the layer totals are computed; in
/// particular, the benign-context indicator's negative weight is never
/// re-applied to any score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Indicator {
    /// The matched phrase, verbatim from the lower-cased text.
    pub phrase: String,
    /// Why the phrase was recorded.
    pub reason: String,
    /// Per-hit weight. Negative only for the benign-context indicator.
    pub weight: i32,
    /// The detector layer that produced this indicator.
    pub layer: Layer,
}

/// Per-layer score totals, each clamped to its own cap before summing.
///
/// Carried as `f64`: the context layer's damping factor produces fractional
/// totals, and rounding happens only once on the final aggregate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LayerScores {
    pub keyword: f64,
    pub context: f64,
    pub behavior: f64,
}

/// The output of one analysis call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Final aggregate risk, 0-100.
    pub risk_score: u8,
    /// First matching category from the ordered classification rules.
    pub category: ThreatCategory,
    /// Severity derived from the category rule and score thresholds.
    pub threat_level: ThreatLevel,
    /// 15-99 for non-empty input, 0 for empty input.
    pub confidence: u8,
    /// All detections, in detection order.
    pub indicators: Vec<Indicator>,
    /// Raw per-layer totals for diagnostics.
    pub layers: LayerScores,
}

impl AnalysisResult {
    /// The result for empty or whitespace-only input.
    pub fn empty_input() -> Self {
        Self {
            risk_score: 0,
            category: ThreatCategory::Safe,
            threat_level: ThreatLevel::Low,
            confidence: 0,
            indicators: Vec::new(),
            layers: LayerScores::default(),
        }
    }

    /// Derives the presentation triage band for this result.
    pub fn priority(&self) -> TriagePriority {
        TriagePriority::from_score(self.risk_score)
    }

    /// Returns indicators produced by a specific layer.
    pub fn indicators_for(&self, layer: Layer) -> Vec<&Indicator> {
        self.indicators.iter().filter(|i| i.layer == layer).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threat_levels_are_ordered() {
        assert!(ThreatLevel::Low < ThreatLevel::Medium);
        assert!(ThreatLevel::Medium < ThreatLevel::High);
        assert!(ThreatLevel::High < ThreatLevel::Critical);
    }

    #[test]
    fn category_all_returns_all_variants() {
        assert_eq!(ThreatCategory::all().len(), 6);
    }

    #[test]
    fn category_names_are_display_strings() {
        assert_eq!(ThreatCategory::TerrorRelated.name(), "Terror Related");
        assert_eq!(ThreatCategory::EmergencyWarning.name(), "Emergency Warning");
    }

    #[test]
    fn priority_banding_thresholds() {
        assert_eq!(TriagePriority::from_score(0), TriagePriority::Green);
        assert_eq!(TriagePriority::from_score(39), TriagePriority::Green);
        assert_eq!(TriagePriority::from_score(40), TriagePriority::Yellow);
        assert_eq!(TriagePriority::from_score(74), TriagePriority::Yellow);
        assert_eq!(TriagePriority::from_score(75), TriagePriority::Red);
        assert_eq!(TriagePriority::from_score(100), TriagePriority::Red);
    }

    #[test]
    fn empty_input_result_is_all_zero() {
        let result = AnalysisResult::empty_input();
        assert_eq!(result.risk_score, 0);
        assert_eq!(result.category, ThreatCategory::Safe);
        assert_eq!(result.threat_level, ThreatLevel::Low);
        assert_eq!(result.confidence, 0);
        assert!(result.indicators.is_empty());
        assert_eq!(result.layers, LayerScores::default());
    }

    #[test]
    fn layer_names_match_display_strings() {
        assert_eq!(Layer::KeywordSignals.name(), "Keyword Signals");
        assert_eq!(Layer::ContextAnalysis.name(), "Context Analysis");
        assert_eq!(Layer::BehavioralIndicators.name(), "Behavioral Indicators");
    }

    #[test]
    fn category_serializes_snake_case() {
        let json = serde_json::to_string(&ThreatCategory::TerrorRelated).unwrap();
        assert_eq!(json, "\"terror_related\"");
    }

    #[test]
    fn threat_level_serializes_uppercase() {
        let json = serde_json::to_string(&ThreatLevel::Critical).unwrap();
        assert_eq!(json, "\"CRITICAL\"");
    }
}
