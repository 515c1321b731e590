//! Keyword signal scoring (layer 1).
//!
//! Detects explicit high-severity terms using pre-compiled regex patterns.
//! This layer is the primary severity source: explicit mentions of weapons,
//! violence, explosives, cyber attack terms, hazardous substances, and
//! illegal acts.

use regex::Regex;

use super::report::{Indicator, Layer};
use super::LayerOutput;

/// Maximum total the keyword layer can contribute.
pub const KEYWORD_LAYER_CAP: f64 = 55.0;

/// A static signal rule: pattern, per-hit weight, and category label.
struct SignalRule {
    pattern: Regex,
    weight: i32,
    label: &'static str,
}

impl SignalRule {
    fn new(pattern: &str, weight: i32, label: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("invalid signal rule pattern"),
            weight,
            label,
        }
    }
}

/// Scores explicit threat keywords.
///
/// Every non-overlapping match contributes its rule's weight and emits one
/// indicator; the layer total is clamped so repeated hits cannot dominate
/// the aggregate.
pub struct KeywordScorer {
    rules: Vec<SignalRule>,
}

impl KeywordScorer {
    /// Creates a scorer with the default signal rules.
    pub fn new() -> Self {
        Self {
            rules: Self::build_rules(),
        }
    }

    // Boundaries anchor only the outer alternatives of each alternation;
    // inner terms match inside longer words ("shoot" fires on "shooting").
    fn build_rules() -> Vec<SignalRule> {
        vec![
            SignalRule::new(r"\bkill|shoot|stab|murder\b", 18, "Violence verb"),
            SignalRule::new(r"\bbomb|explode|detonate|blast\b", 24, "Explosive reference"),
            SignalRule::new(r"\bweapon|gun|rifle|knife|pistol\b", 20, "Weapon reference"),
            SignalRule::new(r"\bkidnap|hostage|abduct\b", 20, "Abduction indicator"),
            SignalRule::new(
                r"\bhack|breach|phish|ransomware|malware\b",
                16,
                "Cyber attack indicator",
            ),
            SignalRule::new(r"\bpoison|toxic|chemical\b", 14, "Harmful substance"),
            SignalRule::new(r"\bbreak\s?in|rob|steal|smuggle\b", 12, "Illegal activity reference"),
        ]
    }

    /// Scans lower-cased text and returns the clamped layer total plus one
    /// indicator per match.
    pub fn score(&self, text: &str) -> LayerOutput {
        let mut score = 0;
        let mut indicators = Vec::new();

        for rule in &self.rules {
            for hit in rule.pattern.find_iter(text) {
                score += rule.weight;
                indicators.push(Indicator {
                    phrase: hit.as_str().to_string(),
                    reason: format!("{} detected", rule.label),
                    weight: rule.weight,
                    layer: Layer::KeywordSignals,
                });
            }
        }

        LayerOutput {
            score: f64::from(score).clamp(0.0, KEYWORD_LAYER_CAP),
            indicators,
        }
    }
}

impl Default for KeywordScorer {
    fn default() -> Self {
        Self::new()
    }
}
