//! Context analysis (layer 2).
//!
//! Detects planning/future-intent phrasing, target or location mentions,
//! and instructional language. Context on its own is a weaker signal than
//! context co-occurring with an explicit keyword, so the layer total is
//! damped when the keyword layer found nothing. The damping applies only to
//! the total: indicators keep their full per-hit weights.

use regex::Regex;

use super::report::{Indicator, Layer};
use super::LayerOutput;

/// Maximum total the context layer can contribute.
pub const CONTEXT_LAYER_CAP: f64 = 30.0;

/// Factor applied to the layer total when no keyword signal fired.
pub const NO_KEYWORD_DAMPING: f64 = 0.6;

/// Per-hit weight for planning/future-intent phrasing.
const PLANNING_WEIGHT: i32 = 8;

/// Per-hit weight for target/location mentions.
const TARGET_WEIGHT: i32 = 10;

/// Per-hit weight for instructional phrasing.
const INSTRUCTION_WEIGHT: i32 = 9;

const PLANNING_REASON: &str = "Planning or future intent indicator";
const TARGET_REASON: &str = "Potential target/location mention";
const INSTRUCTION_REASON: &str = "Instructional or action-oriented language";

/// Scores planning, target, and instruction phrasing.
pub struct ContextAnalyzer {
    planning: Vec<Regex>,
    targets: Vec<Regex>,
    instructions: Vec<Regex>,
}

impl ContextAnalyzer {
    /// Creates an analyzer with the default pattern families.
    ///
    /// Alternations anchor only their outer alternatives, so inner terms
    /// match inside longer words ("station" fires on "stations").
    pub fn new() -> Self {
        Self {
            planning: compile(&[
                r"\bi\s+will\b",
                r"\bwe\s+are\s+going\s+to\b",
                r"\bgoing\s+to\b",
                r"\bplan\s+to\b",
                r"\btomorrow|tonight|next\s+week|at\s+\d{1,2}(:\d{2})?\b",
            ]),
            targets: compile(&[
                r"\bschool|station|airport|hospital|mall|office|embassy\b",
                r"\bpolice|security|guards|civilians|crowd\b",
                r"\bmy\s+boss|that\s+guy|target\b",
            ]),
            instructions: compile(&[
                r"\bbring|plant|hide|execute|enter|open|take\s+out\b",
                r"\bmake\s+sure|step\s+1|step\s+2|instructions\b",
            ]),
        }
    }

    /// Scans lower-cased text. `keyword_detected` is true iff the keyword
    /// layer scored above zero on the same text.
    pub fn score(&self, text: &str, keyword_detected: bool) -> LayerOutput {
        let mut indicators = Vec::new();

        collect(&self.planning, text, PLANNING_REASON, PLANNING_WEIGHT, &mut indicators);
        collect(&self.targets, text, TARGET_REASON, TARGET_WEIGHT, &mut indicators);
        collect(
            &self.instructions,
            text,
            INSTRUCTION_REASON,
            INSTRUCTION_WEIGHT,
            &mut indicators,
        );

        let mut score: f64 = indicators.iter().map(|i| f64::from(i.weight)).sum();

        if !keyword_detected && !indicators.is_empty() {
            score *= NO_KEYWORD_DAMPING;
        }

        LayerOutput {
            score: score.clamp(0.0, CONTEXT_LAYER_CAP),
            indicators,
        }
    }
}

impl Default for ContextAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("invalid context pattern"))
        .collect()
}

fn collect(
    patterns: &[Regex],
    text: &str,
    reason: &str,
    weight: i32,
    indicators: &mut Vec<Indicator>,
) {
    for pattern in patterns {
        for hit in pattern.find_iter(text) {
            indicators.push(Indicator {
                phrase: hit.as_str().to_string(),
                reason: reason.to_string(),
                weight,
                layer: Layer::ContextAnalysis,
            });
        }
    }
}
