//! Behavioral indicator scoring (layer 3).
//!
//! Detects secrecy, urgency, and coordination language. No damping: the
//! layer total is the clamped sum of the hit weights.

use regex::Regex;

use super::report::{Indicator, Layer};
use super::LayerOutput;

/// Maximum total the behavior layer can contribute.
pub const BEHAVIOR_LAYER_CAP: f64 = 20.0;

const SECRECY_WEIGHT: i32 = 7;
const URGENCY_WEIGHT: i32 = 6;
const COORDINATION_WEIGHT: i32 = 7;

const SECRECY_REASON: &str = "Secrecy behavior signal";
const URGENCY_REASON: &str = "Urgency pressure signal";
const COORDINATION_REASON: &str = "Coordination behavior signal";

/// Scores secrecy, urgency, and coordination phrasing.
pub struct BehaviorScorer {
    secrecy: Vec<Regex>,
    urgency: Vec<Regex>,
    coordination: Vec<Regex>,
}

impl BehaviorScorer {
    /// Creates a scorer with the default pattern families.
    ///
    /// Alternations anchor only their outer alternatives, so inner terms
    /// match inside longer words ("now" fires on "nowhere").
    pub fn new() -> Self {
        Self {
            secrecy: compile(&[
                r"\bsecret|don'?t\s+tell|nobody\s+knows|quiet\b",
                r"\bencrypted|burn\s+after\s+reading\b",
            ]),
            urgency: compile(&[
                r"\bnow|urgent|asap|immediately|right\s+away\b",
                r"\bno\s+time|hurry\b",
            ]),
            coordination: compile(&[
                r"\bmeet|coordinate|sync|team|crew\b",
                r"\bconfirm|ready\?|execute\b",
            ]),
        }
    }

    /// Scans lower-cased text and returns the clamped layer total.
    pub fn score(&self, text: &str) -> LayerOutput {
        let mut indicators = Vec::new();

        collect(&self.secrecy, text, SECRECY_REASON, SECRECY_WEIGHT, &mut indicators);
        collect(&self.urgency, text, URGENCY_REASON, URGENCY_WEIGHT, &mut indicators);
        collect(
            &self.coordination,
            text,
            COORDINATION_REASON,
            COORDINATION_WEIGHT,
            &mut indicators,
        );

        let score: f64 = indicators.iter().map(|i| f64::from(i.weight)).sum();

        LayerOutput {
            score: score.clamp(0.0, BEHAVIOR_LAYER_CAP),
            indicators,
        }
    }
}

impl Default for BehaviorScorer {
    fn default() -> Self {
        Self::new()
    }
}

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("invalid behavior pattern"))
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
                layer: Layer::BehavioralIndicators,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> BehaviorScorer {
        BehaviorScorer::new()
    }

    #[test]
    fn no_hits_yields_zero() {
        let out = scorer().score("lovely weather for a picnic");
        assert_eq!(out.score, 0.0);
        assert!(out.indicators.is_empty());
    }

    #[test]
    fn secrecy_phrase_fires() {
        let out = scorer().score("make sure nobody knows");
        assert_eq!(out.score, 7.0);
        assert_eq!(out.indicators[0].reason, SECRECY_REASON);
        assert_eq!(out.indicators[0].phrase, "nobody knows");
    }

    #[test]
    fn urgency_and_coordination_sum() {
        let out = scorer().score("meet the crew now, hurry");
        // meet + crew (7 each), now + hurry (6 each)
        assert_eq!(out.score, BEHAVIOR_LAYER_CAP);
        assert_eq!(out.indicators.len(), 4);
    }

    #[test]
    fn layer_total_is_clamped() {
        let out = scorer().score("urgent now asap immediately hurry");
        assert_eq!(out.score, BEHAVIOR_LAYER_CAP);
        assert_eq!(out.indicators.len(), 5);
    }

    #[test]
    fn ready_question_mark_matches() {
        let out = scorer().score("everyone ready?");
        assert_eq!(out.score, 7.0);
        assert_eq!(out.indicators[0].reason, COORDINATION_REASON);
    }

    #[test]
    fn now_needs_a_leading_boundary() {
        let out = scorer().score("he knows nothing");
        assert_eq!(out.score, 0.0);
    }

    #[test]
    fn now_matches_at_the_start_of_longer_words() {
        let out = scorer().score("this road leads nowhere");
        assert_eq!(out.score, 6.0);
        assert_eq!(out.indicators[0].phrase, "now");
        assert_eq!(out.indicators[0].reason, URGENCY_REASON);
    }
}
