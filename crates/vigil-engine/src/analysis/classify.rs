//! Category and confidence classification (layer 5).
//!
//! Classification is an ordered decision list: the first rule whose trigger
//! and score threshold both hold wins. Triggers re-scan the recorded
//! indicator text with secondary substring patterns rather than reusing the
//! signal rules' category labels; the two pattern sets are intentionally
//! not identical (a "pistol" keyword hit, for instance, never satisfies the
//! violent-intent trigger).

use regex::Regex;

use super::report::{Indicator, ThreatCategory, ThreatLevel};

/// Scores below this threshold are Safe regardless of indicators.
pub const SAFE_BELOW: u8 = 20;

/// Confidence bounds for non-empty input.
pub const MIN_CONFIDENCE: u8 = 15;
pub const MAX_CONFIDENCE: u8 = 99;

const SCORE_FACTOR: f64 = 0.65;
const INDICATOR_FACTOR: f64 = 2.4;

/// What a classification rule inspects.
enum Trigger {
    /// Substring pattern over every indicator phrase.
    Phrase(Regex),
    /// Substring over every lower-cased indicator reason.
    Reason(&'static str),
    /// Always fires; used by the fallback rule.
    Always,
}

impl Trigger {
    fn phrase(pattern: &str) -> Self {
        Trigger::Phrase(Regex::new(pattern).expect("invalid classification pattern"))
    }

    fn fires(&self, indicators: &[Indicator]) -> bool {
        match self {
            Trigger::Phrase(pattern) => indicators
                .iter()
                .any(|i| pattern.is_match(&i.phrase.to_lowercase())),
            Trigger::Reason(needle) => indicators
                .iter()
                .any(|i| i.reason.to_lowercase().contains(needle)),
            Trigger::Always => true,
        }
    }
}

/// One entry in the ordered decision list.
struct CategoryRule {
    trigger: Trigger,
    /// Minimum risk score (inclusive) for the rule to apply.
    min_score: u8,
    category: ThreatCategory,
    /// Score (inclusive) at which the escalated level applies.
    escalate_at: u8,
    base_level: ThreatLevel,
    escalated_level: ThreatLevel,
}

/// First-matching-rule-wins classifier.
pub struct Classifier {
    rules: Vec<CategoryRule>,
}

impl Classifier {
    /// Builds the default decision list, in priority order.
    pub fn new() -> Self {
        Self {
            rules: vec![
                CategoryRule {
                    trigger: Trigger::phrase("bomb|detonate|blast"),
                    min_score: 55,
                    category: ThreatCategory::TerrorRelated,
                    escalate_at: 80,
                    base_level: ThreatLevel::High,
                    escalated_level: ThreatLevel::Critical,
                },
                CategoryRule {
                    trigger: Trigger::phrase("hack|phish|ransomware|breach"),
                    min_score: 45,
                    category: ThreatCategory::IllegalActivity,
                    escalate_at: 70,
                    base_level: ThreatLevel::Medium,
                    escalated_level: ThreatLevel::High,
                },
                CategoryRule {
                    trigger: Trigger::phrase("kill|shoot|weapon|knife|gun|stab"),
                    min_score: 45,
                    category: ThreatCategory::ViolentIntent,
                    escalate_at: 75,
                    base_level: ThreatLevel::Medium,
                    escalated_level: ThreatLevel::High,
                },
                CategoryRule {
                    trigger: Trigger::Reason("urgency"),
                    min_score: 40,
                    category: ThreatCategory::EmergencyWarning,
                    escalate_at: 70,
                    base_level: ThreatLevel::Medium,
                    escalated_level: ThreatLevel::High,
                },
                CategoryRule {
                    trigger: Trigger::Always,
                    min_score: 0,
                    category: ThreatCategory::Suspicious,
                    escalate_at: 65,
                    base_level: ThreatLevel::Medium,
                    escalated_level: ThreatLevel::High,
                },
            ],
        }
    }

    /// Classifies a final risk score plus the full indicator list.
    pub fn classify(&self, score: u8, indicators: &[Indicator]) -> (ThreatCategory, ThreatLevel) {
        if score < SAFE_BELOW {
            return (ThreatCategory::Safe, ThreatLevel::Low);
        }

        for rule in &self.rules {
            if score >= rule.min_score && rule.trigger.fires(indicators) {
                let level = if score >= rule.escalate_at {
                    rule.escalated_level
                } else {
                    rule.base_level
                };
                return (rule.category, level);
            }
        }

        // Unreachable: the decision list ends with an Always rule.
        (ThreatCategory::Suspicious, ThreatLevel::Medium)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Confidence for a non-empty analysis, clamped to [15, 99].
pub(crate) fn confidence(score: u8, indicator_count: usize) -> u8 {
    let raw = f64::from(score) * SCORE_FACTOR + indicator_count as f64 * INDICATOR_FACTOR;
    raw.round()
        .clamp(f64::from(MIN_CONFIDENCE), f64::from(MAX_CONFIDENCE)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::report::Layer;

    fn classifier() -> Classifier {
        Classifier::new()
    }

    fn indicator(phrase: &str, reason: &str) -> Indicator {
        Indicator {
            phrase: phrase.to_string(),
            reason: reason.to_string(),
            weight: 10,
            layer: Layer::KeywordSignals,
        }
    }

    #[test]
    fn low_scores_are_safe_regardless_of_indicators() {
        let hits = vec![indicator("bomb", "Explosive reference detected")];
        assert_eq!(
            classifier().classify(19, &hits),
            (ThreatCategory::Safe, ThreatLevel::Low)
        );
    }

    #[test]
    fn explosive_phrase_at_threshold_is_terror_related() {
        let hits = vec![indicator("bomb", "Explosive reference detected")];
        assert_eq!(
            classifier().classify(55, &hits),
            (ThreatCategory::TerrorRelated, ThreatLevel::High)
        );
        assert_eq!(
            classifier().classify(80, &hits),
            (ThreatCategory::TerrorRelated, ThreatLevel::Critical)
        );
        assert_eq!(
            classifier().classify(79, &hits),
            (ThreatCategory::TerrorRelated, ThreatLevel::High)
        );
    }

    #[test]
    fn explosive_phrase_below_threshold_falls_through() {
        let hits = vec![indicator("bomb", "Explosive reference detected")];
        // 54 < 55 so the terror rule does not apply; fallback is Suspicious
        assert_eq!(
            classifier().classify(54, &hits),
            (ThreatCategory::Suspicious, ThreatLevel::Medium)
        );
    }

    #[test]
    fn cyber_phrase_is_illegal_activity() {
        let hits = vec![indicator("ransomware", "Cyber attack indicator detected")];
        assert_eq!(
            classifier().classify(45, &hits),
            (ThreatCategory::IllegalActivity, ThreatLevel::Medium)
        );
        assert_eq!(
            classifier().classify(70, &hits),
            (ThreatCategory::IllegalActivity, ThreatLevel::High)
        );
    }

    #[test]
    fn violence_phrase_is_violent_intent() {
        let hits = vec![indicator("gun", "Weapon reference detected")];
        assert_eq!(
            classifier().classify(45, &hits),
            (ThreatCategory::ViolentIntent, ThreatLevel::Medium)
        );
        assert_eq!(
            classifier().classify(75, &hits),
            (ThreatCategory::ViolentIntent, ThreatLevel::High)
        );
        assert_eq!(
            classifier().classify(74, &hits),
            (ThreatCategory::ViolentIntent, ThreatLevel::Medium)
        );
    }

    #[test]
    fn explosive_outranks_violence() {
        let hits = vec![
            indicator("gun", "Weapon reference detected"),
            indicator("bomb", "Explosive reference detected"),
        ];
        assert_eq!(
            classifier().classify(60, &hits),
            (ThreatCategory::TerrorRelated, ThreatLevel::High)
        );
    }

    #[test]
    fn urgency_reason_is_emergency_warning() {
        let hits = vec![indicator("hurry", "Urgency pressure signal")];
        assert_eq!(
            classifier().classify(40, &hits),
            (ThreatCategory::EmergencyWarning, ThreatLevel::Medium)
        );
        assert_eq!(
            classifier().classify(70, &hits),
            (ThreatCategory::EmergencyWarning, ThreatLevel::High)
        );
    }

    #[test]
    fn fallback_is_suspicious() {
        let hits = vec![indicator("station", "Potential target/location mention")];
        assert_eq!(
            classifier().classify(30, &hits),
            (ThreatCategory::Suspicious, ThreatLevel::Medium)
        );
        assert_eq!(
            classifier().classify(65, &hits),
            (ThreatCategory::Suspicious, ThreatLevel::High)
        );
    }

    #[test]
    fn pistol_does_not_satisfy_the_violence_trigger() {
        // The secondary phrase patterns are independent of the signal rule
        // labels; "pistol" scores as a weapon keyword but is absent here.
        let hits = vec![indicator("pistol", "Weapon reference detected")];
        assert_eq!(
            classifier().classify(50, &hits),
            (ThreatCategory::Suspicious, ThreatLevel::Medium)
        );
    }

    #[test]
    fn confidence_is_clamped_low() {
        assert_eq!(confidence(0, 0), MIN_CONFIDENCE);
        assert_eq!(confidence(10, 1), MIN_CONFIDENCE);
    }

    #[test]
    fn confidence_is_clamped_high() {
        assert_eq!(confidence(100, 50), MAX_CONFIDENCE);
    }

    #[test]
    fn confidence_rounds_the_weighted_sum() {
        // 57 * 0.65 + 9 * 2.4 = 58.65
        assert_eq!(confidence(57, 9), 59);
        // 45 * 0.65 + 5 * 2.4 = 41.25
        assert_eq!(confidence(45, 5), 41);
    }
}
