//! Benign-context safety offset (layer 4).
//!
//! Fiction, media, and roleplay markers reduce the aggregate score. With no
//! marker the score passes through untouched, including totals above 100;
//! the final clamp to [0, 100] belongs to the aggregator.

use regex::Regex;

/// Score reduction per benign marker hit.
pub const REDUCTION_PER_HIT: f64 = 8.0;

/// Maximum total reduction.
pub const MAX_REDUCTION: f64 = 25.0;

/// Outcome of applying the safety offset.
pub struct SafetyAdjustment {
    /// The (possibly reduced) aggregate score.
    pub adjusted: f64,
    /// Benign phrases matched, in detection order.
    pub matched: Vec<String>,
}

/// Detects benign-context markers and reduces the aggregate score.
pub struct SafetyOffsets {
    patterns: Vec<Regex>,
}

impl SafetyOffsets {
    /// Creates the default benign-marker patterns.
    ///
    /// Alternations anchor only their outer alternatives, so inner terms
    /// match inside longer words ("fiction" fires on "fictional", "game"
    /// on "endgame").
    pub fn new() -> Self {
        let patterns = [
            r"\bmovie|game|series|fiction|news\b",
            r"\battack\s+on\s+titan\b",
            r"\bscript|story|novel|roleplay\b",
        ];
        Self {
            patterns: patterns
                .iter()
                .map(|p| Regex::new(p).expect("invalid safety pattern"))
                .collect(),
        }
    }

    /// Applies the offset to the pre-clamp aggregate score.
    pub fn apply(&self, text: &str, score: f64) -> SafetyAdjustment {
        let mut matched = Vec::new();

        for pattern in &self.patterns {
            for hit in pattern.find_iter(text) {
                matched.push(hit.as_str().to_string());
            }
        }

        if matched.is_empty() {
            return SafetyAdjustment {
                adjusted: score,
                matched,
            };
        }

        let reduction = (matched.len() as f64 * REDUCTION_PER_HIT).clamp(0.0, MAX_REDUCTION);
        SafetyAdjustment {
            adjusted: (score - reduction).clamp(0.0, 100.0),
            matched,
        }
    }
}

impl Default for SafetyOffsets {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offsets() -> SafetyOffsets {
        SafetyOffsets::new()
    }

    #[test]
    fn no_marker_passes_score_through() {
        let adjustment = offsets().apply("we will strike at dawn", 105.0);
        assert_eq!(adjustment.adjusted, 105.0);
        assert!(adjustment.matched.is_empty());
    }

    #[test]
    fn single_marker_reduces_by_eight() {
        let adjustment = offsets().apply("it was just a movie", 50.0);
        assert_eq!(adjustment.adjusted, 42.0);
        assert_eq!(adjustment.matched, vec!["movie"]);
    }

    #[test]
    fn reduction_is_capped() {
        let adjustment = offsets().apply("movie game series news story", 90.0);
        assert_eq!(adjustment.matched.len(), 5);
        assert_eq!(adjustment.adjusted, 90.0 - MAX_REDUCTION);
    }

    #[test]
    fn reduced_score_does_not_go_negative() {
        let adjustment = offsets().apply("a movie script", 10.0);
        assert_eq!(adjustment.adjusted, 0.0);
    }

    #[test]
    fn fictional_counts_as_fiction_marker() {
        let adjustment = offsets().apply("purely fictional", 30.0);
        assert_eq!(adjustment.matched, vec!["fiction"]);
        assert_eq!(adjustment.adjusted, 22.0);
    }

    #[test]
    fn inner_marker_alternatives_match_inside_longer_words() {
        let adjustment = offsets().apply("we watched endgame last night", 40.0);
        assert_eq!(adjustment.matched, vec!["game"]);
        assert_eq!(adjustment.adjusted, 32.0);
    }

    #[test]
    fn markers_within_a_pattern_are_collected_in_text_order() {
        let adjustment = offsets().apply("a fiction movie", 50.0);
        assert_eq!(adjustment.matched, vec!["fiction", "movie"]);
        assert_eq!(adjustment.adjusted, 34.0);
    }

    #[test]
    fn franchise_title_is_a_marker() {
        let adjustment = offsets().apply("the attack on titan finale", 40.0);
        assert!(adjustment.matched.contains(&"attack on titan".to_string()));
    }
}
