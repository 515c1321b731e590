//! Vigil Engine - multi-layer threat scoring for free-text messages.
//!
//! Scores a message for threat/risk content and explains the score with
//! human-readable indicators. Intended as a pre-filter/triage signal for
//! moderation or alerting pipelines, not a legal or forensic determination.
//!
//! The engine is a pure, synchronous function of its input: no I/O, no
//! cross-call state, no error taxonomy. Pattern tables are compiled once
//! and are safe for unsynchronized concurrent reads.
//!
//! ## Example
//!
//! ```
//! use vigil_engine::{analyze, ThreatCategory};
//!
//! let result = analyze("We watched a movie about a bomb disposal team. Purely fictional.");
//! assert_eq!(result.category, ThreatCategory::Safe);
//! assert!(result.risk_score < 20);
//! ```

pub mod analysis;

pub use analysis::{
    analyze, AnalysisResult, Indicator, Layer, LayerScores, ThreatAnalyzer, ThreatCategory,
    ThreatLevel, TriagePriority,
};
