//! Application state for the API server.

use std::sync::Arc;

use vigil_engine::ThreatAnalyzer;

/// Shared application state.
///
/// The analyzer's pattern tables are read-only after construction, so it is
/// shared without locks; concurrent requests analyze independently.
#[derive(Clone)]
pub struct AppState {
    /// The threat analysis engine.
    pub analyzer: Arc<ThreatAnalyzer>,
}

impl AppState {
    /// Creates application state with a freshly built analyzer.
    pub fn new() -> Self {
        Self {
            analyzer: Arc::new(ThreatAnalyzer::new()),
        }
    }

    /// Creates application state around an existing analyzer.
    pub fn with_analyzer(analyzer: Arc<ThreatAnalyzer>) -> Self {
        Self { analyzer }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
