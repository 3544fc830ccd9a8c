use std::time::Duration;

use crate::models::FusionReport;

/// Downstream consumer that persists ranked results for citation display and analytics.
pub trait IRetrievalSink: Send + Sync {
    /// Record one fusion call. `latency` covers provider calls plus fusion.
    fn record(&self, query: &str, report: &FusionReport, latency: Duration);
}
