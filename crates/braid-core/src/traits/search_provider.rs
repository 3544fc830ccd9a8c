use crate::errors::BraidResult;
use crate::models::{RawResult, ScoreKind};

/// A dense or sparse search backend (pgvector, SPLADE column, full-text index, ...).
pub trait ISearchProvider: Send + Sync {
    /// Return up to `limit` results for `query`, best first.
    ///
    /// Implementations own their timeout and report it as
    /// `RetrievalError::ProviderTimeout`.
    fn search(&self, query: &str, limit: usize) -> BraidResult<Vec<RawResult>>;

    /// Convention of the `value` field in returned records.
    fn score_kind(&self) -> ScoreKind;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}
