//! HybridRetriever: query both providers concurrently, then fuse.
//!
//! A provider failure degrades that side to an empty list. Only when both
//! sides fail does retrieval fail.

use std::time::Instant;

use braid_core::config::RetrievalConfig;
use braid_core::errors::{BraidResult, RetrievalError, ValidationError};
use braid_core::models::{FusionReport, RawResult};
use braid_core::traits::{IRetrievalSink, ISearchProvider};
use braid_observability::retrieval_span;
use tracing::{info, warn};

use crate::engine::FusionEngine;

pub struct HybridRetriever<'a> {
    dense: &'a dyn ISearchProvider,
    sparse: &'a dyn ISearchProvider,
    engine: FusionEngine,
    config: RetrievalConfig,
    /// Optional downstream logger for citations and analytics.
    sink: Option<&'a dyn IRetrievalSink>,
}

impl<'a> HybridRetriever<'a> {
    pub fn new(
        dense: &'a dyn ISearchProvider,
        sparse: &'a dyn ISearchProvider,
        engine: FusionEngine,
        config: RetrievalConfig,
    ) -> Self {
        Self {
            dense,
            sparse,
            engine,
            config,
            sink: None,
        }
    }

    /// Attach a retrieval sink that receives every successful report.
    pub fn with_sink(mut self, sink: &'a dyn IRetrievalSink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Retrieve with the configured `top_k`.
    pub fn retrieve(&self, query: &str) -> BraidResult<FusionReport> {
        self.retrieve_top_k(query, self.config.top_k)
    }

    pub fn retrieve_top_k(&self, query: &str, top_k: usize) -> BraidResult<FusionReport> {
        if top_k == 0 {
            return Err(ValidationError::InvalidTopK { top_k }.into());
        }

        let span = retrieval_span!(query, top_k);
        let _guard = span.enter();
        let started = Instant::now();

        let limit = self.config.provider_limit_for(top_k);
        let (dense, sparse) = rayon::join(
            || fetch(self.dense, query, limit),
            || fetch(self.sparse, query, limit),
        );

        let (dense, sparse) = match (dense, sparse) {
            (Err(d), Err(s)) => {
                return Err(RetrievalError::AllProvidersFailed {
                    dense: d.to_string(),
                    sparse: s.to_string(),
                }
                .into())
            }
            (d, s) => (
                degrade(d, self.dense.name()),
                degrade(s, self.sparse.name()),
            ),
        };

        let report = self.engine.fuse_report(query, &dense, &sparse, top_k)?;

        info!(
            dense = dense.len(),
            sparse = sparse.len(),
            returned = report.items.len(),
            query_class = ?report.query_class,
            "hybrid retrieval complete"
        );

        if let Some(sink) = self.sink {
            sink.record(query, &report, started.elapsed());
        }

        Ok(report)
    }
}

/// Run one provider and convert its values into distances.
fn fetch(
    provider: &dyn ISearchProvider,
    query: &str,
    limit: usize,
) -> BraidResult<Vec<RawResult>> {
    let kind = provider.score_kind();
    let results = provider.search(query, limit)?;
    Ok(results
        .into_iter()
        .map(|r| r.into_distance(kind))
        .collect())
}

fn degrade(result: BraidResult<Vec<RawResult>>, provider: &str) -> Vec<RawResult> {
    match result {
        Ok(results) => results,
        Err(err) => {
            warn!(provider, error = %err, "provider failed, fusing without it");
            Vec::new()
        }
    }
}
