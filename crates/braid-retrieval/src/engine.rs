//! FusionEngine: weight policy → normalize → merge → emit.

use std::collections::HashMap;

use braid_core::config::WeightPolicyConfig;
use braid_core::errors::{BraidResult, ConfigError};
use braid_core::models::{
    Candidate, FusionReport, QueryClass, RankedItem, RawResult, SourceCounts, WeightPair,
};
use braid_observability::fusion_span;
use tracing::debug;

use crate::fusion::{emitter, merger};
use crate::normalize::normalize;
use crate::policy::WeightPolicy;

/// Stateless fusion pipeline. Immutable after construction, so one engine can
/// serve any number of concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct FusionEngine {
    policy: WeightPolicy,
}

impl FusionEngine {
    pub fn new(policy: WeightPolicy) -> Self {
        Self { policy }
    }

    pub fn from_config(config: &WeightPolicyConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(WeightPolicy::from_config(config)?))
    }

    pub fn policy(&self) -> &WeightPolicy {
        &self.policy
    }

    /// Fuse two result lists into at most `top_k` ranked items.
    pub fn fuse(
        &self,
        query: &str,
        dense_results: &[RawResult],
        sparse_results: &[RawResult],
        top_k: usize,
    ) -> BraidResult<Vec<RankedItem>> {
        Ok(self
            .fuse_report(query, dense_results, sparse_results, top_k)?
            .items)
    }

    /// Like [`fuse`](Self::fuse) but also returns weights and source counts.
    pub fn fuse_report(
        &self,
        query: &str,
        dense_results: &[RawResult],
        sparse_results: &[RawResult],
        top_k: usize,
    ) -> BraidResult<FusionReport> {
        let class = self.policy.classify(query);
        let weights = self.policy.weights_for(class);
        self.run(class, weights, dense_results, sparse_results, top_k)
    }

    /// Fuse with caller-pinned weights, bypassing the keyword policy.
    pub fn fuse_with_weights(
        &self,
        weights: WeightPair,
        dense_results: &[RawResult],
        sparse_results: &[RawResult],
        top_k: usize,
    ) -> BraidResult<FusionReport> {
        self.run(QueryClass::Pinned, weights, dense_results, sparse_results, top_k)
    }

    fn run(
        &self,
        class: QueryClass,
        weights: WeightPair,
        dense_results: &[RawResult],
        sparse_results: &[RawResult],
        top_k: usize,
    ) -> BraidResult<FusionReport> {
        let span = fusion_span!(class, top_k);
        let _guard = span.enter();

        let candidates = normalize(dense_results, sparse_results)?;
        let counts = count_sources(&candidates);
        let result = merger::merge(&candidates, weights, top_k)?;

        debug!(
            dense_weight = weights.dense_weight,
            sparse_weight = weights.sparse_weight,
            dense = counts.dense,
            sparse = counts.sparse,
            merged = counts.merged,
            overlap = counts.overlap,
            returned = result.len(),
            "fusion complete"
        );

        Ok(emitter::emit_report(&result, weights, class, counts))
    }
}

fn count_sources(candidates: &HashMap<String, Candidate>) -> SourceCounts {
    candidates
        .values()
        .fold(SourceCounts::default(), |mut counts, c| {
            counts.merged += 1;
            counts.dense += usize::from(c.in_dense());
            counts.sparse += usize::from(c.in_sparse());
            counts.overlap += usize::from(c.in_both());
            counts
        })
}

/// Fuse with the default keyword policy.
pub fn fuse(
    query: &str,
    dense_results: &[RawResult],
    sparse_results: &[RawResult],
    top_k: usize,
) -> BraidResult<Vec<RankedItem>> {
    FusionEngine::default().fuse(query, dense_results, sparse_results, top_k)
}
