//! Ranked result emission: 1-based ranks in the order the merger chose.

use braid_core::constants::ABSENT_DISTANCE;
use braid_core::models::{
    FusionReport, FusionResult, QueryClass, RankedItem, SourceCounts, WeightPair,
};

/// Turn a fusion result into the externally consumed list. No re-sorting.
///
/// A missing document id is passed through as `None`.
pub fn to_ranked_list(result: &FusionResult) -> Vec<RankedItem> {
    result
        .ordered_keys
        .iter()
        .enumerate()
        .map(|(i, key)| RankedItem {
            content_key: key.clone(),
            document_id: result.document_ids.get(key).cloned(),
            rank: i + 1,
            combined_score: result
                .combined_scores
                .get(key)
                .copied()
                .unwrap_or(ABSENT_DISTANCE),
        })
        .collect()
}

/// Bundle the ranked list with the metadata logged per fusion call.
pub fn emit_report(
    result: &FusionResult,
    weights: WeightPair,
    query_class: QueryClass,
    counts: SourceCounts,
) -> FusionReport {
    FusionReport {
        query_class,
        weights,
        counts,
        items: to_ranked_list(result),
    }
}
