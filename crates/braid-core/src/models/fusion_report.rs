use serde::{Deserialize, Serialize};

use super::{QueryClass, RankedItem, WeightPair};

/// How many distinct candidates each side contributed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCounts {
    pub dense: usize,
    pub sparse: usize,
    /// Distinct candidates after merging.
    pub merged: usize,
    /// Candidates returned by both sides.
    pub overlap: usize,
}

/// Ranked list plus the metadata needed to explain and log a fusion call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FusionReport {
    pub query_class: QueryClass,
    pub weights: WeightPair,
    pub counts: SourceCounts,
    pub items: Vec<RankedItem>,
}

impl FusionReport {
    /// Document ids in rank order, skipping items without one.
    pub fn citations(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter_map(|item| item.document_id.as_deref())
            .collect()
    }
}
