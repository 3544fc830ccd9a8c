use serde::{Deserialize, Serialize};

/// One entry of the final ranked list handed to the context builder and the
/// retrieval logger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedItem {
    pub content_key: String,
    pub document_id: Option<String>,
    /// 1-based.
    pub rank: usize,
    pub combined_score: f64,
}
