use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Output of the fusion merger.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FusionResult {
    /// Content keys, most relevant first. Length is at most `top_k`.
    pub ordered_keys: Vec<String>,
    /// Combined score per emitted key.
    pub combined_scores: HashMap<String, f64>,
    /// Document id per emitted key, where one is known.
    pub document_ids: HashMap<String, String>,
}

impl FusionResult {
    pub fn len(&self) -> usize {
        self.ordered_keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered_keys.is_empty()
    }

    pub fn score(&self, content_key: &str) -> Option<f64> {
        self.combined_scores.get(content_key).copied()
    }
}
