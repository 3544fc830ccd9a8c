use crate::models::Source;

/// Rejections raised at the fusion boundary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("top_k must be a positive integer, got {top_k}")]
    InvalidTopK { top_k: usize },

    #[error("{side} result at position {position} has no content key")]
    MissingContentKey { side: Source, position: usize },

    #[error("{side} result '{content_key}' has invalid distance {value}")]
    InvalidDistance {
        side: Source,
        content_key: String,
        value: f64,
    },

    #[error("weighted score for '{content_key}' overflows f64")]
    ScoreOverflow { content_key: String },

    #[error("weights must be finite and non-negative, got dense={dense} sparse={sparse}")]
    InvalidWeights { dense: f64, sparse: f64 },
}
