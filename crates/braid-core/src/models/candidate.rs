use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::ABSENT_DISTANCE;

/// Which retrieval method produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Dense,
    Sparse,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dense => f.write_str("dense"),
            Self::Sparse => f.write_str("sparse"),
        }
    }
}

/// One logical retrieval result, merged across the dense and sparse sides.
///
/// Lives only for the duration of a single fusion call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Deduplication identity: chunk text or a stable chunk id.
    pub content_key: String,
    /// Dense distance, or [`ABSENT_DISTANCE`] if the dense search missed it.
    pub dense_distance: f64,
    /// Sparse distance, or [`ABSENT_DISTANCE`] if the sparse search missed it.
    pub sparse_distance: f64,
    /// Provenance link to the source document, if either side supplied one.
    pub document_id: Option<String>,
}

impl Candidate {
    /// A candidate seen by neither side yet.
    pub fn new(content_key: impl Into<String>) -> Self {
        Self {
            content_key: content_key.into(),
            dense_distance: ABSENT_DISTANCE,
            sparse_distance: ABSENT_DISTANCE,
            document_id: None,
        }
    }

    pub fn with_dense(mut self, distance: f64) -> Self {
        self.dense_distance = distance;
        self
    }

    pub fn with_sparse(mut self, distance: f64) -> Self {
        self.sparse_distance = distance;
        self
    }

    pub fn with_document_id(mut self, document_id: impl Into<String>) -> Self {
        self.document_id = Some(document_id.into());
        self
    }

    pub fn in_dense(&self) -> bool {
        self.dense_distance != ABSENT_DISTANCE
    }

    pub fn in_sparse(&self) -> bool {
        self.sparse_distance != ABSENT_DISTANCE
    }

    /// Returned by both retrieval methods.
    pub fn in_both(&self) -> bool {
        self.in_dense() && self.in_sparse()
    }

    /// Distance on the given side (the sentinel if absent).
    pub fn distance(&self, side: Source) -> f64 {
        match side {
            Source::Dense => self.dense_distance,
            Source::Sparse => self.sparse_distance,
        }
    }
}
