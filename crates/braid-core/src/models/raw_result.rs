use serde::{Deserialize, Serialize};

/// Numeric convention of a provider's score field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreKind {
    /// Lower is more similar (L2, cosine distance, `<=>`/`<->` operators).
    #[default]
    Distance,
    /// Higher is more similar (cosine similarity in `[-1, 1]`).
    Similarity,
}

impl ScoreKind {
    /// Convert a provider value into a distance where smaller is better.
    ///
    /// Similarities become `1 - score`, clamped at zero so rounding noise on
    /// near-identical vectors never yields a negative distance. NaN and
    /// infinite values pass through unchanged so normalization rejects them.
    pub fn to_distance(self, value: f64) -> f64 {
        if !value.is_finite() {
            return value;
        }
        match self {
            Self::Distance => value,
            Self::Similarity => (1.0 - value).max(0.0),
        }
    }
}

/// A record as handed back by a dense or sparse search provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawResult {
    /// `None` for malformed records; rejected during normalization.
    pub content_key: Option<String>,
    /// Distance-like value (smaller is better) once the caller has normalized it.
    pub value: f64,
    #[serde(default)]
    pub document_id: Option<String>,
}

impl RawResult {
    pub fn new(content_key: impl Into<String>, value: f64) -> Self {
        Self {
            content_key: Some(content_key.into()),
            value,
            document_id: None,
        }
    }

    pub fn with_document_id(mut self, document_id: impl Into<String>) -> Self {
        self.document_id = Some(document_id.into());
        self
    }

    /// Rewrite `value` from `kind` into a distance.
    pub fn into_distance(mut self, kind: ScoreKind) -> Self {
        self.value = kind.to_distance(self.value);
        self
    }
}
