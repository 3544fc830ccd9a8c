use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Multipliers applied to the dense and sparse distances.
///
/// Not required to sum to 1; both must be finite and non-negative so a lower
/// combined score always means more relevant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightPair {
    pub dense_weight: f64,
    pub sparse_weight: f64,
}

impl WeightPair {
    pub const fn new(dense_weight: f64, sparse_weight: f64) -> Self {
        Self {
            dense_weight,
            sparse_weight,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let ok = |w: f64| w.is_finite() && w >= 0.0;
        if ok(self.dense_weight) && ok(self.sparse_weight) {
            Ok(())
        } else {
            Err(ValidationError::InvalidWeights {
                dense: self.dense_weight,
                sparse: self.sparse_weight,
            })
        }
    }
}

/// Which branch of the query weight policy selected the weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryClass {
    /// Error/code vocabulary: favour exact term matches.
    Lexical,
    /// Explanatory or comparative questions: favour semantic matches.
    Conceptual,
    /// Nothing matched.
    General,
    /// Weights were pinned by the caller.
    Pinned,
}
