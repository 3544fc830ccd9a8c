use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Retrieval subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Number of fused results handed to the context builder.
    pub top_k: usize,
    /// Each provider is asked for `top_k * candidate_multiplier` results.
    pub candidate_multiplier: usize,
}

impl RetrievalConfig {
    /// Results requested from each provider at the configured `top_k`.
    pub fn provider_limit(&self) -> usize {
        self.provider_limit_for(self.top_k)
    }

    /// Results requested from each provider for an explicit `top_k`.
    /// A zero multiplier is treated as 1 so providers are never asked for nothing.
    pub fn provider_limit_for(&self, top_k: usize) -> usize {
        top_k.saturating_mul(self.candidate_multiplier.max(1))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.top_k == 0 {
            return Err(ConfigError::InvalidValue {
                field: "retrieval.top_k".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.candidate_multiplier == 0 {
            return Err(ConfigError::InvalidValue {
                field: "retrieval.candidate_multiplier".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: defaults::DEFAULT_TOP_K,
            candidate_multiplier: defaults::DEFAULT_CANDIDATE_MULTIPLIER,
        }
    }
}
