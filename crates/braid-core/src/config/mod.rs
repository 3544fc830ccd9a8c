pub mod defaults;
mod observability_config;
mod retrieval_config;
mod weight_policy_config;

pub use observability_config::ObservabilityConfig;
pub use retrieval_config::RetrievalConfig;
pub use weight_policy_config::WeightPolicyConfig;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Top-level Braid configuration, aggregating all subsystem configs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BraidConfig {
    pub retrieval: RetrievalConfig,
    pub weights: WeightPolicyConfig,
    pub observability: ObservabilityConfig,
}

impl BraidConfig {
    /// Parse a TOML string. Missing sections and fields fall back to defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseFailed {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make fusion misbehave at runtime.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.retrieval.validate()?;
        self.weights.validate()?;
        self.observability.validate()
    }
}
