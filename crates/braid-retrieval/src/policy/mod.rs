//! WeightPolicy: pick dense/sparse weights from the wording of the query.

pub mod classifier;

use braid_core::config::WeightPolicyConfig;
use braid_core::errors::ConfigError;
use braid_core::models::{QueryClass, WeightPair};

/// Keyword-driven weight policy.
///
/// Queries that look like error reports or code lean on exact term matches
/// (sparse); explanatory questions lean on semantic matches (dense).
#[derive(Debug, Clone)]
pub struct WeightPolicy {
    lexical_keywords: Vec<String>,
    conceptual_keywords: Vec<String>,
    lexical: WeightPair,
    conceptual: WeightPair,
    default: WeightPair,
}

impl WeightPolicy {
    /// Build from config. Keywords are lower-cased once here.
    pub fn from_config(config: &WeightPolicyConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let lower = |ws: &[String]| ws.iter().map(|w| w.to_lowercase()).collect();
        Ok(Self {
            lexical_keywords: lower(&config.lexical_keywords),
            conceptual_keywords: lower(&config.conceptual_keywords),
            lexical: config.lexical,
            conceptual: config.conceptual,
            default: config.default,
        })
    }

    /// Which keyword set the query falls into.
    pub fn classify(&self, query: &str) -> QueryClass {
        classifier::classify(query, &self.lexical_keywords, &self.conceptual_keywords)
    }

    /// Weights for a query class.
    pub fn weights_for(&self, class: QueryClass) -> WeightPair {
        match class {
            QueryClass::Lexical => self.lexical,
            QueryClass::Conceptual => self.conceptual,
            QueryClass::General | QueryClass::Pinned => self.default,
        }
    }

    pub fn compute_weights(&self, query: &str) -> WeightPair {
        self.weights_for(self.classify(query))
    }
}

impl Default for WeightPolicy {
    fn default() -> Self {
        let config = WeightPolicyConfig::default();
        Self {
            lexical_keywords: config.lexical_keywords,
            conceptual_keywords: config.conceptual_keywords,
            lexical: config.lexical,
            conceptual: config.conceptual,
            default: config.default,
        }
    }
}

/// Weights for `query` under the default keyword sets.
pub fn compute_weights(query: &str) -> WeightPair {
    WeightPolicy::default().compute_weights(query)
}
