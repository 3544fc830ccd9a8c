use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;
use crate::models::WeightPair;

/// Keyword sets and weight pairs for the query weight policy.
///
/// The lexical set is checked before the conceptual set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightPolicyConfig {
    pub lexical_keywords: Vec<String>,
    pub conceptual_keywords: Vec<String>,
    pub lexical: WeightPair,
    pub conceptual: WeightPair,
    pub default: WeightPair,
}

impl WeightPolicyConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, pair) in [
            ("weights.lexical", &self.lexical),
            ("weights.conceptual", &self.conceptual),
            ("weights.default", &self.default),
        ] {
            pair.validate().map_err(|e| ConfigError::InvalidValue {
                field: field.into(),
                reason: e.to_string(),
            })?;
        }
        for (field, keywords) in [
            ("weights.lexical_keywords", &self.lexical_keywords),
            ("weights.conceptual_keywords", &self.conceptual_keywords),
        ] {
            if keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(ConfigError::InvalidValue {
                    field: field.into(),
                    reason: "empty keyword would match every query".into(),
                });
            }
        }
        Ok(())
    }
}

impl Default for WeightPolicyConfig {
    fn default() -> Self {
        let pair = |(d, s): (f64, f64)| WeightPair::new(d, s);
        let words = |ws: &[&str]| ws.iter().map(|w| w.to_string()).collect();
        Self {
            lexical_keywords: words(defaults::LEXICAL_KEYWORDS),
            conceptual_keywords: words(defaults::CONCEPTUAL_KEYWORDS),
            lexical: pair(defaults::LEXICAL_WEIGHTS),
            conceptual: pair(defaults::CONCEPTUAL_WEIGHTS),
            default: pair(defaults::DEFAULT_WEIGHTS),
        }
    }
}
