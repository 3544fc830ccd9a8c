/// Failures from the external dense/sparse search providers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RetrievalError {
    #[error("provider {provider} failed: {reason}")]
    ProviderFailed { provider: String, reason: String },

    #[error("provider {provider} timed out after {timeout_ms}ms")]
    ProviderTimeout { provider: String, timeout_ms: u64 },

    #[error("both providers failed: dense: {dense}; sparse: {sparse}")]
    AllProvidersFailed { dense: String, sparse: String },
}
