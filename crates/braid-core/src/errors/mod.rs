mod config_error;
mod retrieval_error;
mod validation_error;

pub use config_error::ConfigError;
pub use retrieval_error::RetrievalError;
pub use validation_error::ValidationError;

/// Top-level error for the Braid workspace.
#[derive(Debug, thiserror::Error)]
pub enum BraidError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl BraidError {
    /// Whether the caller can reasonably retry with adjusted inputs
    /// (smaller `top_k`, fixed records) as opposed to a provider outage.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

pub type BraidResult<T> = Result<T, BraidError>;
