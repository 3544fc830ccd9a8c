//! Span definitions per operation: fusion, retrieval.

/// Create a fusion span.
#[macro_export]
macro_rules! fusion_span {
    ($query_class:expr, $top_k:expr) => {
        tracing::info_span!("braid.fusion", query_class = ?$query_class, top_k = $top_k)
    };
}

/// Create a retrieval span.
#[macro_export]
macro_rules! retrieval_span {
    ($query:expr, $top_k:expr) => {
        tracing::info_span!("braid.retrieval", query = %$query, top_k = $top_k)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const FUSION: &str = "braid.fusion";
    pub const RETRIEVAL: &str = "braid.retrieval";
}
