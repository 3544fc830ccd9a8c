//! # braid-observability
//!
//! Structured tracing setup and the in-memory retrieval log.

pub mod retrieval_log;
pub mod tracing_setup;

pub use retrieval_log::{RetrievalLog, RetrievalLogEntry};
pub use tracing_setup::{init_tracing, init_tracing_from_config, init_tracing_with_filter};
