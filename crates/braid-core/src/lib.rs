//! # braid-core
//!
//! Foundation crate for the Braid hybrid retrieval fusion engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::BraidConfig;
pub use errors::{BraidError, BraidResult};
pub use models::{
    Candidate, FusionReport, FusionResult, QueryClass, RankedItem, RawResult, ScoreKind, Source,
    WeightPair,
};
