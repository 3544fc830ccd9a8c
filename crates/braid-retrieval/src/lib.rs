//! # braid-retrieval
//!
//! Hybrid dense/sparse fusion. Two ranked candidate lists in, one ranked list out.
//!
//! ## Architecture
//!
//! ```text
//! HybridRetriever
//! ├── ISearchProvider (dense)  ┐ run concurrently, a failed side
//! ├── ISearchProvider (sparse) ┘ degrades to an empty list
//! └── FusionEngine
//!     ├── WeightPolicy   (query keywords → dense/sparse weights)
//!     ├── normalize      (raw records → Candidate map, absent side = ∞)
//!     ├── merge          (weighted distance, lexical tie-break, top-k)
//!     └── emit           (1-based ranks, document ids, report metadata)
//! ```
//!
//! The fusion path itself is pure and synchronous; only the retriever touches providers.

pub mod context;
pub mod engine;
pub mod fusion;
pub mod normalize;
pub mod policy;
pub mod retriever;

pub use engine::{fuse, FusionEngine};
pub use fusion::{emitter::to_ranked_list, merger::merge};
pub use normalize::normalize;
pub use policy::{compute_weights, WeightPolicy};
pub use retriever::HybridRetriever;
