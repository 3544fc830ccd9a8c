//! Weighted-distance fusion and ranked output.

pub mod emitter;
pub mod merger;
