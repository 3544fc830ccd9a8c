//! Candidate normalization: two raw result lists → one map keyed by content.
//!
//! Values must already be distance-like (smaller is better). Providers that
//! report similarities are converted by the caller with
//! [`ScoreKind::to_distance`](braid_core::models::ScoreKind::to_distance).

use std::collections::HashMap;

use braid_core::errors::{BraidResult, ValidationError};
use braid_core::models::{Candidate, RawResult, Source};

/// Merge dense and sparse records into candidates keyed by `content_key`.
///
/// A key seen on only one side keeps the absent sentinel on the other.
/// The first non-null `document_id` wins. A key repeated within one side
/// keeps its smallest distance.
pub fn normalize(
    dense_results: &[RawResult],
    sparse_results: &[RawResult],
) -> BraidResult<HashMap<String, Candidate>> {
    let mut candidates: HashMap<String, Candidate> =
        HashMap::with_capacity(dense_results.len() + sparse_results.len());

    absorb(&mut candidates, dense_results, Source::Dense)?;
    absorb(&mut candidates, sparse_results, Source::Sparse)?;

    Ok(candidates)
}

fn absorb(
    candidates: &mut HashMap<String, Candidate>,
    results: &[RawResult],
    side: Source,
) -> Result<(), ValidationError> {
    for (position, record) in results.iter().enumerate() {
        let key = validate_record(record, side, position)?;

        let candidate = candidates
            .entry(key.to_string())
            .or_insert_with(|| Candidate::new(key));

        let slot = match side {
            Source::Dense => &mut candidate.dense_distance,
            Source::Sparse => &mut candidate.sparse_distance,
        };
        *slot = slot.min(record.value);

        if candidate.document_id.is_none() {
            candidate.document_id.clone_from(&record.document_id);
        }
    }
    Ok(())
}

fn validate_record(
    record: &RawResult,
    side: Source,
    position: usize,
) -> Result<&str, ValidationError> {
    let key = match record.content_key.as_deref() {
        Some(k) if !k.trim().is_empty() => k,
        _ => return Err(ValidationError::MissingContentKey { side, position }),
    };

    // NaN fails `is_finite`, so it is rejected here too. Finite values near
    // f64::MAX pass; the merger rejects them if weighting overflows.
    if !record.value.is_finite() || record.value < 0.0 {
        return Err(ValidationError::InvalidDistance {
            side,
            content_key: key.to_string(),
            value: record.value,
        });
    }

    Ok(key)
}
