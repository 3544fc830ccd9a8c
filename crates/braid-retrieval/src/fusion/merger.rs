//! Weighted-distance merge: score = w_dense · d_dense + w_sparse · d_sparse.
//!
//! Lower is better. An absent side carries an infinite distance, so a
//! candidate confirmed by both searches always outranks one seen by a single
//! search. Single-side candidates all score ∞ and fall back to lexical order.

use std::cmp::Ordering;
use std::collections::HashMap;

use braid_core::errors::{BraidResult, ValidationError};
use braid_core::models::{Candidate, FusionResult, WeightPair};

/// Combined score for one candidate.
///
/// A zero weight switches its side off entirely, so `0 · ∞` counts as 0
/// rather than NaN.
pub fn combined_score(candidate: &Candidate, weights: WeightPair) -> f64 {
    weighted(weights.dense_weight, candidate.dense_distance)
        + weighted(weights.sparse_weight, candidate.sparse_distance)
}

fn weighted(weight: f64, distance: f64) -> f64 {
    if weight == 0.0 {
        0.0
    } else {
        weight * distance
    }
}

/// [`combined_score`] that refuses to let real distances overflow into the
/// absent sentinel.
///
/// A present side whose weighted distance is infinite, or two finite terms
/// whose sum is infinite, would tie with a one-sided candidate.
pub fn checked_score(candidate: &Candidate, weights: WeightPair) -> Result<f64, ValidationError> {
    let dense = weighted(weights.dense_weight, candidate.dense_distance);
    let sparse = weighted(weights.sparse_weight, candidate.sparse_distance);
    let score = dense + sparse;

    let overflowed = (candidate.in_dense() && dense.is_infinite())
        || (candidate.in_sparse() && sparse.is_infinite())
        || (dense.is_finite() && sparse.is_finite() && !score.is_finite());
    if overflowed {
        return Err(ValidationError::ScoreOverflow {
            content_key: candidate.content_key.clone(),
        });
    }
    Ok(score)
}

/// Canonical ordering: ascending score, then ascending `content_key` bytes.
pub fn rank_order(a: (&str, f64), b: (&str, f64)) -> Ordering {
    a.1.total_cmp(&b.1).then_with(|| a.0.cmp(b.0))
}

/// Score, sort, and truncate to `top_k`. The input map is not modified.
pub fn merge(
    candidates: &HashMap<String, Candidate>,
    weights: WeightPair,
    top_k: usize,
) -> BraidResult<FusionResult> {
    if top_k == 0 {
        return Err(ValidationError::InvalidTopK { top_k }.into());
    }
    weights.validate()?;

    let mut scored: Vec<(&Candidate, f64)> = candidates
        .values()
        .map(|c| checked_score(c, weights).map(|score| (c, score)))
        .collect::<Result<_, _>>()?;

    scored.sort_by(|a, b| {
        rank_order(
            (a.0.content_key.as_str(), a.1),
            (b.0.content_key.as_str(), b.1),
        )
    });
    scored.truncate(top_k);

    let mut result = FusionResult {
        ordered_keys: Vec::with_capacity(scored.len()),
        combined_scores: HashMap::with_capacity(scored.len()),
        document_ids: HashMap::new(),
    };
    for (candidate, score) in scored {
        let key = candidate.content_key.clone();
        if let Some(doc) = &candidate.document_id {
            result.document_ids.insert(key.clone(), doc.clone());
        }
        result.combined_scores.insert(key.clone(), score);
        result.ordered_keys.push(key);
    }

    Ok(result)
}
