use std::collections::{HashMap, HashSet};

use braid_core::constants::ABSENT_DISTANCE;
use braid_core::models::{Candidate, RawResult, WeightPair};
use braid_retrieval::fusion::emitter::to_ranked_list;
use braid_retrieval::fusion::merger::{combined_score, merge};
use braid_retrieval::{fuse, normalize};
use proptest::prelude::*;

/// Distances on a 1/8 grid so exact score ties actually occur.
fn distance() -> impl Strategy<Value = f64> {
    (0u32..=16).prop_map(|n| n as f64 / 8.0)
}

fn weights() -> impl Strategy<Value = WeightPair> {
    ((0u32..=8), (0u32..=8)).prop_map(|(d, s)| WeightPair::new(d as f64 / 8.0, s as f64 / 8.0))
}

fn side() -> impl Strategy<Value = Vec<RawResult>> {
    prop::collection::vec(("[a-h]{1,2}", distance()), 0..12).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(key, d)| RawResult::new(key, d))
            .collect()
    })
}

fn candidates() -> impl Strategy<Value = HashMap<String, Candidate>> {
    (side(), side()).prop_map(|(dense, sparse)| normalize(&dense, &sparse).unwrap())
}

proptest! {
    #[test]
    fn merge_is_deterministic(map in candidates(), w in weights(), top_k in 1usize..20) {
        let first = merge(&map, w, top_k).unwrap();
        // Rebuild the map so its internal iteration order differs.
        let rebuilt: HashMap<String, Candidate> =
            map.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        let second = merge(&rebuilt, w, top_k).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn output_length_is_min_of_top_k_and_candidates(map in candidates(), w in weights(), top_k in 1usize..20) {
        let result = merge(&map, w, top_k).unwrap();
        prop_assert_eq!(result.ordered_keys.len(), top_k.min(map.len()));
        prop_assert_eq!(result.combined_scores.len(), result.ordered_keys.len());
    }

    #[test]
    fn output_has_no_duplicates(dense in side(), sparse in side(), top_k in 1usize..30) {
        let items = fuse("", &dense, &sparse, top_k).unwrap();
        let unique: HashSet<&str> = items.iter().map(|i| i.content_key.as_str()).collect();
        prop_assert_eq!(unique.len(), items.len());
    }

    #[test]
    fn scores_ascend_and_ties_are_lexical(map in candidates(), w in weights()) {
        let result = merge(&map, w, map.len().max(1)).unwrap();
        for pair in result.ordered_keys.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let (sa, sb) = (result.combined_scores[a], result.combined_scores[b]);
            prop_assert!(sa <= sb, "{} ({}) before {} ({})", a, sa, b, sb);
            if sa == sb {
                prop_assert!(a < b, "tie {} / {} not lexical", a, b);
            }
        }
    }

    #[test]
    fn dominating_candidate_ranks_first(map in candidates(), w in weights()) {
        let result = merge(&map, w, map.len().max(1)).unwrap();
        let pos: HashMap<&str, usize> = result
            .ordered_keys
            .iter()
            .enumerate()
            .map(|(i, k)| (k.as_str(), i))
            .collect();

        let both: Vec<&Candidate> = map.values().filter(|c| c.in_both()).collect();
        for a in &both {
            for b in &both {
                if a.dense_distance <= b.dense_distance && a.sparse_distance <= b.sparse_distance {
                    let (pa, pb) = (pos[a.content_key.as_str()], pos[b.content_key.as_str()]);
                    let tied = combined_score(a, w) == combined_score(b, w);
                    prop_assert!(
                        pa <= pb || tied,
                        "{} dominates {} but ranks after it", a.content_key, b.content_key
                    );
                }
            }
        }
    }

    #[test]
    fn single_side_candidates_never_beat_confirmed_ones(
        map in candidates(),
        d in 1u32..=8,
        s in 1u32..=8,
    ) {
        // Both weights positive so every absent side costs infinity.
        let w = WeightPair::new(d as f64 / 8.0, s as f64 / 8.0);
        let result = merge(&map, w, map.len().max(1)).unwrap();

        let mut seen_single = false;
        for key in &result.ordered_keys {
            let c = &map[key];
            if c.in_both() {
                prop_assert!(!seen_single, "{} (both sides) ranked after a single-side candidate", key);
            } else {
                seen_single = true;
                prop_assert!(result.combined_scores[key].is_infinite());
            }
        }
    }

    #[test]
    fn dense_only_candidates_carry_the_sentinel(dense in side()) {
        let map = normalize(&dense, &[]).unwrap();
        for c in map.values() {
            prop_assert_eq!(c.sparse_distance, ABSENT_DISTANCE);
            prop_assert!(c.dense_distance.is_finite());
        }
    }

    #[test]
    fn normalize_keeps_every_distinct_key(dense in side(), sparse in side()) {
        let map = normalize(&dense, &sparse).unwrap();
        let expected: HashSet<String> = dense
            .iter()
            .chain(sparse.iter())
            .filter_map(|r| r.content_key.clone())
            .collect();
        let actual: HashSet<String> = map.keys().cloned().collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn ranks_are_one_based_and_contiguous(map in candidates(), w in weights(), top_k in 1usize..20) {
        let items = to_ranked_list(&merge(&map, w, top_k).unwrap());
        for (i, item) in items.iter().enumerate() {
            prop_assert_eq!(item.rank, i + 1);
        }
    }

    #[test]
    fn zero_top_k_is_always_rejected(map in candidates(), w in weights()) {
        prop_assert!(merge(&map, w, 0).is_err());
    }
}
