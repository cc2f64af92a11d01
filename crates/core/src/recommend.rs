//! Recommendation math: the level ordinal scale, the rule-based level-gap
//! filter, and the k-nearest-neighbor ranking over numeric features.
//!
//! Everything here is a pure function over plain values; the API layer
//! fetches the candidate rows and maps the returned ordering back onto
//! them.

/// Default number of neighbors returned by the KNN endpoint.
pub const DEFAULT_K: usize = 5;
/// Lower bound for the caller-supplied `k`.
pub const MIN_K: usize = 1;
/// Upper bound for the caller-supplied `k`.
pub const MAX_K: usize = 20;

/// Maximum allowed distance on the ordinal scale for the rule-based filter.
pub const MAX_LEVEL_GAP: i32 = 1;

/// Guard against zero variance when normalizing features.
const FEATURE_EPSILON: f64 = 1e-8;

/// Number of dimensions in a dancer feature vector: level, age, height.
pub const FEATURE_DIMS: usize = 3;

/// A dancer's numeric features for KNN: `[level_ordinal, age, height]`.
pub type FeatureVector = [f64; FEATURE_DIMS];

/// Map a rank code onto the fixed ordinal scale.
///
/// Case-insensitive; unknown or absent codes map to 0, which the gap rule
/// treats like any other value (an unranked dancer matches N- and
/// unranked-level dancers only).
pub fn level_ordinal(level: Option<&str>) -> i32 {
    let Some(level) = level else { return 0 };
    match level.trim().to_ascii_uppercase().as_str() {
        "N" => 1,
        "E" => 2,
        "D" => 3,
        "C" => 4,
        "B" => 5,
        "A" => 6,
        "M" => 7,
        "S" => 8,
        _ => 0,
    }
}

/// Rule-based compatibility: ordinals no more than [`MAX_LEVEL_GAP`] apart.
pub fn level_compatible(a: i32, b: i32) -> bool {
    (a - b).abs() <= MAX_LEVEL_GAP
}

/// Rank `candidates` by ascending Euclidean distance to `query` and return
/// the indices of the first `k`.
///
/// All vectors (the query included) are normalized per dimension by the
/// candidate population's mean and population standard deviation, with a
/// small epsilon guarding zero variance. Ties keep the original candidate
/// order. Returns fewer than `k` indices when the candidate set is smaller;
/// an empty slice yields an empty ranking.
pub fn knn_rank(query: FeatureVector, candidates: &[FeatureVector], k: usize) -> Vec<usize> {
    if candidates.is_empty() || k == 0 {
        return Vec::new();
    }

    let n = candidates.len() as f64;

    let mut mean = [0.0; FEATURE_DIMS];
    for c in candidates {
        for (m, x) in mean.iter_mut().zip(c) {
            *m += x;
        }
    }
    for m in &mut mean {
        *m /= n;
    }

    let mut std = [0.0; FEATURE_DIMS];
    for c in candidates {
        for d in 0..FEATURE_DIMS {
            std[d] += (c[d] - mean[d]).powi(2);
        }
    }
    for s in &mut std {
        *s = (*s / n).sqrt();
    }

    let normalize = |v: &FeatureVector| -> FeatureVector {
        let mut out = [0.0; FEATURE_DIMS];
        for d in 0..FEATURE_DIMS {
            out[d] = (v[d] - mean[d]) / (std[d] + FEATURE_EPSILON);
        }
        out
    };

    let query_norm = normalize(&query);
    let distances: Vec<f64> = candidates
        .iter()
        .map(|c| {
            let c_norm = normalize(c);
            query_norm
                .iter()
                .zip(&c_norm)
                .map(|(a, b)| (a - b).powi(2))
                .sum::<f64>()
                .sqrt()
        })
        .collect();

    let mut order: Vec<usize> = (0..candidates.len()).collect();
    // Stable sort keeps original candidate order on equal distances.
    order.sort_by(|&a, &b| {
        distances[a]
            .partial_cmp(&distances[b])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    order.truncate(k);
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordinal_scale() {
        assert_eq!(level_ordinal(Some("N")), 1);
        assert_eq!(level_ordinal(Some("E")), 2);
        assert_eq!(level_ordinal(Some("D")), 3);
        assert_eq!(level_ordinal(Some("C")), 4);
        assert_eq!(level_ordinal(Some("B")), 5);
        assert_eq!(level_ordinal(Some("A")), 6);
        assert_eq!(level_ordinal(Some("M")), 7);
        assert_eq!(level_ordinal(Some("S")), 8);
    }

    #[test]
    fn test_level_ordinal_case_insensitive() {
        assert_eq!(level_ordinal(Some("b")), 5);
        assert_eq!(level_ordinal(Some(" s ")), 8);
    }

    #[test]
    fn test_level_ordinal_unknown_or_absent() {
        assert_eq!(level_ordinal(None), 0);
        assert_eq!(level_ordinal(Some("")), 0);
        assert_eq!(level_ordinal(Some("X")), 0);
        assert_eq!(level_ordinal(Some("A+")), 0);
    }

    #[test]
    fn test_level_gap_rule() {
        assert!(level_compatible(5, 5));
        assert!(level_compatible(5, 4));
        assert!(level_compatible(5, 6));
        assert!(!level_compatible(5, 3));
        assert!(!level_compatible(1, 8));
        // Unranked (0) is compatible with N (1) but not with E (2).
        assert!(level_compatible(0, 1));
        assert!(!level_compatible(0, 2));
    }

    #[test]
    fn test_knn_ranks_nearest_first() {
        let query = [5.0, 25.0, 170.0];
        let candidates = [
            [5.0, 25.0, 170.0],
            [5.0, 26.0, 171.0],
            [1.0, 40.0, 150.0],
        ];
        let order = knn_rank(query, &candidates, 2);
        assert_eq!(order, vec![0, 1]);
    }

    #[test]
    fn test_knn_returns_all_when_k_exceeds_candidates() {
        let query = [5.0, 25.0, 170.0];
        let candidates = [[5.0, 25.0, 170.0], [1.0, 40.0, 150.0]];
        let order = knn_rank(query, &candidates, 20);
        assert_eq!(order.len(), 2);
        assert_eq!(order[0], 0);
    }

    #[test]
    fn test_knn_empty_candidates() {
        assert!(knn_rank([1.0, 2.0, 3.0], &[], 5).is_empty());
    }

    #[test]
    fn test_knn_zero_variance_dimension_is_safe() {
        // All candidates share age and height; the epsilon guard must keep
        // the distances finite and the level dimension decisive.
        let query = [5.0, 30.0, 170.0];
        let candidates = [
            [8.0, 30.0, 170.0],
            [5.0, 30.0, 170.0],
            [6.0, 30.0, 170.0],
        ];
        let order = knn_rank(query, &candidates, 3);
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn test_knn_ties_keep_candidate_order() {
        // Two candidates equidistant from the query on either side.
        let query = [5.0, 25.0, 170.0];
        let candidates = [
            [5.0, 26.0, 170.0],
            [5.0, 24.0, 170.0],
            [5.0, 25.0, 170.0],
        ];
        let order = knn_rank(query, &candidates, 3);
        assert_eq!(order[0], 2);
        // The equidistant pair stays in original relative order.
        assert_eq!(&order[1..], &[0, 1]);
    }
}
