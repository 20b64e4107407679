//! Top-k nearest neighbour selection.

/// Selects the `k` nearest training rows from squared distances.
///
/// Uses a full stable sort on (distance, index) pairs: equidistant rows keep
/// their training-set order, so the selection is deterministic.
///
/// Writes results into caller-provided buffers:
/// - `pairs`: scratch buffer for (squared distance, index) pairs
/// - `nn_indices`: indices of the k nearest rows (ascending distance)
/// - `nn_dists`: Euclidean distances (sqrt of squared distances)
///
/// # Panics
///
/// Debug-asserts that `k >= 1` and `k <= d2_sq.len()`.
pub(crate) fn select_k_nearest(
    d2_sq: &[f64],
    k: usize,
    pairs: &mut Vec<(f64, usize)>,
    nn_indices: &mut Vec<usize>,
    nn_dists: &mut Vec<f64>,
) {
    debug_assert!(k >= 1);
    debug_assert!(k <= d2_sq.len());

    pairs.clear();
    pairs.extend(d2_sq.iter().copied().enumerate().map(|(i, d)| (d, i)));

    // Queries and ranges are finite, so distances are never NaN; an
    // overflowed +inf still sorts last
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
    pairs.truncate(k);

    nn_indices.clear();
    nn_dists.clear();
    for &(d2, idx) in pairs.iter() {
        nn_indices.push(idx);
        nn_dists.push(d2.sqrt());
    }
}
