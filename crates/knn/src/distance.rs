//! Range-normalized Euclidean distance computation.

use crate::config::ZeroRangePolicy;
use crate::error::KnnError;
use crate::range::FeatureRanges;

/// Squared contribution of one feature: `(d / range)²`, or 0 when the range
/// is zero.
#[inline]
fn term(d: f64, range: f64) -> f64 {
    if range > 0.0 {
        let z = d / range;
        z * z
    } else {
        0.0
    }
}

/// Computes range-normalized squared distances from `query` to all rows.
///
/// For each training row `i`:
/// ```text
/// out[i] = Σⱼ (rows[i × n_features + j] − query[j])² / ranges[j]²
/// ```
///
/// Features with `ranges[j] == 0` contribute nothing. Dispatches to
/// specialised implementations for 1D and 2D cases.
///
/// # Panics
///
/// Debug-asserts that `rows.len() % n_features == 0`,
/// `query.len() == n_features`, `ranges.len() == n_features`, and
/// `out.len() == rows.len() / n_features`.
pub(crate) fn normalized_sq_distances(
    rows: &[f64],
    n_features: usize,
    query: &[f64],
    ranges: &[f64],
    out: &mut [f64],
) {
    debug_assert_eq!(rows.len() % n_features, 0);
    debug_assert_eq!(query.len(), n_features);
    debug_assert_eq!(ranges.len(), n_features);
    debug_assert_eq!(out.len(), rows.len() / n_features);

    match n_features {
        1 => sq_dist_1d(rows, query[0], ranges[0], out),
        2 => sq_dist_2d(rows, query, ranges, out),
        _ => sq_dist_nd(rows, n_features, query, ranges, out),
    }
}

#[inline]
fn sq_dist_1d(rows: &[f64], query: f64, range: f64, out: &mut [f64]) {
    for (o, &c) in out.iter_mut().zip(rows.iter()) {
        *o = term(c - query, range);
    }
}

#[inline]
fn sq_dist_2d(rows: &[f64], query: &[f64], ranges: &[f64], out: &mut [f64]) {
    let (q0, q1) = (query[0], query[1]);
    let (r0, r1) = (ranges[0], ranges[1]);
    for (o, row) in out.iter_mut().zip(rows.chunks_exact(2)) {
        *o = term(row[0] - q0, r0) + term(row[1] - q1, r1);
    }
}

#[inline]
fn sq_dist_nd(rows: &[f64], n_features: usize, query: &[f64], ranges: &[f64], out: &mut [f64]) {
    for (o, row) in out.iter_mut().zip(rows.chunks_exact(n_features)) {
        *o = row
            .iter()
            .zip(query)
            .zip(ranges)
            .map(|((&a, &b), &r)| term(a - b, r))
            .sum();
    }
}

/// Range-normalized Euclidean distance between two feature vectors.
///
/// ```text
/// distance(a, b) = sqrt( Σᵢ (a[i] − b[i])² / range[i]² )
/// ```
///
/// The result is symmetric in `a` and `b`, and zero when they agree on every
/// feature with a non-zero range.
///
/// # Errors
///
/// - [`KnnError::QueryDimensionMismatch`] if `a` or `b` does not have one
///   value per range.
/// - [`KnnError::NonFiniteInput`] if `a` or `b` contains NaN or infinity.
/// - [`KnnError::ZeroRange`] if a range is zero and `policy` is
///   [`ZeroRangePolicy::Reject`].
pub fn normalized_distance(
    a: &[f64],
    b: &[f64],
    ranges: &FeatureRanges,
    policy: ZeroRangePolicy,
) -> Result<f64, KnnError> {
    let n_features = ranges.len();
    for v in [a, b] {
        if v.len() != n_features {
            return Err(KnnError::QueryDimensionMismatch {
                expected: n_features,
                got: v.len(),
            });
        }
        if v.iter().any(|x| !x.is_finite()) {
            return Err(KnnError::NonFiniteInput { input: "query" });
        }
    }
    ranges.check(policy)?;

    let mut out = [0.0];
    normalized_sq_distances(a, n_features, b, ranges.as_slice(), &mut out);
    Ok(out[0].sqrt())
}
