//! Per-feature normalization ranges derived from the training set.

use crate::config::ZeroRangePolicy;
use crate::error::KnnError;
use crate::instance::TrainingSet;

/// Per-feature `max - min` over the training set.
///
/// Computed once from training data and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRanges(Vec<f64>);

impl FeatureRanges {
    /// Computes the range of every feature column of `training`.
    pub fn from_training(training: &TrainingSet) -> Self {
        let n_features = training.n_features();
        let mut min = vec![f64::INFINITY; n_features];
        let mut max = vec![f64::NEG_INFINITY; n_features];

        for row in training.rows() {
            for (j, &v) in row.iter().enumerate() {
                min[j] = min[j].min(v);
                max[j] = max[j].max(v);
            }
        }

        Self(max.iter().zip(&min).map(|(hi, lo)| hi - lo).collect())
    }

    /// Wraps explicit range values.
    ///
    /// # Errors
    ///
    /// Returns [`KnnError::NoFeatures`] if `ranges` is empty and
    /// [`KnnError::NonFiniteInput`] if any value is negative, NaN or infinite.
    pub fn from_values(ranges: Vec<f64>) -> Result<Self, KnnError> {
        if ranges.is_empty() {
            return Err(KnnError::NoFeatures);
        }
        if ranges.iter().any(|r| !r.is_finite() || *r < 0.0) {
            return Err(KnnError::NonFiniteInput { input: "ranges" });
        }
        Ok(Self(ranges))
    }

    /// Returns the range values, one per feature.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Returns the number of features.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no features.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the indices of features whose range is zero.
    pub fn zero_range_features(&self) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter(|&(_, &r)| r == 0.0)
            .map(|(j, _)| j)
            .collect()
    }

    /// Checks that every range is usable and applies the zero-range policy.
    ///
    /// Under [`ZeroRangePolicy::Ignore`] constant features pass and later
    /// contribute zero distance.
    ///
    /// # Errors
    ///
    /// - [`KnnError::NonFiniteInput`] if a range overflowed to infinity
    ///   (finite values more than `f64::MAX` apart).
    /// - [`KnnError::ZeroRange`] for the first constant feature under
    ///   [`ZeroRangePolicy::Reject`].
    pub fn check(&self, policy: ZeroRangePolicy) -> Result<(), KnnError> {
        if self.0.iter().any(|r| !r.is_finite()) {
            return Err(KnnError::NonFiniteInput { input: "ranges" });
        }
        match (policy, self.zero_range_features().first()) {
            (ZeroRangePolicy::Reject, Some(&feature)) => Err(KnnError::ZeroRange { feature }),
            _ => Ok(()),
        }
    }
}
