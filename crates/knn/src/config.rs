//! Configuration for the KNN classifier.

use crate::error::KnnError;

/// How features that are constant across the training set are handled.
///
/// A constant feature has range 0, so its normalized contribution
/// `(a - b)² / range²` is undefined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ZeroRangePolicy {
    /// The feature contributes zero distance.
    #[default]
    Ignore,
    /// Fitting fails with [`KnnError::ZeroRange`].
    Reject,
}

/// Configuration for a KNN classifier.
///
/// # Example
///
/// ```
/// use nearby_knn::{ClassifierConfig, ZeroRangePolicy};
///
/// let config = ClassifierConfig::new(5).with_zero_range(ZeroRangePolicy::Reject);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Number of nearest neighbours consulted per prediction.
    k: usize,
    /// Zero-range feature handling.
    zero_range: ZeroRangePolicy,
}

impl ClassifierConfig {
    /// Creates a new configuration with the given k.
    ///
    /// Defaults: `zero_range = Ignore`.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            zero_range: ZeroRangePolicy::Ignore,
        }
    }

    /// Sets the zero-range policy.
    pub fn with_zero_range(mut self, policy: ZeroRangePolicy) -> Self {
        self.zero_range = policy;
        self
    }

    /// Returns the number of nearest neighbours.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Returns the zero-range policy.
    pub fn zero_range(&self) -> ZeroRangePolicy {
        self.zero_range
    }

    /// Validates this configuration.
    ///
    /// Returns an error if k < 1. The upper bound on k depends on the
    /// training set and is checked when the classifier is fitted.
    pub fn validate(&self) -> Result<(), KnnError> {
        if self.k < 1 {
            return Err(KnnError::InvalidK { k: self.k });
        }
        Ok(())
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self::new(1)
    }
}
