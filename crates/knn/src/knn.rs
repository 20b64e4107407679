//! KNN classifier entry point and scratch buffer management.

use tracing::{debug, warn};

use crate::config::ClassifierConfig;
use crate::distance::normalized_sq_distances;
use crate::error::KnnError;
use crate::instance::{Instance, Label, TrainingSet};
use crate::range::FeatureRanges;
use crate::result::{Neighbour, Prediction};
use crate::select::select_k_nearest;
use crate::vote::majority_vote;

/// Pre-allocated scratch buffers for KNN prediction.
///
/// Reuse across calls to [`KnnClassifier::predict_with_scratch`] to avoid
/// repeated heap allocation when classifying many queries.
///
/// # Example
///
/// ```
/// use nearby_knn::KnnScratch;
///
/// let mut scratch = KnnScratch::new(200);
/// // Use with KnnClassifier::predict_with_scratch() in a loop...
/// ```
#[derive(Debug, Clone, Default)]
pub struct KnnScratch {
    /// Squared distances buffer.
    pub(crate) d2_sq: Vec<f64>,
    /// (distance, index) pairs for sorting.
    pub(crate) pairs: Vec<(f64, usize)>,
    /// Indices of k nearest neighbours.
    pub(crate) nn_indices: Vec<usize>,
    /// Euclidean distances of k nearest neighbours.
    pub(crate) nn_dists: Vec<f64>,
    /// Labels of k nearest neighbours.
    pub(crate) nn_labels: Vec<Label>,
    /// (label, count) vote tally.
    pub(crate) tally: Vec<(Label, usize)>,
}

impl KnnScratch {
    /// Creates a new scratch buffer with capacity for `n_training` rows.
    pub fn new(n_training: usize) -> Self {
        Self {
            d2_sq: Vec::with_capacity(n_training),
            pairs: Vec::with_capacity(n_training),
            nn_indices: Vec::new(),
            nn_dists: Vec::new(),
            nn_labels: Vec::new(),
            tally: Vec::new(),
        }
    }
}

/// A fitted k-nearest-neighbour classifier.
///
/// Holds the training set and the per-feature ranges computed from it. Both
/// are immutable after [`KnnClassifier::fit`], so a classifier can be shared
/// read-only between threads.
///
/// # Example
///
/// ```
/// use nearby_knn::{ClassifierConfig, Instance, KnnClassifier, TrainingSet};
///
/// let training = TrainingSet::new(&[
///     Instance::new(vec![0.0, 0.0], 0.0).unwrap(),
///     Instance::new(vec![10.0, 10.0], 1.0).unwrap(),
/// ])
/// .unwrap();
/// let classifier = KnnClassifier::fit(training, ClassifierConfig::new(1)).unwrap();
///
/// let prediction = classifier.predict(&[1.0, 1.0]).unwrap();
/// assert_eq!(prediction.label().value(), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct KnnClassifier {
    training: TrainingSet,
    ranges: FeatureRanges,
    config: ClassifierConfig,
}

impl KnnClassifier {
    /// Validates `config` against `training` and computes feature ranges.
    ///
    /// # Errors
    ///
    /// - [`KnnError::InvalidK`] if k is zero.
    /// - [`KnnError::KExceedsTrainingSet`] if k is larger than the training set.
    /// - [`KnnError::NonFiniteInput`] if a feature's values span more than
    ///   `f64::MAX`, so its range is not finite.
    /// - [`KnnError::ZeroRange`] if a feature is constant and the config's
    ///   policy is [`ZeroRangePolicy::Reject`](crate::ZeroRangePolicy::Reject).
    #[tracing::instrument(skip_all, fields(k = config.k(), n_training = training.len()))]
    pub fn fit(training: TrainingSet, config: ClassifierConfig) -> Result<Self, KnnError> {
        config.validate()?;
        if config.k() > training.len() {
            return Err(KnnError::KExceedsTrainingSet {
                k: config.k(),
                n_training: training.len(),
            });
        }

        let ranges = FeatureRanges::from_training(&training);
        ranges.check(config.zero_range())?;

        let zero = ranges.zero_range_features();
        if !zero.is_empty() {
            warn!(
                features = ?zero,
                "constant features have zero range and will not affect distances"
            );
        }
        debug!(ranges = ?ranges.as_slice(), "feature ranges computed");

        Ok(Self {
            training,
            ranges,
            config,
        })
    }

    /// Classifies one query, allocating scratch buffers internally.
    ///
    /// # Errors
    ///
    /// Returns [`KnnError::QueryDimensionMismatch`] if the query length is
    /// not the training feature count, and [`KnnError::NonFiniteInput`] if
    /// the query contains NaN or infinity.
    pub fn predict(&self, query: &[f64]) -> Result<Prediction, KnnError> {
        let mut scratch = KnnScratch::new(self.training.len());
        self.predict_with_scratch(query, &mut scratch)
    }

    /// Classifies one query, reusing pre-allocated scratch buffers.
    ///
    /// Identical to [`KnnClassifier::predict`] but buffers grow as needed and
    /// never shrink.
    ///
    /// # Errors
    ///
    /// Same as [`KnnClassifier::predict`].
    pub fn predict_with_scratch(
        &self,
        query: &[f64],
        scratch: &mut KnnScratch,
    ) -> Result<Prediction, KnnError> {
        self.validate_query(query)?;
        Ok(self.predict_inner(query, scratch))
    }

    /// Classifies every instance in `queries`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`KnnError::FeatureCountMismatch`] naming the first instance
    /// whose feature count differs from the training set's.
    pub fn predict_all(&self, queries: &[Instance]) -> Result<Vec<Prediction>, KnnError> {
        let n_features = self.n_features();
        if let Some((index, bad)) = queries
            .iter()
            .enumerate()
            .find(|(_, q)| q.n_features() != n_features)
        {
            return Err(KnnError::FeatureCountMismatch {
                index,
                expected: n_features,
                got: bad.n_features(),
            });
        }

        let mut scratch = KnnScratch::new(self.training.len());
        Ok(queries
            .iter()
            .map(|q| self.predict_inner(q.values(), &mut scratch))
            .collect())
    }

    fn validate_query(&self, query: &[f64]) -> Result<(), KnnError> {
        if query.len() != self.n_features() {
            return Err(KnnError::QueryDimensionMismatch {
                expected: self.n_features(),
                got: query.len(),
            });
        }
        if query.iter().any(|v| !v.is_finite()) {
            return Err(KnnError::NonFiniteInput { input: "query" });
        }
        Ok(())
    }

    /// Internal implementation that assumes the query is validated.
    fn predict_inner(&self, query: &[f64], scratch: &mut KnnScratch) -> Prediction {
        let n_training = self.training.len();

        scratch.d2_sq.clear();
        scratch.d2_sq.resize(n_training, 0.0);
        normalized_sq_distances(
            self.training.features(),
            self.n_features(),
            query,
            self.ranges.as_slice(),
            &mut scratch.d2_sq,
        );

        select_k_nearest(
            &scratch.d2_sq,
            self.k(),
            &mut scratch.pairs,
            &mut scratch.nn_indices,
            &mut scratch.nn_dists,
        );

        let labels = self.training.labels();
        scratch.nn_labels.clear();
        scratch
            .nn_labels
            .extend(scratch.nn_indices.iter().map(|&i| labels[i]));

        let (label, votes) = majority_vote(&scratch.nn_labels, &mut scratch.tally);

        let neighbours = scratch
            .nn_indices
            .iter()
            .zip(&scratch.nn_dists)
            .map(|(&index, &distance)| Neighbour {
                index,
                distance,
                label: labels[index],
            })
            .collect();

        Prediction::new(label, votes, neighbours)
    }

    /// Returns the number of neighbours consulted per prediction.
    pub fn k(&self) -> usize {
        self.config.k()
    }

    /// Returns the number of features per instance.
    pub fn n_features(&self) -> usize {
        self.training.n_features()
    }

    /// Returns the number of training instances.
    pub fn n_training(&self) -> usize {
        self.training.len()
    }

    /// Returns the feature ranges computed from the training set.
    pub fn ranges(&self) -> &FeatureRanges {
        &self.ranges
    }

}
