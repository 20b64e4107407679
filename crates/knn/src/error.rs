//! Error types for the nearby-knn crate.

/// Error type for all fallible operations in the nearby-knn crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KnnError {
    /// Returned when the training set has no instances.
    #[error("training set is empty")]
    EmptyTrainingSet,

    /// Returned when an instance has no feature values.
    #[error("instances must have at least one feature")]
    NoFeatures,

    /// Returned when k is zero.
    #[error("k must be >= 1, got {k}")]
    InvalidK {
        /// The invalid k value.
        k: usize,
    },

    /// Returned when k exceeds the number of training instances.
    #[error("k = {k} exceeds the number of training instances ({n_training})")]
    KExceedsTrainingSet {
        /// The requested k.
        k: usize,
        /// Number of training instances available.
        n_training: usize,
    },

    /// Returned when an instance's feature count differs from the training set.
    #[error("instance {index} has {got} features, expected {expected}")]
    FeatureCountMismatch {
        /// Position of the offending instance in its collection.
        index: usize,
        /// Feature count of the training set.
        expected: usize,
        /// Feature count of the offending instance.
        got: usize,
    },

    /// Returned when a query's length does not match the feature count.
    #[error("query has {got} features, expected {expected}")]
    QueryDimensionMismatch {
        /// Feature count of the training set.
        expected: usize,
        /// Length of the query.
        got: usize,
    },

    /// Returned when a feature is constant across the training set and the
    /// configured policy rejects zero ranges.
    #[error("feature {feature} has zero range across the training set")]
    ZeroRange {
        /// Index of the constant feature.
        feature: usize,
    },

    /// Returned when a required input contains NaN or infinity.
    #[error("non-finite value in {input}")]
    NonFiniteInput {
        /// Name of the input containing the non-finite value.
        input: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_empty_training_set() {
        assert_eq!(KnnError::EmptyTrainingSet.to_string(), "training set is empty");
    }

    #[test]
    fn error_invalid_k() {
        let e = KnnError::InvalidK { k: 0 };
        assert_eq!(e.to_string(), "k must be >= 1, got 0");
    }

    #[test]
    fn error_k_exceeds_training_set() {
        let e = KnnError::KExceedsTrainingSet {
            k: 7,
            n_training: 3,
        };
        assert_eq!(
            e.to_string(),
            "k = 7 exceeds the number of training instances (3)"
        );
    }

    #[test]
    fn error_feature_count_mismatch() {
        let e = KnnError::FeatureCountMismatch {
            index: 4,
            expected: 13,
            got: 12,
        };
        assert_eq!(e.to_string(), "instance 4 has 12 features, expected 13");
    }

    #[test]
    fn error_query_dimension_mismatch() {
        let e = KnnError::QueryDimensionMismatch {
            expected: 2,
            got: 3,
        };
        assert_eq!(e.to_string(), "query has 3 features, expected 2");
    }

    #[test]
    fn error_zero_range() {
        let e = KnnError::ZeroRange { feature: 5 };
        assert_eq!(
            e.to_string(),
            "feature 5 has zero range across the training set"
        );
    }

    #[test]
    fn error_non_finite_input() {
        let e = KnnError::NonFiniteInput { input: "label" };
        assert_eq!(e.to_string(), "non-finite value in label");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<KnnError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<KnnError>();
    }
}
