//! Evaluation error types.

/// Errors that can occur during evaluation.
#[derive(Debug, thiserror::Error)]
pub enum EvaluateError {
    /// The test set has no instances.
    #[error("test set is empty")]
    EmptyTestSet,

    /// Classifying a test instance failed.
    #[error("classification failed: {0}")]
    Classification(#[from] nearby_knn::KnnError),

    /// JSON serialization failed.
    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}
