//! JSON output structures for evaluation results.

use serde::Serialize;

use crate::accuracy::Accuracy;
use crate::error::EvaluateError;

/// Top-level evaluation output.
#[derive(Debug, Serialize)]
pub struct EvaluationOutput {
    /// Run summary and overall accuracy.
    pub summary: Summary,
    /// Per-label scores, ordered by label value.
    pub per_label: Vec<LabelScore>,
    /// One record per test instance, in input order.
    pub predictions: Vec<InstanceRecord>,
}

impl EvaluationOutput {
    /// Returns the overall accuracy.
    pub fn accuracy(&self) -> Accuracy {
        Accuracy::new(self.summary.correct, self.summary.n_test)
    }
}

/// Summary of the classifier and the test run.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub k: usize,
    pub n_features: usize,
    pub n_training: usize,
    pub n_test: usize,
    pub correct: usize,
    pub accuracy: f64,
}

/// Score for one true label.
#[derive(Debug, Clone, Serialize)]
pub struct LabelScore {
    pub label: f64,
    /// Test instances carrying this label.
    pub support: usize,
    /// Of those, how many were predicted correctly.
    pub correct: usize,
    pub recall: f64,
}

/// Prediction for a single test instance.
#[derive(Debug, Clone, Serialize)]
pub struct InstanceRecord {
    pub index: usize,
    pub label: f64,
    pub predicted: f64,
    pub correct: bool,
    pub votes: usize,
    pub nearest_distance: f64,
}

/// Serialize evaluation output to a pretty-printed JSON string.
pub fn to_json(output: &EvaluationOutput) -> Result<String, EvaluateError> {
    serde_json::to_string_pretty(output).map_err(|e| EvaluateError::Serialization {
        reason: e.to_string(),
    })
}
