//! Classification accuracy.

use std::fmt;

/// Fraction of test instances whose predicted label equals the true label.
///
/// Displays with six decimal places: 7 correct out of 10 renders as
/// `0.700000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accuracy {
    correct: usize,
    total: usize,
}

impl Accuracy {
    /// Creates an accuracy from counts.
    ///
    /// # Panics
    ///
    /// Debug-asserts that `correct <= total`.
    pub fn new(correct: usize, total: usize) -> Self {
        debug_assert!(correct <= total);
        Self { correct, total }
    }

    /// Returns the number of correct predictions.
    pub fn correct(&self) -> usize {
        self.correct
    }

    /// Returns the number of predictions.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Returns `correct / total`, or 0 when there were no predictions.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64
        }
    }

    /// Formats the accuracy as a percentage with six decimal places.
    pub fn percent(&self) -> String {
        format!("{:.6}%", self.fraction() * 100.0)
    }
}

impl fmt::Display for Accuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.fraction())
    }
}
