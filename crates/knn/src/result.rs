//! Output types for KNN predictions.

use crate::instance::Label;

/// One of the k nearest training instances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbour {
    /// Row index into the training set.
    pub index: usize,
    /// Range-normalized distance to the query.
    pub distance: f64,
    /// Label of the training instance.
    pub label: Label,
}

/// Result of classifying one query.
#[derive(Debug, Clone)]
pub struct Prediction {
    label: Label,
    votes: usize,
    neighbours: Vec<Neighbour>,
}

impl Prediction {
    /// Creates a new `Prediction`.
    pub(crate) fn new(label: Label, votes: usize, neighbours: Vec<Neighbour>) -> Self {
        Self {
            label,
            votes,
            neighbours,
        }
    }

    /// Returns the predicted label.
    pub fn label(&self) -> Label {
        self.label
    }

    /// Returns how many of the k neighbours carry the predicted label.
    pub fn votes(&self) -> usize {
        self.votes
    }

    /// Returns the k nearest neighbours, sorted by ascending distance.
    pub fn neighbours(&self) -> &[Neighbour] {
        &self.neighbours
    }

    /// Returns the closest neighbour.
    pub fn nearest(&self) -> &Neighbour {
        &self.neighbours[0]
    }
}
