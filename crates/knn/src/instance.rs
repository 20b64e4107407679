//! Labeled instances and the validated training set.

use std::fmt;

use crate::error::KnnError;

/// Class label carried as a number.
///
/// Labels are categorical: they are compared for equality and never combined
/// arithmetically. Construction rejects NaN and infinity so equality is
/// always well defined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Label(f64);

impl Label {
    /// Creates a label from a finite number.
    ///
    /// # Errors
    ///
    /// Returns [`KnnError::NonFiniteInput`] if `value` is NaN or infinite.
    pub fn new(value: f64) -> Result<Self, KnnError> {
        if !value.is_finite() {
            return Err(KnnError::NonFiniteInput { input: "label" });
        }
        // -0.0 and 0.0 name the same class
        Ok(Self(if value == 0.0 { 0.0 } else { value }))
    }

    /// Returns the numeric value of the label.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One data row: an ordered feature vector plus its label.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    values: Vec<f64>,
    label: Label,
}

impl Instance {
    /// Creates a new instance.
    ///
    /// # Errors
    ///
    /// Returns [`KnnError::NonFiniteInput`] if any feature value or the label
    /// is NaN or infinite.
    pub fn new(values: Vec<f64>, label: f64) -> Result<Self, KnnError> {
        if values.iter().any(|v| !v.is_finite()) {
            return Err(KnnError::NonFiniteInput { input: "features" });
        }
        Ok(Self {
            values,
            label: Label::new(label)?,
        })
    }

    /// Returns the feature values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the label.
    pub fn label(&self) -> Label {
        self.label
    }

    /// Returns the number of feature values.
    pub fn n_features(&self) -> usize {
        self.values.len()
    }
}

/// Validated, immutable training data.
///
/// Features are stored as a flat row-major matrix `[n_training × n_features]`
/// alongside one label per row.
#[derive(Debug, Clone)]
pub struct TrainingSet {
    features: Vec<f64>,
    labels: Vec<Label>,
    n_features: usize,
}

impl TrainingSet {
    /// Builds a training set from instances.
    ///
    /// # Errors
    ///
    /// - [`KnnError::EmptyTrainingSet`] if `instances` is empty.
    /// - [`KnnError::NoFeatures`] if the first instance has no features.
    /// - [`KnnError::FeatureCountMismatch`] if any instance's feature count
    ///   differs from the first one's.
    pub fn new(instances: &[Instance]) -> Result<Self, KnnError> {
        let first = instances.first().ok_or(KnnError::EmptyTrainingSet)?;
        let n_features = first.n_features();
        if n_features == 0 {
            return Err(KnnError::NoFeatures);
        }

        if let Some((index, bad)) = instances
            .iter()
            .enumerate()
            .find(|(_, inst)| inst.n_features() != n_features)
        {
            return Err(KnnError::FeatureCountMismatch {
                index,
                expected: n_features,
                got: bad.n_features(),
            });
        }

        let features = instances
            .iter()
            .flat_map(|inst| inst.values().iter().copied())
            .collect();
        let labels = instances.iter().map(Instance::label).collect();

        Ok(Self {
            features,
            labels,
            n_features,
        })
    }

    /// Returns the flat row-major feature matrix.
    pub fn features(&self) -> &[f64] {
        &self.features
    }

    /// Returns the labels, one per row.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Returns an iterator over the feature rows.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.features.chunks_exact(self.n_features)
    }

    /// Returns the number of features per instance.
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Returns the number of training instances.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always `false`: construction rejects empty training sets.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
