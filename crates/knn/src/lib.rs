//! Range-normalized k-nearest-neighbour classification.
//!
//! Each feature's squared difference is divided by the square of that
//! feature's training-set range, so features with large natural magnitude do
//! not dominate:
//!
//! ```text
//! distance(a, b) = sqrt( Σᵢ (a[i] − b[i])² / range[i]² )
//! ```
//!
//! The predicted label is the majority among the k nearest training
//! instances. Ties are resolved deterministically:
//!
//! | Tie | Rule |
//! |-----|------|
//! | Equal distances | Training-set order (stable sort) |
//! | Equal vote counts | Label of the nearest neighbour among the tied labels |
//!
//! # Quick start
//!
//! ```
//! use nearby_knn::{ClassifierConfig, Instance, KnnClassifier, TrainingSet};
//!
//! let training = TrainingSet::new(&[
//!     Instance::new(vec![1.0, 10.0], 0.0).unwrap(),
//!     Instance::new(vec![2.0, 20.0], 0.0).unwrap(),
//!     Instance::new(vec![8.0, 80.0], 1.0).unwrap(),
//!     Instance::new(vec![9.0, 90.0], 1.0).unwrap(),
//! ])
//! .unwrap();
//!
//! let classifier = KnnClassifier::fit(training, ClassifierConfig::new(3)).unwrap();
//! let prediction = classifier.predict(&[7.5, 70.0]).unwrap();
//! assert_eq!(prediction.label().value(), 1.0);
//! ```
//!
//! # Architecture
//!
//! ```text
//! KnnClassifier::fit()
//!   ├─ validate k
//!   └─ FeatureRanges::from_training()  (range.rs)
//!
//! KnnClassifier::predict()
//!   ├─ validate query
//!   ├─ normalized_sq_distances()       (distance.rs)
//!   ├─ select_k_nearest()              (select.rs)
//!   └─ majority_vote()                 (vote.rs)
//! ```
//!
//! For many queries, use [`KnnClassifier::predict_with_scratch`] with a
//! reusable [`KnnScratch`] to avoid per-call heap allocation.

pub mod config;
pub mod error;
pub mod instance;
pub mod knn;
pub mod range;
pub mod result;

pub(crate) mod distance;
pub(crate) mod select;
pub(crate) mod vote;

pub use config::{ClassifierConfig, ZeroRangePolicy};
pub use distance::normalized_distance;
pub use error::KnnError;
pub use instance::{Instance, Label, TrainingSet};
pub use knn::{KnnClassifier, KnnScratch};
pub use range::FeatureRanges;
pub use result::{Neighbour, Prediction};
