//! Integration tests for KnnError variants.

use nearby_knn::{
    ClassifierConfig, Instance, KnnClassifier, KnnError, TrainingSet, ZeroRangePolicy,
};

fn two_point() -> TrainingSet {
    TrainingSet::new(&[
        Instance::new(vec![0.0, 1.0], 0.0).unwrap(),
        Instance::new(vec![1.0, 1.0], 1.0).unwrap(),
    ])
    .unwrap()
}

#[test]
fn error_empty_training_set() {
    assert!(matches!(
        TrainingSet::new(&[]),
        Err(KnnError::EmptyTrainingSet)
    ));
}

#[test]
fn error_ragged_training_set() {
    let result = TrainingSet::new(&[
        Instance::new(vec![0.0, 1.0], 0.0).unwrap(),
        Instance::new(vec![1.0], 1.0).unwrap(),
    ]);
    assert!(matches!(
        result,
        Err(KnnError::FeatureCountMismatch {
            index: 1,
            expected: 2,
            got: 1
        })
    ));
}

#[test]
fn error_k_zero() {
    let result = KnnClassifier::fit(two_point(), ClassifierConfig::new(0));
    assert!(matches!(result, Err(KnnError::InvalidK { k: 0 })));
}

#[test]
fn error_k_too_large() {
    let result = KnnClassifier::fit(two_point(), ClassifierConfig::new(3));
    assert!(matches!(
        result,
        Err(KnnError::KExceedsTrainingSet {
            k: 3,
            n_training: 2
        })
    ));
}

#[test]
fn error_zero_range_rejected() {
    let config = ClassifierConfig::new(1).with_zero_range(ZeroRangePolicy::Reject);
    let result = KnnClassifier::fit(two_point(), config);
    assert!(matches!(result, Err(KnnError::ZeroRange { feature: 1 })));
}

#[test]
fn error_overflowing_range() {
    let training = TrainingSet::new(&[
        Instance::new(vec![1e308], 0.0).unwrap(),
        Instance::new(vec![-1e308], 1.0).unwrap(),
    ])
    .unwrap();
    let result = KnnClassifier::fit(training, ClassifierConfig::new(2));
    assert!(matches!(
        result,
        Err(KnnError::NonFiniteInput { input: "ranges" })
    ));
}

#[test]
fn far_query_distances_sort_last() {
    let training = TrainingSet::new(&[
        Instance::new(vec![0.0], 0.0).unwrap(),
        Instance::new(vec![1.0], 1.0).unwrap(),
    ])
    .unwrap();
    let clf = KnnClassifier::fit(training, ClassifierConfig::new(2)).unwrap();
    // (q - t) / range overflows to +inf for both rows, never NaN
    let p = clf.predict(&[f64::MAX]).unwrap();
    for n in p.neighbours() {
        assert!(!n.distance.is_nan());
    }
    let p = clf.predict(&[-1e300]).unwrap();
    assert_eq!(p.nearest().index, 0);
}

#[test]
fn error_query_dimension() {
    let clf = KnnClassifier::fit(two_point(), ClassifierConfig::new(1)).unwrap();
    assert!(matches!(
        clf.predict(&[0.0, 1.0, 2.0]),
        Err(KnnError::QueryDimensionMismatch {
            expected: 2,
            got: 3
        })
    ));
}

#[test]
fn error_inf_in_query() {
    let clf = KnnClassifier::fit(two_point(), ClassifierConfig::new(1)).unwrap();
    assert!(matches!(
        clf.predict(&[f64::INFINITY, 0.0]),
        Err(KnnError::NonFiniteInput { input: "query" })
    ));
}

#[test]
fn error_nan_label() {
    assert!(matches!(
        Instance::new(vec![0.0], f64::NAN),
        Err(KnnError::NonFiniteInput { input: "label" })
    ));
}
