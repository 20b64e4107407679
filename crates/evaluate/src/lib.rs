//! Score a fitted nearby classifier against labeled test data.

mod accuracy;
mod error;
mod output;

use nearby_knn::{Instance, KnnClassifier, Label};
use tracing::{debug, info};

pub use accuracy::Accuracy;
pub use error::EvaluateError;
pub use output::{EvaluationOutput, InstanceRecord, LabelScore, Summary, to_json};

/// Classify every test instance and compare against its true label.
///
/// Feature counts are checked for the whole test set before any distance is
/// computed.
///
/// # Errors
///
/// Returns [`EvaluateError::EmptyTestSet`] if `test` is empty, and
/// [`EvaluateError::Classification`] if a test instance's feature count does
/// not match the training data.
#[tracing::instrument(skip_all, fields(n_test = test.len(), k = classifier.k()))]
pub fn evaluate(
    classifier: &KnnClassifier,
    test: &[Instance],
) -> Result<EvaluationOutput, EvaluateError> {
    if test.is_empty() {
        return Err(EvaluateError::EmptyTestSet);
    }

    let predictions = classifier.predict_all(test)?;

    let records: Vec<InstanceRecord> = test
        .iter()
        .zip(&predictions)
        .enumerate()
        .map(|(index, (inst, pred))| {
            let correct = pred.label() == inst.label();
            debug!(
                index,
                label = %inst.label(),
                predicted = %pred.label(),
                correct,
                "classified"
            );
            InstanceRecord {
                index,
                label: inst.label().value(),
                predicted: pred.label().value(),
                correct,
                votes: pred.votes(),
                nearest_distance: pred.nearest().distance,
            }
        })
        .collect();

    let correct = records.iter().filter(|r| r.correct).count();
    let accuracy = Accuracy::new(correct, records.len());
    info!(correct, total = records.len(), accuracy = %accuracy, "evaluation complete");

    Ok(EvaluationOutput {
        summary: Summary {
            k: classifier.k(),
            n_features: classifier.n_features(),
            n_training: classifier.n_training(),
            n_test: records.len(),
            correct,
            accuracy: accuracy.fraction(),
        },
        per_label: per_label_scores(test, &records),
        predictions: records,
    })
}

/// Groups records by true label, ordered by label value.
fn per_label_scores(test: &[Instance], records: &[InstanceRecord]) -> Vec<LabelScore> {
    let mut scores: Vec<(Label, usize, usize)> = Vec::new();
    for (inst, record) in test.iter().zip(records) {
        let hit = usize::from(record.correct);
        match scores.iter_mut().find(|(l, _, _)| *l == inst.label()) {
            Some((_, support, correct)) => {
                *support += 1;
                *correct += hit;
            }
            None => scores.push((inst.label(), 1, hit)),
        }
    }
    scores.sort_by(|a, b| a.0.value().total_cmp(&b.0.value()));

    scores
        .into_iter()
        .map(|(label, support, correct)| LabelScore {
            label: label.value(),
            support,
            correct,
            recall: correct as f64 / support as f64,
        })
        .collect()
}
