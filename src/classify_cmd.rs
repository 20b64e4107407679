//! Classify command: fit on training data, score the test data.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use nearby_evaluate::{Accuracy, evaluate, to_json};
use nearby_io::read_instances;
use nearby_knn::{KnnClassifier, TrainingSet};

use crate::cli::ClassifyArgs;
use crate::config::NearbyConfig;
use crate::convert;

/// Run the classify pipeline.
pub fn run(args: ClassifyArgs) -> Result<()> {
    let _cmd = info_span!("classify").entered();

    // 1. Resolve configuration
    let config = match &args.config {
        Some(path) => NearbyConfig::load(path)?,
        None => NearbyConfig::default(),
    };
    let reader_cfg = convert::build_reader_config(&config.io, args.features)?;
    let classifier_cfg =
        convert::build_classifier_config(&config.classify, args.k, args.zero_range)?;

    // 2. Read both files before any distance computation
    let train = read_instances(&args.train, &reader_cfg)
        .with_context(|| format!("failed to read training data: {}", args.train.display()))?;
    let test = read_instances(&args.test, &reader_cfg)
        .with_context(|| format!("failed to read test data: {}", args.test.display()))?;

    // 3. Fit
    let training = TrainingSet::new(&train).context("invalid training data")?;
    let classifier =
        KnnClassifier::fit(training, classifier_cfg).context("failed to fit classifier")?;
    info!(
        n_training = classifier.n_training(),
        n_features = classifier.n_features(),
        k = classifier.k(),
        "classifier fitted"
    );

    // 4. Evaluate
    let output = evaluate(&classifier, &test).context("evaluation failed")?;
    println!("{}", accuracy_line(&output.accuracy()));

    // 5. Optional JSON report
    if let Some(path) = &args.output {
        let json = to_json(&output).context("failed to serialize report")?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report: {}", path.display()))?;
        info!(path = %path.display(), "report written");
    }

    Ok(())
}

/// The one-line stdout summary, e.g. `Accuracy: 0.700000 (70.000000%, 7/10 correct)`.
fn accuracy_line(accuracy: &Accuracy) -> String {
    format!(
        "Accuracy: {accuracy} ({}, {}/{} correct)",
        accuracy.percent(),
        accuracy.correct(),
        accuracy.total()
    )
}
