//! One-shot training job.
//!
//! Runs the cleaning pipeline over the raw transaction CSV, fits the linear
//! model, reports the holdout R², and writes the artifact pair the serving
//! binary consumes.
//!
//! Usage: train <dataset.csv> [artifacts-dir] [config.json]

use anyhow::{Context, Result};

use housing_ml::preprocessing::{load_records, prepare};
use housing_ml::{models, ModelArtifacts, PipelineConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let dataset = args
        .next()
        .context("Usage: train <dataset.csv> [artifacts-dir] [config.json]")?;
    let artifacts_dir = args.next().unwrap_or_else(|| "artifacts".to_string());
    let config = match args.next() {
        Some(path) => {
            PipelineConfig::from_path(&path).with_context(|| format!("Bad config: {path}"))?
        }
        None => PipelineConfig::default(),
    };

    let records = load_records(&dataset)?;
    let encoded = prepare(records, &config);

    let report = models::train(encoded.features, encoded.targets, &config)?;
    tracing::info!(
        holdout_r2 = report.holdout_r2,
        n_train = report.n_train,
        n_test = report.n_test,
        "Training complete"
    );

    let artifacts = ModelArtifacts::new(report.model, encoded.columns)?;
    artifacts.save(&artifacts_dir)?;

    println!(
        "Trained on {} rows ({} holdout), R² = {:.4}, artifacts in {}",
        report.n_train, report.n_test, report.holdout_r2, artifacts_dir
    );
    Ok(())
}
