//! Persisted training artifacts.
//!
//! Training produces two files that are only meaningful together: the fitted
//! model and the ordered feature-column list it was fit against. The column
//! file keeps the `{"data_columns": [...]}` shape of the reference pipeline
//! so existing column files remain readable. Loading validates that the two
//! agree; serving must refuse to start on a mismatch rather than guess.
//!
//! Once loaded, artifacts are immutable. The serving layer shares one loaded
//! snapshot read-only across all requests; a retrain publishes a new
//! snapshot instead of mutating the loaded one.

use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::PriceModel;
use crate::preprocessing::encode::NUMERIC_COLUMNS;

pub const COLUMNS_FILE: &str = "columns.json";
pub const MODEL_FILE: &str = "model.json";

#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("Artifacts unavailable: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt artifact: {0}")]
    Json(#[from] serde_json::Error),

    #[error(
        "Column list and model disagree: {columns} columns vs {coefficients} coefficients; \
         retrain instead of serving a mismatched pair"
    )]
    SchemaMismatch { columns: usize, coefficients: usize },

    #[error("Column list must start with {NUMERIC_COLUMNS:?}")]
    MalformedColumns,
}

#[derive(Serialize, Deserialize)]
struct ColumnsFile {
    data_columns: Vec<String>,
}

/// A consistent (model, column list) pair.
#[derive(Debug, Clone)]
pub struct ModelArtifacts {
    model: PriceModel,
    columns: Vec<String>,
}

impl ModelArtifacts {
    /// Pairs a model with its column list, rejecting mismatched lengths.
    pub fn new(model: PriceModel, columns: Vec<String>) -> Result<Self, ArtifactError> {
        if model.n_features() != columns.len() {
            return Err(ArtifactError::SchemaMismatch {
                columns: columns.len(),
                coefficients: model.n_features(),
            });
        }
        if columns.len() < NUMERIC_COLUMNS.len()
            || columns[..NUMERIC_COLUMNS.len()] != NUMERIC_COLUMNS
        {
            return Err(ArtifactError::MalformedColumns);
        }
        Ok(Self { model, columns })
    }

    pub fn model(&self) -> &PriceModel {
        &self.model
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The location categories known to the model (everything after the
    /// four numeric columns).
    pub fn locations(&self) -> &[String] {
        self.columns.get(NUMERIC_COLUMNS.len()..).unwrap_or(&[])
    }

    pub fn save<P: AsRef<Path>>(&self, dir: P) -> Result<(), ArtifactError> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;

        let columns = ColumnsFile {
            data_columns: self.columns.clone(),
        };
        serde_json::to_writer_pretty(File::create(dir.join(COLUMNS_FILE))?, &columns)?;
        serde_json::to_writer_pretty(File::create(dir.join(MODEL_FILE))?, &self.model)?;

        tracing::info!(dir = %dir.display(), "Saved model artifacts");
        Ok(())
    }

    /// Loads both artifact files and re-validates their agreement.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self, ArtifactError> {
        let dir = dir.as_ref();

        let columns: ColumnsFile = serde_json::from_reader(File::open(dir.join(COLUMNS_FILE))?)?;
        let model: PriceModel = serde_json::from_reader(File::open(dir.join(MODEL_FILE))?)?;

        let artifacts = Self::new(model, columns.data_columns)?;
        tracing::info!(
            dir = %dir.display(),
            features = artifacts.columns.len(),
            locations = artifacts.locations().len(),
            "Loaded model artifacts"
        );
        Ok(artifacts)
    }
}
