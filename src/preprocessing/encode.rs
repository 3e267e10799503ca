//! Feature encoding.
//!
//! Expands the location into one-hot indicator columns and assembles the
//! final feature matrix. The column layout is frozen here and persisted with
//! the model: index 0 total_sqft, 1 bath, 2 balcony, 3 bhk, then one
//! indicator per surviving location in alphabetical order, with "other"
//! omitted as the reference level. Column names are lowercased before
//! persisting so serving-time lookups are case-insensitive.

use std::collections::BTreeSet;

use ndarray::{Array1, Array2};

use crate::preprocessing::collapse::OTHER_LOCATION;
use crate::types::CleanRecord;

pub const NUMERIC_COLUMNS: [&str; 4] = ["total_sqft", "bath", "balcony", "bhk"];

/// The encoded training set: feature matrix, target vector, and the frozen
/// column list the matrix was built against.
#[derive(Debug)]
pub struct EncodedDataset {
    pub columns: Vec<String>,
    pub features: Array2<f64>,
    pub targets: Array1<f64>,
}

/// Builds the frozen column schema and the (X, y) pair.
pub fn encode(records: &[CleanRecord]) -> EncodedDataset {
    let locations: BTreeSet<String> = records
        .iter()
        .map(|r| r.location.to_lowercase())
        .filter(|l| l != OTHER_LOCATION)
        .collect();

    let mut columns: Vec<String> = NUMERIC_COLUMNS.iter().map(|c| c.to_string()).collect();
    columns.extend(locations);

    let mut features = Array2::zeros((records.len(), columns.len()));
    let mut targets = Array1::zeros(records.len());

    for (i, record) in records.iter().enumerate() {
        features[[i, 0]] = record.total_sqft;
        features[[i, 1]] = record.bath;
        features[[i, 2]] = record.balcony;
        features[[i, 3]] = record.bhk as f64;

        let location = record.location.to_lowercase();
        if let Some(offset) = columns[NUMERIC_COLUMNS.len()..]
            .iter()
            .position(|c| *c == location)
        {
            features[[i, NUMERIC_COLUMNS.len() + offset]] = 1.0;
        }

        targets[i] = record.price;
    }

    tracing::info!(
        rows = records.len(),
        features = columns.len(),
        locations = columns.len() - NUMERIC_COLUMNS.len(),
        "Encoded feature matrix"
    );

    EncodedDataset {
        columns,
        features,
        targets,
    }
}
