//! Serving-time prediction.
//!
//! Builds a feature vector with the exact layout frozen at training time and
//! evaluates the loaded model on it. Pure and side-effect free; safe to call
//! concurrently against a shared loaded snapshot.

use crate::artifacts::ModelArtifacts;
use crate::models::ModelError;
use crate::preprocessing::encode::NUMERIC_COLUMNS;

/// Builds the feature vector for one property in the training-time layout:
/// the four numeric columns, then the one-hot location indicators in the
/// frozen column order.
///
/// An unknown (or "other") location leaves every indicator at zero, which
/// encodes the reference category; it is a documented fallback, never an
/// error.
pub fn feature_vector(
    artifacts: &ModelArtifacts,
    location: &str,
    total_sqft: f64,
    bhk: u32,
    bath: f64,
    balcony: f64,
) -> Vec<f64> {
    let mut features = vec![0.0; artifacts.columns().len()];
    features[0] = total_sqft;
    features[1] = bath;
    features[2] = balcony;
    features[3] = bhk as f64;

    let location = location.to_lowercase();
    if let Some(offset) = artifacts.locations().iter().position(|l| *l == location) {
        features[NUMERIC_COLUMNS.len() + offset] = 1.0;
    }

    features
}

/// Estimates the price in Lakhs for the given property, rounded to two
/// decimal places. Callers validate `total_sqft > 0`.
pub fn estimate_price(
    artifacts: &ModelArtifacts,
    location: &str,
    total_sqft: f64,
    bhk: u32,
    bath: f64,
    balcony: f64,
) -> Result<f64, ModelError> {
    let features = feature_vector(artifacts, location, total_sqft, bhk, bath, balcony);
    let price = artifacts.model().predict_one(&features)?;
    Ok((price * 100.0).round() / 100.0)
}
