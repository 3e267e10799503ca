//! The fitted linear price model.
//!
//! A linear estimator is fully described by its intercept and coefficient
//! vector, so that is exactly what gets persisted. The coefficient order
//! matches the frozen column list stored alongside the model; mixing a model
//! with a different column list is guarded against both at artifact load and
//! at prediction time.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Feature vector length mismatch: model expects {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
}

/// Linear mapping from a feature vector to a price in Lakhs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceModel {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

impl PriceModel {
    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    /// Evaluates the model on a single feature vector. The vector length
    /// must equal the coefficient count; padding or truncating would
    /// silently corrupt the prediction, so a mismatch is rejected instead.
    pub fn predict_one(&self, features: &[f64]) -> Result<f64, ModelError> {
        if features.len() != self.coefficients.len() {
            return Err(ModelError::DimensionMismatch {
                expected: self.coefficients.len(),
                got: features.len(),
            });
        }

        let dot: f64 = self
            .coefficients
            .iter()
            .zip(features)
            .map(|(c, x)| c * x)
            .sum();
        Ok(self.intercept + dot)
    }
}
