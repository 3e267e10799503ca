//! Model fitting and holdout scoring.
//!
//! The terminal step of the training pipeline: a deterministic seeded 80/20
//! split, an ordinary least-squares fit, and an informational holdout R².
//! Training succeeds regardless of the score; it is logged for
//! observability, never enforced.

use linfa::traits::Fit;
use linfa::Dataset;
use linfa_linear::LinearRegression;
use ndarray::{Array1, Array2, Axis};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use thiserror::Error;

use crate::config::PipelineConfig;
use crate::models::linear::{ModelError, PriceModel};

#[derive(Error, Debug)]
pub enum TrainError {
    #[error("Cannot fit a model on an empty training partition")]
    EmptyTrainSet,

    #[error("Least-squares fit failed: {0}")]
    Fit(String),

    #[error("Holdout scoring failed: {0}")]
    Scoring(#[from] ModelError),
}

/// Outcome of a training run.
#[derive(Debug)]
pub struct TrainReport {
    pub model: PriceModel,
    /// Coefficient of determination on the holdout partition; 0.0 when the
    /// holdout is empty or has a constant target.
    pub holdout_r2: f64,
    pub n_train: usize,
    pub n_test: usize,
}

/// Shuffles row indices with a seeded RNG and splits off the test fraction.
/// The same seed always produces the same partitions.
pub fn train_test_split(
    features: &Array2<f64>,
    targets: &Array1<f64>,
    test_fraction: f64,
    seed: u64,
) -> (
    (Array2<f64>, Array1<f64>),
    (Array2<f64>, Array1<f64>),
) {
    let mut indices: Vec<usize> = (0..features.nrows()).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let n_test = (features.nrows() as f64 * test_fraction).round() as usize;
    let (test_idx, train_idx) = indices.split_at(n_test);

    let train = (
        features.select(Axis(0), train_idx),
        targets.select(Axis(0), train_idx),
    );
    let test = (
        features.select(Axis(0), test_idx),
        targets.select(Axis(0), test_idx),
    );
    (train, test)
}

/// Fits an OLS model and scores it on the holdout partition.
pub fn train(
    features: Array2<f64>,
    targets: Array1<f64>,
    config: &PipelineConfig,
) -> Result<TrainReport, TrainError> {
    let ((x_train, y_train), (x_test, y_test)) =
        train_test_split(&features, &targets, config.test_fraction, config.split_seed);

    if x_train.nrows() == 0 {
        return Err(TrainError::EmptyTrainSet);
    }

    let n_train = x_train.nrows();
    let n_test = x_test.nrows();

    let dataset = Dataset::new(x_train, y_train);
    let fitted = LinearRegression::default()
        .fit(&dataset)
        .map_err(|e| TrainError::Fit(e.to_string()))?;

    let model = PriceModel {
        intercept: fitted.intercept(),
        coefficients: fitted.params().to_vec(),
    };

    let holdout_r2 = if n_test > 0 {
        r_squared(&model, &x_test, &y_test)?
    } else {
        tracing::warn!("Holdout partition is empty, skipping scoring");
        0.0
    };

    tracing::info!(n_train, n_test, holdout_r2, "Fitted linear price model");

    Ok(TrainReport {
        model,
        holdout_r2,
        n_train,
        n_test,
    })
}

/// R² = 1 - SS_res / SS_tot against the given partition. Fails if the
/// matrix width does not match the model instead of distorting the score.
pub fn r_squared(
    model: &PriceModel,
    x: &Array2<f64>,
    y: &Array1<f64>,
) -> Result<f64, ModelError> {
    let y_mean = y.mean().unwrap_or(0.0);
    let ss_tot: f64 = y.iter().map(|&yi| (yi - y_mean).powi(2)).sum();

    let mut ss_res = 0.0;
    for (row, &yi) in x.rows().into_iter().zip(y.iter()) {
        let pred = model.predict_one(&row.to_vec())?;
        ss_res += (yi - pred).powi(2);
    }

    if ss_tot <= f64::EPSILON {
        return Ok(0.0);
    }
    Ok(1.0 - ss_res / ss_tot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn split_is_deterministic_for_a_fixed_seed() {
        let features = Array2::from_shape_fn((20, 2), |(i, j)| (i * 2 + j) as f64);
        let targets = Array1::from_shape_fn(20, |i| i as f64);

        let ((x1, y1), (t1, ty1)) = train_test_split(&features, &targets, 0.2, 10);
        let ((x2, y2), (t2, ty2)) = train_test_split(&features, &targets, 0.2, 10);

        assert_eq!(x1, x2);
        assert_eq!(y1, y2);
        assert_eq!(t1, t2);
        assert_eq!(ty1, ty2);
        assert_eq!(t1.nrows(), 4);
        assert_eq!(x1.nrows(), 16);
    }

    #[test]
    fn different_seeds_produce_different_partitions() {
        let features = Array2::from_shape_fn((50, 2), |(i, j)| (i * 2 + j) as f64);
        let targets = Array1::from_shape_fn(50, |i| i as f64);

        let ((_, y1), _) = train_test_split(&features, &targets, 0.2, 10);
        let ((_, y2), _) = train_test_split(&features, &targets, 0.2, 11);
        assert_ne!(y1, y2);
    }

    #[test]
    fn fits_an_exact_linear_relationship() {
        // y = 3 + 2*x0 + 0.5*x1, noise-free.
        let features = Array2::from_shape_fn((40, 2), |(i, j)| {
            if j == 0 {
                i as f64
            } else {
                (i % 7) as f64
            }
        });
        let targets = Array1::from_shape_fn(40, |i| {
            3.0 + 2.0 * i as f64 + 0.5 * (i % 7) as f64
        });

        let report = train(features, targets, &PipelineConfig::default()).unwrap();
        assert!((report.model.intercept - 3.0).abs() < 1e-6);
        assert!((report.model.coefficients[0] - 2.0).abs() < 1e-6);
        assert!((report.model.coefficients[1] - 0.5).abs() < 1e-6);
        assert!(report.holdout_r2 > 0.999 && report.holdout_r2 <= 1.0 + 1e-9);
    }

    #[test]
    fn scoring_a_mismatched_matrix_is_an_error_not_a_score() {
        let model = PriceModel {
            intercept: 0.0,
            coefficients: vec![1.0, 1.0, 1.0],
        };
        let x = Array2::<f64>::zeros((4, 2));
        let y = Array1::from_shape_fn(4, |i| i as f64);
        let err = r_squared(&model, &x, &y).unwrap_err();
        assert!(matches!(
            err,
            ModelError::DimensionMismatch {
                expected: 3,
                got: 2
            }
        ));
    }

    #[test]
    fn empty_input_is_rejected() {
        let features: Array2<f64> = Array2::zeros((0, 4));
        let targets: Array1<f64> = array![];
        let err = train(features, targets, &PipelineConfig::default()).unwrap_err();
        assert!(matches!(err, TrainError::EmptyTrainSet));
    }
}
