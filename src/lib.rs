//! Bengaluru house price model.
//!
//! Offline: a cleaning and feature-engineering pipeline over historical
//! transactions, outlier removal, and a one-shot linear fit producing a
//! persisted (model, column list) artifact pair. Online: a pure prediction
//! function over the loaded artifacts, fronted by a thin JSON API.

pub mod artifacts;
pub mod config;
pub mod models;
pub mod predict;
pub mod preprocessing;
pub mod serve;
pub mod types;

pub use artifacts::{ArtifactError, ModelArtifacts};
pub use config::PipelineConfig;
pub use models::{PriceModel, TrainReport};
pub use predict::{estimate_price, feature_vector};
