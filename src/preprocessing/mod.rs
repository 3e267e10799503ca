//! Offline data-cleaning and feature-engineering pipeline.
//!
//! Each stage is a pure function from a row set to a row set; `prepare`
//! composes them in the fixed order the model contract depends on:
//! normalize, collapse rare locations, then the outlier filters (area,
//! price-per-sqft trim, bhk consistency, bathrooms), then encoding. The
//! collapser must run before the outlier filters so the per-location
//! statistics see the collapsed categories.

pub mod collapse;
pub mod encode;
pub mod loader;
pub mod normalize;
pub mod outliers;

pub use collapse::collapse_rare_locations;
pub use encode::{encode, EncodedDataset};
pub use loader::load_records;
pub use normalize::{normalize, parse_bhk, parse_sqft};
pub use outliers::{
    filter_bath_outliers, filter_implausible_area, remove_bhk_price_outliers,
    trim_price_per_sqft_outliers,
};

use crate::config::PipelineConfig;
use crate::preprocessing::loader::LoadedRecord;

/// Runs the full cleaning pipeline and returns the encoded training set.
pub fn prepare(records: Vec<LoadedRecord>, config: &PipelineConfig) -> EncodedDataset {
    let records = normalize(records);
    let records = collapse_rare_locations(records, config.location_collapse_threshold);
    let records = filter_implausible_area(records, config.min_sqft_per_bhk);
    let records = trim_price_per_sqft_outliers(records);
    let records = remove_bhk_price_outliers(records, config.bhk_reference_min_count);
    let records = filter_bath_outliers(records, config.max_bath_excess);
    encode(&records)
}
