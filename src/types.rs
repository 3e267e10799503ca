//! Data types shared across the pipeline and the serving layer.

use serde::{Deserialize, Serialize};

/// One row of the raw transaction CSV.
///
/// The `area_type`, `availability` and `society` columns carry no signal for
/// this model and are simply not mapped, which drops them at read time.
/// Every retained field is optional so that missing cells survive
/// deserialization; rows with any missing retained field are discarded by the
/// loader.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    pub location: Option<String>,
    /// Free text such as "3 BHK" or "4 Bedroom".
    pub size: Option<String>,
    /// Free text: a plain number, a "low - high" range, or an unparseable
    /// unit string like "34.46Sq. Meter".
    pub total_sqft: Option<String>,
    pub bath: Option<f64>,
    pub balcony: Option<f64>,
    /// Sale price in Lakhs (the regression target).
    pub price: Option<f64>,
}

/// A fully parsed transaction, produced by the normalizer and consumed by
/// every later stage.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanRecord {
    pub location: String,
    pub total_sqft: f64,
    pub bath: f64,
    pub balcony: f64,
    pub bhk: u32,
    /// Price in Lakhs.
    pub price: f64,
}

impl CleanRecord {
    /// Rupees per square foot. Only meaningful for `total_sqft > 0`, which
    /// the area-plausibility filter guarantees for the stages that use it.
    pub fn price_per_sqft(&self) -> f64 {
        self.price * 100_000.0 / self.total_sqft
    }
}

/// Body of `POST /api/predict`.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictRequest {
    pub location: String,
    pub total_sqft: f64,
    pub bhk: u32,
    pub bath: f64,
    pub balcony: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictResponse {
    pub predicted_price_lakhs: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LocationsResponse {
    pub locations: Vec<String>,
}
