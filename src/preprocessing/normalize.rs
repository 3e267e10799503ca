//! Free-text field normalization.
//!
//! Turns the `size` and `total_sqft` strings into numeric features. Rows
//! whose text cannot be parsed are dropped here; that is the data-quality
//! contract of the pipeline, not an error path.

use crate::preprocessing::loader::LoadedRecord;
use crate::types::CleanRecord;

/// Parses the bedroom count from the `size` field ("3 BHK", "4 Bedroom").
/// The first whitespace token must be an integer.
pub fn parse_bhk(size: &str) -> Option<u32> {
    size.split_whitespace().next()?.parse().ok()
}

/// Parses the `total_sqft` field. A "low - high" range becomes the mean of
/// its endpoints, a plain number parses directly, and anything else (unit
/// strings like "34.46Sq. Meter") yields `None`. No unit conversion is
/// attempted; such rows are intentionally discarded.
pub fn parse_sqft(text: &str) -> Option<f64> {
    let tokens: Vec<&str> = text.split('-').collect();
    if tokens.len() == 2 {
        let low: f64 = tokens[0].trim().parse().ok()?;
        let high: f64 = tokens[1].trim().parse().ok()?;
        return Some((low + high) / 2.0);
    }
    text.trim().parse().ok()
}

/// Derives `CleanRecord`s, dropping every row with an unparseable `size` or
/// `total_sqft`.
pub fn normalize(records: Vec<LoadedRecord>) -> Vec<CleanRecord> {
    let total = records.len();
    let clean: Vec<CleanRecord> = records
        .into_iter()
        .filter_map(|r| {
            let bhk = parse_bhk(&r.size)?;
            let total_sqft = parse_sqft(&r.total_sqft)?;
            Some(CleanRecord {
                location: r.location,
                total_sqft,
                bath: r.bath,
                balcony: r.balcony,
                bhk,
                price: r.price,
            })
        })
        .collect();

    tracing::info!(
        rows = clean.len(),
        dropped_unparseable = total - clean.len(),
        "Normalized size and area fields"
    );

    clean
}
