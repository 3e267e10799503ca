//! Rare-location collapsing.
//!
//! The raw data carries over a thousand distinct location strings, most with
//! a handful of rows. Locations at or below the configured count collapse
//! into the literal "other" category so the one-hot encoding stays bounded
//! and the per-location outlier statistics have usable group sizes.

use std::collections::{HashMap, HashSet};

use crate::types::CleanRecord;

pub const OTHER_LOCATION: &str = "other";

/// Trims location whitespace, counts rows per location on the current set,
/// and rewrites every location with count <= `threshold` to "other".
/// Strictly `<=` collapses; a count of threshold + 1 retains its label.
pub fn collapse_rare_locations(
    mut records: Vec<CleanRecord>,
    threshold: usize,
) -> Vec<CleanRecord> {
    for record in &mut records {
        let trimmed = record.location.trim();
        if trimmed.len() != record.location.len() {
            record.location = trimmed.to_string();
        }
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in &records {
        *counts.entry(record.location.as_str()).or_default() += 1;
    }

    let rare: HashSet<String> = counts
        .iter()
        .filter(|(_, &count)| count <= threshold)
        .map(|(&location, _)| location.to_string())
        .collect();

    let retained = counts.len() - rare.len();
    tracing::info!(
        locations = counts.len(),
        collapsed = rare.len(),
        retained,
        "Collapsed rare locations"
    );

    for record in &mut records {
        if rare.contains(&record.location) {
            record.location = OTHER_LOCATION.to_string();
        }
    }

    records
}
