//! Raw transaction loading.
//!
//! Reads the transaction CSV and drops what the pipeline cannot use: the
//! `area_type`, `availability` and `society` columns (never mapped) and any
//! row with a missing retained field.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use csv::Reader;

use crate::types::RawRecord;

/// A raw row with every retained field present.
#[derive(Debug, Clone)]
pub struct LoadedRecord {
    pub location: String,
    pub size: String,
    pub total_sqft: String,
    pub bath: f64,
    pub balcony: f64,
    pub price: f64,
}

/// Loads the transaction CSV. Empty input yields an empty set, not an error.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<LoadedRecord>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open dataset: {:?}", path.as_ref()))?;

    let mut reader = Reader::from_reader(file);
    let mut records = Vec::new();
    let mut dropped = 0usize;

    for result in reader.deserialize() {
        let raw: RawRecord = result.context("Failed to parse CSV row")?;
        match complete(raw) {
            Some(record) => records.push(record),
            None => dropped += 1,
        }
    }

    tracing::info!(
        rows = records.len(),
        dropped_nulls = dropped,
        "Loaded transaction records"
    );

    Ok(records)
}

fn complete(raw: RawRecord) -> Option<LoadedRecord> {
    Some(LoadedRecord {
        location: raw.location?,
        size: raw.size?,
        total_sqft: raw.total_sqft?,
        bath: raw.bath?,
        balcony: raw.balcony?,
        price: raw.price?,
    })
}
