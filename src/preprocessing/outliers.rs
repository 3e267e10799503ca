//! Outlier removal.
//!
//! Three passes over the cleaned rows: a row-level area plausibility check,
//! a per-location statistical trim on price per square foot, and a
//! per-location consistency check between adjacent bedroom counts. A final
//! row-level bathroom sanity check closes the stage. Each pass is a pure
//! function from a row set to a smaller row set.

use std::collections::HashMap;

use crate::types::CleanRecord;

/// Drops rows offering less than `min_sqft_per_bhk` square feet per bedroom.
pub fn filter_implausible_area(
    records: Vec<CleanRecord>,
    min_sqft_per_bhk: f64,
) -> Vec<CleanRecord> {
    let before = records.len();
    let retained: Vec<CleanRecord> = records
        .into_iter()
        .filter(|r| !(r.total_sqft / (r.bhk as f64) < min_sqft_per_bhk))
        .collect();

    tracing::info!(
        rows = retained.len(),
        dropped = before - retained.len(),
        "Applied area plausibility filter"
    );
    retained
}

/// Drops rows with implausibly many bathrooms (`bath >= bhk + max_excess`).
pub fn filter_bath_outliers(records: Vec<CleanRecord>, max_excess: f64) -> Vec<CleanRecord> {
    let before = records.len();
    let retained: Vec<CleanRecord> = records
        .into_iter()
        .filter(|r| r.bath < r.bhk as f64 + max_excess)
        .collect();

    tracing::info!(
        rows = retained.len(),
        dropped = before - retained.len(),
        "Applied bathroom sanity filter"
    );
    retained
}

/// Population mean and standard deviation.
fn mean_and_std(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    (mean, variance.sqrt())
}

/// Per-location statistical trim on price per square foot.
///
/// Within each location, retains only rows whose price per sqft lies in
/// `(m - s, m + s]` where m and s are the group's population mean and
/// standard deviation. The interval is exclusive below and inclusive above;
/// that asymmetry is part of the contract. Singleton and zero-variance
/// groups have s = 0 and degenerate to retaining rows equal to the mean.
pub fn trim_price_per_sqft_outliers(records: Vec<CleanRecord>) -> Vec<CleanRecord> {
    let mut grouped: HashMap<&str, Vec<f64>> = HashMap::new();
    for record in &records {
        grouped
            .entry(record.location.as_str())
            .or_default()
            .push(record.price_per_sqft());
    }

    let stats: HashMap<String, (f64, f64)> = grouped
        .into_iter()
        .map(|(location, values)| (location.to_string(), mean_and_std(&values)))
        .collect();

    let before = records.len();
    let retained: Vec<CleanRecord> = records
        .into_iter()
        .filter(|r| {
            let (m, s) = stats[&r.location];
            let pps = r.price_per_sqft();
            pps > m - s && pps <= m + s
        })
        .collect();

    tracing::info!(
        rows = retained.len(),
        dropped = before - retained.len(),
        locations = stats.len(),
        "Trimmed price-per-sqft outliers"
    );
    retained
}

struct BhkGroupStats {
    mean: f64,
    count: usize,
}

/// Per-location consistency check between adjacent bedroom counts.
///
/// Within each location, a k-bhk row priced (per sqft) below the mean of the
/// (k-1)-bhk group is treated as a mispriced listing and removed, provided
/// the (k-1) group has more than `reference_min_count` rows. The comparison
/// chains exactly one level down. All group statistics come from a snapshot
/// taken before any removal, and the flagged rows are dropped in one batch
/// so removals never perturb other groups' statistics.
pub fn remove_bhk_price_outliers(
    records: Vec<CleanRecord>,
    reference_min_count: usize,
) -> Vec<CleanRecord> {
    let mut grouped: HashMap<(&str, u32), Vec<f64>> = HashMap::new();
    for record in &records {
        grouped
            .entry((record.location.as_str(), record.bhk))
            .or_default()
            .push(record.price_per_sqft());
    }

    let stats: HashMap<(String, u32), BhkGroupStats> = grouped
        .into_iter()
        .map(|((location, bhk), values)| {
            let (mean, _) = mean_and_std(&values);
            (
                (location.to_string(), bhk),
                BhkGroupStats {
                    mean,
                    count: values.len(),
                },
            )
        })
        .collect();

    let flagged: Vec<bool> = records
        .iter()
        .map(|r| {
            if r.bhk == 0 {
                return false;
            }
            match stats.get(&(r.location.clone(), r.bhk - 1)) {
                Some(reference) if reference.count > reference_min_count => {
                    r.price_per_sqft() < reference.mean
                }
                _ => false,
            }
        })
        .collect();

    let before = records.len();
    let retained: Vec<CleanRecord> = records
        .into_iter()
        .zip(flagged)
        .filter(|(_, flagged)| !flagged)
        .map(|(record, _)| record)
        .collect();

    tracing::info!(
        rows = retained.len(),
        dropped = before - retained.len(),
        "Removed bhk price-consistency outliers"
    );
    retained
}
