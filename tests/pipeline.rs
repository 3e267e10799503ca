//! End-to-end pipeline test on a synthetic transaction CSV with known
//! outliers: load, clean, fit, persist, reload, and predict.

use std::io::Write;

use housing_ml::preprocessing::{load_records, prepare};
use housing_ml::{estimate_price, feature_vector, models, ModelArtifacts, PipelineConfig};

/// Builds a dataset where price is exactly 0.05 * sqft (a constant 5000
/// rupees per sqft), so the fit is exact and every per-location group has
/// zero price-per-sqft variance. On top of the valid rows it plants one row
/// for each drop path:
///
/// - a missing `bath` cell (dropped by the loader),
/// - an unparseable `total_sqft` unit string (dropped by the normalizer),
/// - an area outlier at 125 sqft per bedroom (area filter),
/// - a bathroom outlier with bath = bhk + 2 (bathroom filter).
fn push_row(
    csv: &mut String,
    location: &str,
    size: &str,
    sqft: &str,
    bath: f64,
    balcony: u32,
    price: f64,
) {
    csv.push_str(&format!(
        "Super built-up  Area,Ready To Move,{location},{size},,{sqft},{bath},{balcony},{price}\n"
    ));
}

fn synthetic_csv() -> String {
    let mut csv = String::from(
        "area_type,availability,location,size,society,total_sqft,bath,balcony,price\n",
    );

    for location in ["Whitefield", "Hebbal"] {
        for i in 0..12u32 {
            let bhk = 2 + (i / 2) % 2;
            let size = format!("{bhk} BHK");
            let bath = (2 + i % 2) as f64;
            let balcony = i % 3;
            if location == "Whitefield" && i == 5 {
                // Range-style area entry; parses to the same 1500 sqft.
                push_row(&mut csv, location, &size, "1400 - 1600", bath, balcony, 75.0);
            } else {
                let sqft = 1000 + i * 100;
                let price = sqft as f64 * 0.05;
                push_row(&mut csv, location, &size, &sqft.to_string(), bath, balcony, price);
            }
        }
    }

    // A rare location (3 rows) that must collapse into "other".
    for j in 0..3u32 {
        let sqft = 900 + j * 100;
        push_row(&mut csv, "Rare Town", "2 BHK", &sqft.to_string(), 2.0, 1, sqft as f64 * 0.05);
    }

    // Dropped by the loader: missing bath.
    csv.push_str("Plot  Area,Ready To Move,Whitefield,2 BHK,,1100,,1,55.0\n");
    // Dropped by the normalizer: unit string.
    push_row(&mut csv, "Whitefield", "2 BHK", "34.46Sq. Meter", 2.0, 1, 18.0);
    // Dropped by the area filter: 500 sqft for 4 bedrooms.
    push_row(&mut csv, "Whitefield", "4 Bedroom", "500", 2.0, 1, 25.0);
    // Dropped by the bathroom filter: bath = bhk + 2.
    push_row(&mut csv, "Hebbal", "2 BHK", "1200", 4.0, 1, 60.0);

    csv
}

#[test]
fn train_persist_reload_and_predict() {
    let mut csv_file = tempfile::NamedTempFile::new().unwrap();
    csv_file.write_all(synthetic_csv().as_bytes()).unwrap();

    let config = PipelineConfig::default();
    let records = load_records(csv_file.path()).unwrap();
    // Loader keeps everything except the missing-bath row.
    assert_eq!(records.len(), 30);

    let encoded = prepare(records, &config);

    // 12 + 12 + 3 valid rows survive; the planted outliers are gone. The
    // zero-variance groups pass the statistical trim untouched.
    assert_eq!(encoded.features.nrows(), 27);
    assert_eq!(
        encoded.columns,
        vec!["total_sqft", "bath", "balcony", "bhk", "hebbal", "whitefield"]
    );

    let features = encoded.features.clone();
    let report = models::train(encoded.features, encoded.targets, &config).unwrap();
    assert_eq!(report.n_test, 5);
    assert_eq!(report.n_train, 22);
    // The target is an exact linear function of the features.
    assert!(report.holdout_r2 > 0.99 && report.holdout_r2 <= 1.0 + 1e-9);

    let dir = tempfile::tempdir().unwrap();
    ModelArtifacts::new(report.model, encoded.columns)
        .unwrap()
        .save(dir.path())
        .unwrap();
    let artifacts = ModelArtifacts::load(dir.path()).unwrap();
    assert_eq!(
        artifacts.locations(),
        ["hebbal".to_string(), "whitefield".to_string()]
    );

    // The predictor rebuilds the training-time encoding bit-for-bit: for
    // every location kind (named, named with different case, collapsed to
    // "other") the serving-side vector equals the encoded training row.
    for (sqft, location, column) in [
        (1100.0, "Hebbal", Some(4)),
        (1100.0, "WHITEFIELD", Some(5)),
        (900.0, "Rare Town", None), // collapsed, no indicator
    ] {
        let row = (0..features.nrows())
            .find(|&i| {
                features[[i, 0]] == sqft
                    && match column {
                        Some(c) => features[[i, c]] == 1.0,
                        None => features[[i, 4]] == 0.0 && features[[i, 5]] == 0.0,
                    }
            })
            .expect("training row present");
        let encoded_row: Vec<f64> = features.row(row).to_vec();

        let rebuilt = feature_vector(
            &artifacts,
            location,
            encoded_row[0],
            encoded_row[3] as u32,
            encoded_row[1],
            encoded_row[2],
        );
        assert_eq!(rebuilt, encoded_row);

        let direct = artifacts.model().predict_one(&encoded_row).unwrap();
        let via_predictor = estimate_price(
            &artifacts,
            location,
            encoded_row[0],
            encoded_row[3] as u32,
            encoded_row[1],
            encoded_row[2],
        )
        .unwrap();
        assert_eq!(via_predictor, (direct * 100.0).round() / 100.0);
    }

    // Exact fit: a Whitefield estimate lands on 0.05 * sqft.
    let price = estimate_price(&artifacts, "Whitefield", 1000.0, 2, 2.0, 0.0).unwrap();
    assert!((price - 50.0).abs() < 0.05, "got {price}");

    // Determinism and the unknown-location fallback.
    let again = estimate_price(&artifacts, "Whitefield", 1000.0, 2, 2.0, 0.0).unwrap();
    assert_eq!(price, again);
    let unknown = estimate_price(&artifacts, "Electronic City", 1000.0, 2, 2.0, 0.0).unwrap();
    let other = estimate_price(&artifacts, "other", 1000.0, 2, 2.0, 0.0).unwrap();
    assert_eq!(unknown, other);
}

#[test]
fn empty_dataset_is_tolerated_until_the_fit() {
    let mut csv_file = tempfile::NamedTempFile::new().unwrap();
    csv_file
        .write_all(b"area_type,availability,location,size,society,total_sqft,bath,balcony,price\n")
        .unwrap();

    let config = PipelineConfig::default();
    let records = load_records(csv_file.path()).unwrap();
    let encoded = prepare(records, &config);
    assert_eq!(encoded.features.nrows(), 0);

    // Zero rows are degenerate but only the fit itself refuses them.
    let err = models::train(encoded.features, encoded.targets, &config).unwrap_err();
    assert!(matches!(err, models::TrainError::EmptyTrainSet));
}
