use super::*;
use std::path::PathBuf;

use crate::clusterer::{kmeans, DEFAULT_MAX_ITER, DEFAULT_RESTARTS, DEFAULT_SEED};
use crate::dataset::ClinicalDataset;
use crate::patient;

fn temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("cardioseg-{}-{}", tag, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_scaler_artifact_roundtrip() {
    let dir = temp_dir("scaler-roundtrip");
    let scaler = StandardScaler::fit(&[vec![1.0, 10.0], vec![3.0, 30.0]]).unwrap();
    let columns = vec!["age".to_string(), "ejection_fraction".to_string()];

    let artifact = ScalerArtifact::new(scaler, columns.clone(), "abc123".to_string());
    artifact.save(&dir).unwrap();

    let loaded = ScalerArtifact::load(&dir).unwrap();
    assert_eq!(loaded.version, ARTIFACT_VERSION);
    assert_eq!(loaded.dataset_sha256, "abc123");
    assert_eq!(loaded.feature_columns, columns);
    assert_eq!(loaded.scaler.mean(), artifact.scaler.mean());
    assert_eq!(loaded.scaler.std(), artifact.scaler.std());

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_model_artifact_roundtrip() {
    let dir = temp_dir("model-roundtrip");
    let points = vec![
        vec![0.0, 0.0],
        vec![0.1, 0.2],
        vec![5.0, 5.0],
        vec![5.1, 4.9],
    ];
    let fit = kmeans(&points, 2, DEFAULT_MAX_ITER, DEFAULT_RESTARTS, DEFAULT_SEED).unwrap();

    let artifact = ModelArtifact::new(fit.model.clone(), "abc123".to_string());
    artifact.save(&dir).unwrap();

    let loaded = ModelArtifact::load(&dir).unwrap();
    assert_eq!(loaded.model.k, 2);
    assert_eq!(loaded.model.centroids, fit.model.centroids);
    assert_eq!(loaded.model.inertia, fit.model.inertia);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_load_missing_artifact_fails() {
    let dir = temp_dir("missing-artifact");
    std::fs::remove_dir_all(&dir).ok();

    assert!(ScalerArtifact::load(&dir).is_err());
    assert!(ModelArtifact::load(&dir).is_err());
}

#[test]
fn test_sha256_of_known_bytes() {
    let dir = temp_dir("sha256");
    let path = dir.join("data.csv");
    std::fs::write(&path, "abc").unwrap();

    assert_eq!(
        sha256_file(&path).unwrap(),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );

    std::fs::remove_dir_all(&dir).ok();
}

// Training-time state, persisted and reloaded, must classify a new record
// exactly as a manual nearest-centroid computation in standardized space.
#[test]
fn test_persisted_state_classifies_new_record() {
    let dir = temp_dir("end-to-end");

    let feature_names: Vec<String> = [
        "age",
        "anaemia",
        "creatinine_phosphokinase",
        "diabetes",
        "ejection_fraction",
        "high_blood_pressure",
        "platelets",
        "serum_creatinine",
        "serum_sodium",
        "sex",
        "smoking",
    ]
    .iter()
    .map(|name| name.to_string())
    .collect();

    let dataset = ClinicalDataset {
        feature_names: feature_names.clone(),
        rows: vec![
            vec![75.0, 0.0, 582.0, 0.0, 20.0, 1.0, 265000.0, 1.9, 130.0, 1.0, 0.0],
            vec![55.0, 0.0, 7861.0, 0.0, 38.0, 0.0, 263358.0, 1.1, 136.0, 1.0, 0.0],
            vec![65.0, 0.0, 146.0, 0.0, 20.0, 0.0, 162000.0, 1.3, 129.0, 1.0, 1.0],
            vec![50.0, 1.0, 111.0, 0.0, 20.0, 0.0, 210000.0, 1.9, 137.0, 1.0, 0.0],
            vec![65.0, 1.0, 160.0, 1.0, 20.0, 0.0, 327000.0, 2.7, 116.0, 0.0, 0.0],
            vec![90.0, 1.0, 47.0, 0.0, 40.0, 1.0, 204000.0, 2.1, 132.0, 1.0, 1.0],
            vec![75.0, 1.0, 246.0, 0.0, 15.0, 0.0, 127000.0, 1.2, 137.0, 1.0, 0.0],
            vec![60.0, 1.0, 315.0, 1.0, 60.0, 0.0, 454000.0, 1.1, 131.0, 1.0, 1.0],
            vec![65.0, 0.0, 157.0, 0.0, 65.0, 0.0, 263358.0, 1.5, 138.0, 0.0, 0.0],
            vec![80.0, 1.0, 123.0, 0.0, 35.0, 1.0, 388000.0, 9.4, 133.0, 1.0, 1.0],
            vec![75.0, 1.0, 81.0, 0.0, 38.0, 1.0, 368000.0, 4.0, 131.0, 1.0, 1.0],
            vec![62.0, 0.0, 231.0, 0.0, 25.0, 1.0, 253000.0, 0.9, 140.0, 1.0, 1.0],
        ],
    };

    // train
    let scaler = StandardScaler::fit(&dataset.rows).unwrap();
    let scaled = scaler.transform(&dataset.rows).unwrap();
    let fit = kmeans(&scaled, 3, DEFAULT_MAX_ITER, DEFAULT_RESTARTS, DEFAULT_SEED).unwrap();

    ScalerArtifact::new(scaler, feature_names, "synthetic".to_string())
        .save(&dir)
        .unwrap();
    ModelArtifact::new(fit.model, "synthetic".to_string())
        .save(&dir)
        .unwrap();

    // classify from the persisted state alone
    let scaler_artifact = ScalerArtifact::load(&dir).unwrap();
    let model_artifact = ModelArtifact::load(&dir).unwrap();

    let record = patient::example();
    let ordered = patient::order_features(&record, &scaler_artifact.feature_columns).unwrap();
    let standardized = scaler_artifact.scaler.transform_row(&ordered).unwrap();
    let predicted = model_artifact.model.predict(&standardized).unwrap();

    assert!(predicted < 3);

    // manual nearest-centroid computation must agree
    let manual = model_artifact
        .model
        .centroids
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            let da: f64 = a
                .iter()
                .zip(&standardized)
                .map(|(x, y)| (x - y) * (x - y))
                .sum();
            let db: f64 = b
                .iter()
                .zip(&standardized)
                .map(|(x, y)| (x - y) * (x - y))
                .sum();
            da.partial_cmp(&db).unwrap()
        })
        .map(|(idx, _)| idx)
        .unwrap();
    assert_eq!(predicted, manual);

    std::fs::remove_dir_all(&dir).ok();
}
