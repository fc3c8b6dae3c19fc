
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

/// A new patient record keyed by feature name. Key order carries no
/// meaning; `order_features` re-aligns the values into the training
/// column order before any transform.
pub type PatientRecord = HashMap<String, f64>;

#[derive(Error, Debug)]
pub enum PatientError {
    #[error("Patient record is missing feature '{0}'")]
    MissingFeature(String),

    #[error("Failed to read patient record: {0}")]
    Io(#[from] std::io::Error),

    #[error("Patient record is not a JSON object of feature name to number: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read a record from a JSON object file.
pub fn load_record(path: &Path) -> Result<PatientRecord, PatientError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Produce the feature vector in the exact training column order. Extra
/// keys are dropped; a missing key is an error naming the feature rather
/// than a silent column shift.
pub fn order_features(record: &PatientRecord, columns: &[String]) -> Result<Vec<f64>, PatientError> {
    columns
        .iter()
        .map(|column| {
            record
                .get(column)
                .copied()
                .ok_or_else(|| PatientError::MissingFeature(column.clone()))
        })
        .collect()
}

/// The hand-authored example record: a 65-year-old with low ejection
/// fraction and elevated serum creatinine.
pub fn example() -> PatientRecord {
    let mut record = PatientRecord::new();
    record.insert("age".to_string(), 65.0);
    record.insert("anaemia".to_string(), 0.0);
    record.insert("creatinine_phosphokinase".to_string(), 150.0);
    record.insert("diabetes".to_string(), 1.0);
    record.insert("ejection_fraction".to_string(), 30.0);
    record.insert("high_blood_pressure".to_string(), 1.0);
    record.insert("platelets".to_string(), 250_000.0);
    record.insert("serum_creatinine".to_string(), 1.8);
    record.insert("serum_sodium".to_string(), 134.0);
    record.insert("sex".to_string(), 1.0);
    record.insert("smoking".to_string(), 0.0);
    record
}
