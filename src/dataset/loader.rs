use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::dataset::{DatasetError, EXCLUDED_COLUMNS};

/// The loaded clinical dataset: ordered feature column names plus the
/// unscaled feature rows. The excluded columns are dropped at load time;
/// the remaining column order is exactly the CSV header order, and that
/// order is what every later single-record inference must follow.
#[derive(Debug, Clone)]
pub struct ClinicalDataset {
    pub feature_names: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

impl ClinicalDataset {
    /// Load the dataset from a CSV file with a header row.
    ///
    /// Fails before opening anything else if the file is absent, so a run
    /// against a missing dataset terminates with no partial output.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        if !path.exists() {
            return Err(DatasetError::MissingFile(path.display().to_string()));
        }
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Parse a header-rowed CSV from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
        let headers = csv_reader.headers()?.clone();

        for required in EXCLUDED_COLUMNS {
            if !headers.iter().any(|name| name == required) {
                return Err(DatasetError::MissingColumn(required.to_string()));
            }
        }

        let mut keep = Vec::new();
        for (idx, name) in headers.iter().enumerate() {
            if !EXCLUDED_COLUMNS.iter().any(|excluded| *excluded == name) {
                keep.push(idx);
            }
        }
        let feature_names: Vec<String> = keep.iter().map(|&idx| headers[idx].to_string()).collect();

        let mut rows = Vec::new();
        for (offset, record) in csv_reader.records().enumerate() {
            let record = record?;
            let mut row = Vec::with_capacity(keep.len());
            for &idx in &keep {
                let cell = record.get(idx).unwrap_or_default();
                let value =
                    cell.trim()
                        .parse::<f64>()
                        .map_err(|_| DatasetError::InvalidValue {
                            // header occupies line 1
                            line: offset + 2,
                            column: headers[idx].to_string(),
                            value: cell.to_string(),
                        })?;
                row.push(value);
            }
            rows.push(row);
        }

        Ok(Self {
            feature_names,
            rows,
        })
    }

    pub fn n_records(&self) -> usize {
        self.rows.len()
    }

    pub fn n_features(&self) -> usize {
        self.feature_names.len()
    }
}
