
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScalerError {
    #[error("Cannot fit a scaler on an empty feature matrix")]
    EmptyMatrix,

    #[error("Row has {got} features but the scaler was fit with {expected}")]
    DimensionMismatch { expected: usize, got: usize },
}

/// Per-column z-score transform. Statistics are computed once at fit time
/// and reused verbatim by every later transform, including single-record
/// inference; they are never recomputed from the data being transformed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    mean: Vec<f64>,
    std: Vec<f64>,
}

impl StandardScaler {
    /// Compute the per-column mean and population standard deviation.
    pub fn fit(rows: &[Vec<f64>]) -> Result<Self, ScalerError> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(ScalerError::EmptyMatrix);
        }
        let n = rows.len() as f64;
        let n_features = rows[0].len();

        let mut mean = vec![0.0; n_features];
        for row in rows {
            for (col, value) in row.iter().enumerate() {
                mean[col] += value;
            }
        }
        for m in &mut mean {
            *m /= n;
        }

        let mut std = vec![0.0; n_features];
        for row in rows {
            for (col, value) in row.iter().enumerate() {
                let delta = value - mean[col];
                std[col] += delta * delta;
            }
        }
        for s in &mut std {
            *s = (*s / n).sqrt();
            // constant column: center it but leave the scale at 1.0
            if *s == 0.0 {
                *s = 1.0;
            }
        }

        Ok(Self { mean, std })
    }

    /// Standardize one row with the stored statistics.
    pub fn transform_row(&self, row: &[f64]) -> Result<Vec<f64>, ScalerError> {
        if row.len() != self.mean.len() {
            return Err(ScalerError::DimensionMismatch {
                expected: self.mean.len(),
                got: row.len(),
            });
        }
        Ok(row
            .iter()
            .enumerate()
            .map(|(col, value)| (value - self.mean[col]) / self.std[col])
            .collect())
    }

    /// Standardize a whole matrix with the stored statistics.
    pub fn transform(&self, rows: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, ScalerError> {
        rows.iter().map(|row| self.transform_row(row)).collect()
    }

    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    pub fn std(&self) -> &[f64] {
        &self.std
    }
}
