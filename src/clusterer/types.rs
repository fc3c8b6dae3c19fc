use serde::{Deserialize, Serialize};

use crate::clusterer::distance::euclidean_distance;
use crate::clusterer::ClusterError;

/// Fitted K-Means state: K centroid vectors in standardized feature space
/// plus the final within-cluster sum of squared distances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KMeansModel {
    pub k: usize,
    pub centroids: Vec<Vec<f64>>,
    pub inertia: f64,
}

impl KMeansModel {
    /// Index of the nearest centroid under Euclidean distance.
    pub fn predict(&self, point: &[f64]) -> Result<usize, ClusterError> {
        let expected = self.centroids.first().map(|c| c.len()).unwrap_or(0);
        if point.len() != expected {
            return Err(ClusterError::DimensionMismatch {
                expected,
                got: point.len(),
            });
        }

        let mut best = 0;
        let mut best_dist = f64::INFINITY;
        for (idx, centroid) in self.centroids.iter().enumerate() {
            let dist = euclidean_distance(point, centroid);
            if dist < best_dist {
                best_dist = dist;
                best = idx;
            }
        }
        Ok(best)
    }

    /// One label per row.
    pub fn predict_all(&self, points: &[Vec<f64>]) -> Result<Vec<usize>, ClusterError> {
        points.iter().map(|point| self.predict(point)).collect()
    }

    pub fn n_features(&self) -> usize {
        self.centroids.first().map(|c| c.len()).unwrap_or(0)
    }
}

/// Result of one training run: the model, the training labels, and the
/// Lloyd iteration count of the winning restart.
#[derive(Debug, Clone)]
pub struct ClusterFit {
    pub model: KMeansModel,
    pub labels: Vec<usize>,
    pub iterations: usize,
}
