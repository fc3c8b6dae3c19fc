#[cfg(test)]
mod tests;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::clusterer::KMeansModel;
use crate::scaler::StandardScaler;

/// Artifact and table file names, kept stable across runs so a classify
/// invocation always finds what train wrote.
pub const SCALER_FILE: &str = "scaler_heart_failure.json";
pub const MODEL_FILE: &str = "kmeans_model_heart_failure.json";
pub const SUMMARY_FILE: &str = "cluster_centroids.csv";
pub const ELBOW_FILE: &str = "elbow_wcss.csv";

pub const ARTIFACT_VERSION: &str = "1.0.0";

/// Persisted scaler state plus what is needed to reuse it safely: the
/// ordered feature columns and the hash of the dataset it was fit on.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScalerArtifact {
    pub version: String,
    pub created_at: String,
    pub generator: String,
    pub dataset_sha256: String,
    pub feature_columns: Vec<String>,
    pub scaler: StandardScaler,
}

impl ScalerArtifact {
    pub fn new(
        scaler: StandardScaler,
        feature_columns: Vec<String>,
        dataset_sha256: String,
    ) -> Self {
        Self {
            version: ARTIFACT_VERSION.to_string(),
            created_at: Utc::now().to_rfc3339(),
            generator: generator_string(),
            dataset_sha256,
            feature_columns,
            scaler,
        }
    }

    pub fn save(&self, dir: &Path) -> Result<PathBuf> {
        write_json(self, &dir.join(SCALER_FILE), "scaler")
    }

    pub fn load(dir: &Path) -> Result<Self> {
        read_json(&dir.join(SCALER_FILE), "scaler")
    }
}

/// Persisted clusterer state: K centroids in standardized feature space.
/// Loading deserializes the state unchanged; nothing is ever refit here.
#[derive(Debug, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub version: String,
    pub created_at: String,
    pub generator: String,
    pub dataset_sha256: String,
    pub model: KMeansModel,
}

impl ModelArtifact {
    pub fn new(model: KMeansModel, dataset_sha256: String) -> Self {
        Self {
            version: ARTIFACT_VERSION.to_string(),
            created_at: Utc::now().to_rfc3339(),
            generator: generator_string(),
            dataset_sha256,
            model,
        }
    }

    pub fn save(&self, dir: &Path) -> Result<PathBuf> {
        write_json(self, &dir.join(MODEL_FILE), "clusterer")
    }

    pub fn load(dir: &Path) -> Result<Self> {
        read_json(&dir.join(MODEL_FILE), "clusterer")
    }
}

/// SHA-256 of the raw dataset bytes, recorded in both artifacts so a
/// classify run can be traced to the exact training data.
pub fn sha256_file(path: &Path) -> Result<String> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read {} for hashing", path.display()))?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(hex::encode(hasher.finalize()))
}

fn generator_string() -> String {
    format!("cardioseg v{}", env!("CARGO_PKG_VERSION"))
}

fn write_json<T: Serialize>(value: &T, path: &Path, what: &str) -> Result<PathBuf> {
    eprintln!("[artifacts] writing {} state to {}", what, path.display());
    let json = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize {} artifact", what))?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write {} artifact to {}", what, path.display()))?;
    Ok(path.to_path_buf())
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path, what: &str) -> Result<T> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {} artifact at {}", what, path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse {} artifact at {}", what, path.display()))
}
