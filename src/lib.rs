// Public API exports
pub mod artifacts;
pub mod cli;
pub mod clusterer;
pub mod dataset;
pub mod elbow;
pub mod patient;
pub mod scaler;
pub mod summary;

// Re-export main types for convenience
pub use dataset::{ClinicalDataset, DatasetError, EXCLUDED_COLUMNS};

pub use scaler::{ScalerError, StandardScaler};

pub use clusterer::{
    kmeans, ClusterError, ClusterFit, KMeansModel, DEFAULT_MAX_ITER, DEFAULT_RESTARTS, DEFAULT_SEED,
};

pub use elbow::{render_chart, sweep, ElbowPoint};

pub use summary::{ClusterSummary, SummaryRow};

pub use patient::{order_features, PatientError, PatientRecord};

pub use artifacts::{
    sha256_file, ModelArtifact, ScalerArtifact, ELBOW_FILE, MODEL_FILE, SCALER_FILE, SUMMARY_FILE,
};
