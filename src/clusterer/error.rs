use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClusterError {
    #[error("n_clusters must be > 0")]
    ZeroClusters,

    #[error("n_samples={n_samples} should be >= n_clusters={n_clusters}")]
    TooFewSamples {
        n_samples: usize,
        n_clusters: usize,
    },

    #[error("Input matrix must have at least one sample and one feature")]
    EmptyMatrix,

    #[error("Point has {got} features but the model was fit with {expected}")]
    DimensionMismatch { expected: usize, got: usize },
}
