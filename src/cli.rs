use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::clusterer::{DEFAULT_RESTARTS, DEFAULT_SEED};

#[derive(Parser)]
#[command(
    name = "cardioseg",
    version,
    about = "Heart-failure patient risk segmentation with K-Means"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fit the scaler and clusterer, sweep K, and persist the artifacts
    Train(TrainArgs),
    /// Classify one patient record against the persisted artifacts
    Classify(ClassifyArgs),
}

#[derive(Args)]
pub struct TrainArgs {
    /// Path to the heart-failure clinical records CSV
    #[arg(long, default_value = "heart_failure_clinical_records_dataset.csv")]
    pub data: PathBuf,

    /// Final cluster count, chosen after inspecting the elbow chart
    #[arg(long, default_value_t = 3)]
    pub clusters: usize,

    /// Upper bound of the elbow sweep (inclusive, starting at K=1)
    #[arg(long, default_value_t = 10)]
    pub sweep_max: usize,

    /// Seed for k-means++ initialization
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Restarts per fit; the best-inertia run is kept
    #[arg(long, default_value_t = DEFAULT_RESTARTS)]
    pub restarts: usize,

    /// Directory receiving the persisted artifacts and tables
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,
}

#[derive(Args)]
pub struct ClassifyArgs {
    /// Patient record as a JSON object of feature name to value;
    /// the built-in example record is used when omitted
    #[arg(long)]
    pub patient: Option<PathBuf>,

    /// Directory holding the persisted artifacts
    #[arg(long, default_value = ".")]
    pub artifacts_dir: PathBuf,
}
