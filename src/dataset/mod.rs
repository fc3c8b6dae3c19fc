mod error;
mod loader;


pub use error::DatasetError;
pub use loader::ClinicalDataset;

/// Columns dropped from the feature matrix: the binary outcome label and
/// the follow-up time in days. Every other column is a feature.
pub const EXCLUDED_COLUMNS: [&str; 2] = ["DEATH_EVENT", "time"];
