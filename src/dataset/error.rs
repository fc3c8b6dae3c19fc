use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Dataset file not found: {0}. Place the clinical records CSV at that path and rerun.")]
    MissingFile(String),

    #[error("Required column missing from header: {0}")]
    MissingColumn(String),

    #[error("Non-numeric value {value:?} in column '{column}' at line {line}")]
    InvalidValue {
        line: usize,
        column: String,
        value: String,
    },

    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}
