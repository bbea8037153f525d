use std::path::PathBuf;

use thiserror::Error;

/// Reasons the dataset cannot be served
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read dataset file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse dataset file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid dataset: {0}")]
    Invalid(String),
}
