use std::path::PathBuf;

use async_trait::async_trait;

use crate::features::ubigeo::index::DatasetIndex;
use crate::features::ubigeo::models::Dataset;
use crate::modules::dataset::{read_json_file, DatasetError};

/// Source of the raw hierarchy
#[async_trait]
pub trait DatasetLoader: Send + Sync {
    async fn load(&self) -> Result<Dataset, DatasetError>;

    /// Human-readable description of where the data comes from
    fn source(&self) -> String;
}

/// Loads the dataset from a JSON file (`{"estados": [...]}`)
pub struct JsonFileDatasetLoader {
    path: PathBuf,
}

impl JsonFileDatasetLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DatasetLoader for JsonFileDatasetLoader {
    async fn load(&self) -> Result<Dataset, DatasetError> {
        read_json_file(&self.path).await
    }

    fn source(&self) -> String {
        self.path.display().to_string()
    }
}

/// Load the dataset and build its index.
///
/// With `strict` any failure is returned to the caller. Otherwise the failure
/// is logged and an empty index is served.
pub async fn bootstrap_index(
    loader: &dyn DatasetLoader,
    strict: bool,
) -> Result<DatasetIndex, DatasetError> {
    match loader.load().await.and_then(DatasetIndex::build) {
        Ok(index) => {
            tracing::info!("Dataset loaded from {}", loader.source());
            Ok(index)
        }
        Err(e) if strict => Err(e),
        Err(e) => {
            tracing::error!(
                "Dataset unavailable ({}), serving empty results: {}",
                loader.source(),
                e
            );
            Ok(DatasetIndex::unavailable())
        }
    }
}
