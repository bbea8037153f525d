use std::path::Path;

use serde::de::DeserializeOwned;

use crate::modules::dataset::DatasetError;

/// Read and deserialize a JSON document from `path`.
pub async fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, DatasetError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| {
        tracing::error!("Dataset file not readable: {}", path.display());
        DatasetError::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;

    serde_json::from_slice(&bytes).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
