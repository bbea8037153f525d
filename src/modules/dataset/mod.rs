//! Dataset module for the static, read-only data source
//!
//! Reads JSON documents from disk and reports why a source is unavailable.

mod error;
mod json_file;

pub use error::DatasetError;
pub use json_file::read_json_file;
