//! Error types for allocbench-core

use std::path::PathBuf;
use thiserror::Error;

/// Dataset ingestion error
///
/// `ResourceAbsent` and `EmptyDataset` are expected outcomes that trigger the
/// synthetic fallback; every other variant marks a malformed resource.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The resource does not exist
    #[error("benchmark data not found: {}", .0.display())]
    ResourceAbsent(PathBuf),

    /// IO error while opening or reading the resource
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Structurally broken CSV
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is not present in the header
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    /// A data row is shorter than the header
    #[error("row {row}: missing value for '{column}'")]
    MissingField {
        /// 1-based data row number
        row: usize,
        /// Column whose value is absent
        column: &'static str,
    },

    /// A numeric field could not be parsed as a finite float
    #[error("row {row}: could not convert '{value}' to a number for '{column}'")]
    InvalidNumber {
        /// 1-based data row number
        row: usize,
        /// Column being converted
        column: &'static str,
        /// Raw field text
        value: String,
    },

    /// The resource is valid but holds no data rows
    #[error("benchmark data contains no rows")]
    EmptyDataset,
}

impl DatasetError {
    /// Whether this error means the resource itself was malformed, as
    /// opposed to absent or empty.
    pub fn is_malformed(&self) -> bool {
        !matches!(
            self,
            DatasetError::ResourceAbsent(_) | DatasetError::EmptyDataset
        )
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, DatasetError>;
