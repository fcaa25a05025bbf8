//! allocbench-core: Data model and analysis for allocator benchmark reports
//!
//! This crate provides the foundational types shared by the report pipeline,
//! including:
//!
//! - The benchmark row / dataset model
//! - CSV ingestion with all-or-nothing validation
//! - The synthetic fallback dataset
//! - Summary statistics (fastest, most efficient, least fragmented)
//! - Report configuration and error handling

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod dataset;
pub mod error;
pub mod loader;
pub mod summary;
pub mod synthetic;

pub use config::{
    ConfigError, OutputFormat, ReportConfig, ReportTarget, DEFAULT_DATASET_PATH, DEFAULT_TITLE,
};
pub use dataset::{BenchmarkRow, Dataset, Metric};
pub use error::{DatasetError, Result};
pub use loader::{DatasetLoader, REQUIRED_COLUMNS};
pub use summary::{Summary, SummaryAnalyzer, INSUFFICIENT_ROWS_MESSAGE};
pub use synthetic::{DatasetProvider, SyntheticDatasetProvider};
