//! CSV ingestion for benchmark results
//!
//! The loader validates the whole resource before handing anything back:
//! one bad field rejects the dataset, and the caller falls back to synthetic
//! data.

use crate::dataset::{BenchmarkRow, Dataset};
use crate::error::{DatasetError, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Header names every benchmark CSV must expose, in canonical order
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "algorithm",
    "avg_allocation_time",
    "avg_deallocation_time",
    "memory_efficiency",
    "internal_fragmentation",
    "failed_allocations",
    "total_time",
];

/// Loads a [`Dataset`] from a CSV file
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    path: PathBuf,
}

impl DatasetLoader {
    /// Create a loader for the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this loader reads from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the dataset, or `None` if it is absent, empty or malformed
    ///
    /// Failures are reported through `tracing`; a missing file is only
    /// logged at debug level.
    pub fn load(&self) -> Option<Dataset> {
        match self.try_load() {
            Ok(dataset) => {
                info!(
                    path = %self.path.display(),
                    rows = dataset.len(),
                    "Loaded benchmark data"
                );
                Some(dataset)
            }
            Err(err) if err.is_malformed() => {
                warn!("Failed to read {}: {}", self.path.display(), err);
                None
            }
            Err(DatasetError::EmptyDataset) => {
                warn!("{} contains no benchmark rows", self.path.display());
                None
            }
            Err(err) => {
                debug!("{}", err);
                None
            }
        }
    }

    /// Load the dataset, reporting why it could not be used
    pub fn try_load(&self) -> Result<Dataset> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(DatasetError::ResourceAbsent(self.path.clone()));
            }
            Err(err) => return Err(err.into()),
        };

        // `file` is dropped on every return path below
        Self::from_reader(file)
    }

    /// Parse CSV from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Dataset> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::Headers)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        if headers.is_empty() {
            return Err(DatasetError::EmptyDataset);
        }
        let schema = Schema::from_headers(&headers)?;

        let mut rows = Vec::new();
        for (idx, record) in csv_reader.records().enumerate() {
            let record = record?;
            rows.push(schema.parse_row(&record, idx + 1)?);
        }

        if rows.is_empty() {
            return Err(DatasetError::EmptyDataset);
        }

        Ok(Dataset::new(rows))
    }
}

/// Position of each required column within the header
struct Schema {
    indices: [usize; REQUIRED_COLUMNS.len()],
}

impl Schema {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let mut indices = [0usize; REQUIRED_COLUMNS.len()];
        for (slot, name) in indices.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = headers
                .iter()
                .position(|h| h == name)
                .ok_or(DatasetError::MissingColumn(name))?;
        }
        Ok(Self { indices })
    }

    fn field<'r>(&self, record: &'r StringRecord, row: usize, col: usize) -> Result<&'r str> {
        record
            .get(self.indices[col])
            .ok_or(DatasetError::MissingField {
                row,
                column: REQUIRED_COLUMNS[col],
            })
    }

    fn number(&self, record: &StringRecord, row: usize, col: usize) -> Result<f64> {
        let raw = self.field(record, row, col)?;
        match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(DatasetError::InvalidNumber {
                row,
                column: REQUIRED_COLUMNS[col],
                value: raw.to_string(),
            }),
        }
    }

    fn parse_row(&self, record: &StringRecord, row: usize) -> Result<BenchmarkRow> {
        Ok(BenchmarkRow {
            algorithm: self.field(record, row, 0)?.to_string(),
            avg_allocation_time: self.number(record, row, 1)?,
            avg_deallocation_time: self.number(record, row, 2)?,
            memory_efficiency: self.number(record, row, 3)?,
            internal_fragmentation: self.number(record, row, 4)?,
            failed_allocations: self.number(record, row, 5)?,
            total_time: self.number(record, row, 6)?,
        })
    }
}
