//! Report configuration types

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default benchmark results file
pub const DEFAULT_DATASET_PATH: &str = "benchmark_results.csv";

/// Default figure title
pub const DEFAULT_TITLE: &str = "Memory Allocators Benchmark Comparison";

/// Report configuration
///
/// Defines where benchmark data is read from and how the comparison
/// figure is produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Benchmark results CSV
    pub dataset_path: PathBuf,

    /// Image file to write (`.png` or `.svg`); unset shows the figure in a window
    pub output_path: Option<PathBuf>,

    /// Figure width in pixels
    pub width: u32,

    /// Figure height in pixels
    pub height: u32,

    /// Figure-level title shared by all panels
    pub title: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            output_path: None,
            width: 1400,
            height: 800,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl ReportConfig {
    /// Load a JSON config file; missing keys take their defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Set the dataset path
    pub fn with_dataset_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dataset_path = path.into();
        self
    }

    /// Write the figure to a file instead of showing it
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Set the figure size
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the figure title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Where the figure goes: a window, or an image file whose format
    /// follows its extension
    pub fn target(&self) -> Result<ReportTarget, ConfigError> {
        let Some(path) = &self.output_path else {
            return Ok(ReportTarget::Display);
        };

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        let format = match ext.as_deref() {
            Some("png") => OutputFormat::Png,
            Some("svg") => OutputFormat::Svg,
            _ => return Err(ConfigError::UnsupportedOutput(path.clone())),
        };

        Ok(ReportTarget::File {
            path: path.clone(),
            format,
        })
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }

        self.target()?;
        Ok(())
    }
}

/// Destination of the rendered figure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportTarget {
    /// Interactive window, closed by the user
    Display,
    /// Image file
    File {
        /// File to write
        path: PathBuf,
        /// Image format
        format: OutputFormat,
    },
}

/// Image format of the rendered figure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Bitmap
    Png,
    /// Vector
    Svg,
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Zero width or height
    #[error("Invalid figure size: {width}x{height}")]
    InvalidSize {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },

    /// Output path has no supported image extension
    #[error("Unsupported output file (expected .png or .svg): {}", .0.display())]
    UnsupportedOutput(PathBuf),

    /// Config file could not be read
    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        /// Config file path
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Config file is not valid JSON for this schema
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}
