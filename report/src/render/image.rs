//! Image file output via plotters

use super::chart::draw_report;
use super::Renderer;
use crate::panel::RenderedReport;
use allocbench_core::OutputFormat;
use anyhow::{Context, Result};
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use tracing::info;

/// Draws reports into a PNG or SVG file
#[derive(Debug, Clone)]
pub struct ImageRenderer {
    path: PathBuf,
    size: (u32, u32),
    format: OutputFormat,
}

impl ImageRenderer {
    /// Create a renderer writing to `path`
    pub fn new(path: impl Into<PathBuf>, size: (u32, u32), format: OutputFormat) -> Self {
        Self {
            path: path.into(),
            size,
            format,
        }
    }

    /// File the figure is written to
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Renderer for ImageRenderer {
    fn render(&mut self, report: &RenderedReport) -> Result<()> {
        let drawn = match self.format {
            OutputFormat::Png => {
                draw_report(BitMapBackend::new(&self.path, self.size).into_drawing_area(), report)
            }
            OutputFormat::Svg => {
                draw_report(SVGBackend::new(&self.path, self.size).into_drawing_area(), report)
            }
        };
        drawn.with_context(|| format!("Failed to draw report to {}", self.path.display()))?;

        info!(path = %self.path.display(), "Benchmark comparison written");
        Ok(())
    }
}
