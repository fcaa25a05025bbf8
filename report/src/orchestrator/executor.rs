//! Orchestrator execution

use allocbench_core::{Dataset, DatasetLoader, DatasetProvider};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{error, info};

use crate::composer::ChartComposer;
use crate::render::Renderer;

/// Where the rendered dataset came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Benchmark results file
    File(PathBuf),
    /// Fallback provider
    Synthetic,
}

/// Result of one orchestrator run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// A report was composed and rendered
    Rendered {
        /// Origin of the data
        source: DataSource,
        /// Number of algorithms compared
        rows: usize,
        /// Summary text shown in the report
        summary: String,
    },
    /// Neither the file nor the fallback produced any rows; nothing rendered
    NoData,
}

/// Runs load, fallback, compose and render once
pub struct Orchestrator<R: Renderer> {
    loader: DatasetLoader,
    provider: Box<dyn DatasetProvider>,
    composer: ChartComposer,
    renderer: R,
}

impl<R: Renderer> Orchestrator<R> {
    pub(crate) fn new(
        loader: DatasetLoader,
        provider: Box<dyn DatasetProvider>,
        composer: ChartComposer,
        renderer: R,
    ) -> Self {
        Self {
            loader,
            provider,
            composer,
            renderer,
        }
    }

    /// Run the pipeline
    ///
    /// Ingestion problems never surface as errors; only a renderer failure
    /// does.
    pub fn run(&mut self) -> Result<RunOutcome> {
        let (dataset, source) = self.resolve_dataset();

        if dataset.is_empty() {
            error!("No benchmark data available.");
            return Ok(RunOutcome::NoData);
        }

        let report = self.composer.compose(&dataset);
        info!(
            rows = dataset.len(),
            panels = report.panels.len(),
            "Rendering benchmark comparison"
        );
        self.renderer
            .render(&report)
            .context("Failed to render benchmark comparison")?;

        Ok(RunOutcome::Rendered {
            source,
            rows: dataset.len(),
            summary: report.summary_text().unwrap_or_default().to_string(),
        })
    }

    fn resolve_dataset(&self) -> (Dataset, DataSource) {
        match self.loader.load() {
            Some(dataset) => (dataset, DataSource::File(self.loader.path().to_path_buf())),
            None => (self.provider.provide(), DataSource::Synthetic),
        }
    }

    /// The renderer
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Consume the orchestrator, returning its renderer
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
