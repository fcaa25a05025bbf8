//! Builder pattern for Orchestrator construction

use allocbench_core::{DatasetLoader, DatasetProvider, ReportConfig, SyntheticDatasetProvider};

use super::executor::Orchestrator;
use crate::composer::ChartComposer;
use crate::render::Renderer;

/// Builder for creating an Orchestrator
///
/// # Example
///
/// ```ignore
/// let mut orchestrator = OrchestratorBuilder::new()
///     .dataset_path("results/nightly.csv")
///     .title("Nightly allocator run")
///     .build(renderer);
/// ```
pub struct OrchestratorBuilder {
    config: ReportConfig,
    provider: Box<dyn DatasetProvider>,
}

impl OrchestratorBuilder {
    /// Create a builder with default configuration and synthetic fallback
    pub fn new() -> Self {
        Self {
            config: ReportConfig::default(),
            provider: Box::new(SyntheticDatasetProvider::new()),
        }
    }

    /// Set the full report configuration
    pub fn config(mut self, config: ReportConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the benchmark results path
    pub fn dataset_path(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.config.dataset_path = path.into();
        self
    }

    /// Set the figure title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.title = title.into();
        self
    }

    /// Replace the fallback dataset provider
    pub fn provider(mut self, provider: impl DatasetProvider + 'static) -> Self {
        self.provider = Box::new(provider);
        self
    }

    /// Build the orchestrator around a renderer
    pub fn build<R: Renderer>(self, renderer: R) -> Orchestrator<R> {
        Orchestrator::new(
            DatasetLoader::new(self.config.dataset_path),
            self.provider,
            ChartComposer::new(self.config.title),
            renderer,
        )
    }
}

impl Default for OrchestratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
