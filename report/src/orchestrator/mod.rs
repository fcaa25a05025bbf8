//! Orchestrator for the report pipeline
//!
//! The Orchestrator sequences one report run:
//! - Loading benchmark results from the configured CSV
//! - Falling back to synthetic data when they cannot be used
//! - Composing the comparison figure
//! - Handing it to the renderer
//!
//! # Example
//!
//! ```no_run
//! use allocbench_core::ReportConfig;
//! use allocbench_report::{CaptureRenderer, OrchestratorBuilder};
//!
//! let mut orchestrator = OrchestratorBuilder::new()
//!     .config(ReportConfig::default())
//!     .build(CaptureRenderer::new());
//!
//! let outcome = orchestrator.run()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

mod builder;
mod executor;

pub use builder::OrchestratorBuilder;
pub use executor::{DataSource, Orchestrator, RunOutcome};

#[cfg(test)]
mod tests;
