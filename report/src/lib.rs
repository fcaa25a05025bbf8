//! allocbench-report: Chart composition and rendering
//!
//! This crate turns a benchmark [`Dataset`](allocbench_core::Dataset) into a
//! multi-panel comparison figure:
//!
//! - **Panels**: backend-agnostic descriptions of bar and text panels
//! - **Composer**: maps dataset columns onto the fixed 2x3 panel grid
//! - **Render**: the [`Renderer`] seam, with a window renderer (the default
//!   surface), an image file renderer, and a capture-only renderer for tests
//! - **Orchestrator**: load, fall back, compose, render

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod composer;
pub mod format;
pub mod orchestrator;
pub mod panel;
pub mod render;

pub use composer::ChartComposer;
pub use format::ValueFormat;
pub use orchestrator::{DataSource, Orchestrator, OrchestratorBuilder, RunOutcome};
pub use panel::{BarPanel, BarSeries, Orientation, Panel, RenderedReport, Rgb, TextPanel};
pub use render::{CaptureRenderer, DisplayRenderer, ImageRenderer, Renderer};
