//! Tests for the Orchestrator module

use super::{DataSource, OrchestratorBuilder, RunOutcome};
use crate::panel::{Panel, RenderedReport};
use crate::render::{CaptureRenderer, Renderer};

use allocbench_core::{Dataset, DatasetProvider, INSUFFICIENT_ROWS_MESSAGE};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

const HEADER: &str = "algorithm,avg_allocation_time,avg_deallocation_time,memory_efficiency,internal_fragmentation,failed_allocations,total_time";

// ============================================================================
// Test collaborators
// ============================================================================

struct EmptyProvider;

impl DatasetProvider for EmptyProvider {
    fn provide(&self) -> Dataset {
        Dataset::default()
    }
}

struct FailingRenderer;

impl Renderer for FailingRenderer {
    fn render(&mut self, _report: &RenderedReport) -> anyhow::Result<()> {
        anyhow::bail!("display unavailable")
    }
}

fn csv_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file
}

fn missing_path() -> PathBuf {
    std::env::temp_dir().join("allocbench-missing-dir/benchmark_results.csv")
}

fn first_labels(report: &RenderedReport) -> Vec<String> {
    report.panels[0].as_bar().unwrap().labels.clone()
}

// ============================================================================
// Fallback behaviour
// ============================================================================

#[test]
fn test_missing_file_falls_back_to_synthetic() {
    let mut orchestrator = OrchestratorBuilder::new()
        .dataset_path(missing_path())
        .build(CaptureRenderer::new());

    let outcome = orchestrator.run().unwrap();
    match outcome {
        RunOutcome::Rendered { source, rows, .. } => {
            assert_eq!(source, DataSource::Synthetic);
            assert_eq!(rows, 2);
        }
        RunOutcome::NoData => panic!("Expected a rendered report"),
    }

    let capture = orchestrator.into_renderer();
    assert_eq!(capture.reports().len(), 1);
    assert_eq!(
        first_labels(&capture.reports()[0]),
        vec!["McKusick-Karels", "Power-of-2 (Buddy)"]
    );
}

#[test]
fn test_malformed_file_falls_back_to_synthetic() {
    let file = csv_file(&[HEADER, "X,0.1,0.05,ninety,1000,2,0.2"]);
    let mut orchestrator = OrchestratorBuilder::new()
        .dataset_path(file.path())
        .build(CaptureRenderer::new());

    assert!(matches!(
        orchestrator.run().unwrap(),
        RunOutcome::Rendered {
            source: DataSource::Synthetic,
            ..
        }
    ));
}

#[test]
fn test_empty_file_falls_back_to_synthetic() {
    let file = csv_file(&[HEADER]);
    let mut orchestrator = OrchestratorBuilder::new()
        .dataset_path(file.path())
        .build(CaptureRenderer::new());

    assert!(matches!(
        orchestrator.run().unwrap(),
        RunOutcome::Rendered {
            source: DataSource::Synthetic,
            rows: 2,
            ..
        }
    ));
}

#[test]
fn test_no_data_skips_rendering() {
    let mut orchestrator = OrchestratorBuilder::new()
        .dataset_path(missing_path())
        .provider(EmptyProvider)
        .build(CaptureRenderer::new());

    assert_eq!(orchestrator.run().unwrap(), RunOutcome::NoData);
    assert!(orchestrator.renderer().reports().is_empty());
}

// ============================================================================
// Rendering from a file
// ============================================================================

#[test]
fn test_file_data_is_rendered_in_order() {
    let file = csv_file(&[
        HEADER,
        "X,0.1,0.05,90,1000,2,0.2",
        "Y,0.2,0.1,95,500,0,0.3",
    ]);
    let mut orchestrator = OrchestratorBuilder::new()
        .dataset_path(file.path())
        .title("Nightly")
        .build(CaptureRenderer::new());

    let outcome = orchestrator.run().unwrap();
    let RunOutcome::Rendered {
        source,
        rows,
        summary,
    } = outcome
    else {
        panic!("Expected a rendered report");
    };
    assert_eq!(source, DataSource::File(file.path().to_path_buf()));
    assert_eq!(rows, 2);
    assert!(summary.contains("- Fastest total time: X"));
    assert!(summary.contains("- Highest memory efficiency: Y"));
    assert!(summary.contains("- Lowest internal fragmentation: Y"));

    let report = orchestrator.renderer().last().unwrap().clone();
    assert_eq!(report.title, "Nightly");
    assert_eq!(first_labels(&report), vec!["X", "Y"]);
    match report.panel(1, 2) {
        Some(Panel::Text(text)) => assert_eq!(text.text, summary),
        other => panic!("Expected summary text panel, got {:?}", other),
    }
}

#[test]
fn test_single_row_renders_advisory() {
    let file = csv_file(&[HEADER, "Solo,0.1,0.05,90,1000,2,0.2"]);
    let mut orchestrator = OrchestratorBuilder::new()
        .dataset_path(file.path())
        .build(CaptureRenderer::new());

    match orchestrator.run().unwrap() {
        RunOutcome::Rendered { rows, summary, .. } => {
            assert_eq!(rows, 1);
            assert_eq!(summary, INSUFFICIENT_ROWS_MESSAGE);
        }
        RunOutcome::NoData => panic!("Expected a rendered report"),
    }
    assert_eq!(orchestrator.renderer().reports().len(), 1);
}

#[test]
fn test_renderer_failure_propagates() {
    let mut orchestrator = OrchestratorBuilder::new()
        .dataset_path(missing_path())
        .build(FailingRenderer);

    let err = orchestrator.run().unwrap_err();
    assert!(format!("{:#}", err).contains("display unavailable"));
}

#[test]
fn test_config_drives_builder() {
    let config = allocbench_core::ReportConfig::default()
        .with_dataset_path(missing_path())
        .with_title("From config");
    let mut orchestrator = OrchestratorBuilder::new()
        .config(config)
        .build(CaptureRenderer::new());

    orchestrator.run().unwrap();
    assert_eq!(orchestrator.renderer().last().unwrap().title, "From config");
}
