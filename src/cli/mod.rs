//! CLI argument parsing and report dispatch

use allocbench_core::{ReportConfig, ReportTarget};
use allocbench_report::{
    DisplayRenderer, ImageRenderer, OrchestratorBuilder, Renderer, RunOutcome,
};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

/// allocbench - Compare memory allocator benchmark results
///
/// With no arguments, reads benchmark_results.csv (or falls back to sample
/// data) and shows the comparison in a window. Pass --output to write an
/// image file instead.
#[derive(Parser, Debug)]
#[command(name = "allocbench")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Benchmark results CSV
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Write the figure to an image (.png or .svg) instead of a window
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Figure width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Figure height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Figure title
    #[arg(long)]
    pub title: Option<String>,

    /// Also print the summary to stdout
    #[arg(long)]
    pub summary: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Generate the report based on CLI arguments
    pub fn run(&self) -> Result<()> {
        let config = self.resolve_config()?;
        config.validate().context("Invalid report configuration")?;
        tracing::debug!(?config, "Resolved report configuration");

        let size = (config.width, config.height);
        match config.target()? {
            ReportTarget::Display => {
                self.render(config, DisplayRenderer::new(size))?;
            }
            ReportTarget::File { path, format } => {
                if self.render(config, ImageRenderer::new(&path, size, format))? {
                    println!("✓ Benchmark comparison written to: {}", path.display());
                }
            }
        }

        Ok(())
    }

    /// Run the pipeline against one renderer; false when there was no data
    fn render<R: Renderer>(&self, config: ReportConfig, renderer: R) -> Result<bool> {
        let mut orchestrator = OrchestratorBuilder::new().config(config).build(renderer);

        match orchestrator.run()? {
            RunOutcome::Rendered { summary, .. } => {
                if self.summary {
                    println!("{}", summary);
                }
                Ok(true)
            }
            RunOutcome::NoData => Ok(false),
        }
    }

    /// Config file (or defaults), then command-line overrides
    fn resolve_config(&self) -> Result<ReportConfig> {
        let mut config = match &self.config {
            Some(path) => ReportConfig::from_file(path)
                .with_context(|| format!("Failed to load config from: {}", path.display()))?,
            None => ReportConfig::default(),
        };

        if let Some(input) = &self.input {
            config = config.with_dataset_path(input);
        }
        if let Some(output) = &self.output {
            config = config.with_output_path(output);
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(title) = &self.title {
            config = config.with_title(title.as_str());
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_no_arguments_uses_defaults() {
        let cli = Cli::try_parse_from(["allocbench"]).unwrap();
        let config = cli.resolve_config().unwrap();
        assert_eq!(config, ReportConfig::default());
        assert!(!cli.summary);
    }

    #[test]
    fn test_no_arguments_shows_window() {
        let cli = Cli::try_parse_from(["allocbench"]).unwrap();
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.target().unwrap(), ReportTarget::Display);
    }

    #[test]
    fn test_output_flag_writes_file() {
        let cli = Cli::try_parse_from(["allocbench", "-o", "cmp.png"]).unwrap();
        let config = cli.resolve_config().unwrap();
        assert_eq!(
            config.target().unwrap(),
            ReportTarget::File {
                path: PathBuf::from("cmp.png"),
                format: allocbench_core::OutputFormat::Png,
            }
        );
    }

    #[test]
    fn test_run_writes_svg_without_window() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("cmp.svg");
        let cli = Cli::try_parse_from([
            "allocbench",
            "--input",
            dir.path().join("absent.csv").to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ])
        .unwrap();

        cli.run().unwrap();
        assert!(std::fs::read_to_string(&output).unwrap().contains("<svg"));
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"dataset_path": "from_file.csv", "title": "File title", "height": 900}}"#
        )
        .unwrap();
        let config_path = file.path().to_str().unwrap().to_string();

        let cli = Cli::try_parse_from([
            "allocbench",
            "--config",
            &config_path,
            "--input",
            "from_flag.csv",
            "--output",
            "report.svg",
            "--width",
            "1000",
        ])
        .unwrap();
        let config = cli.resolve_config().unwrap();

        assert_eq!(config.dataset_path, PathBuf::from("from_flag.csv"));
        assert_eq!(config.output_path, Some(PathBuf::from("report.svg")));
        assert_eq!(config.title, "File title");
        assert_eq!((config.width, config.height), (1000, 900));
    }

    #[test]
    fn test_missing_config_file_is_error() {
        let cli = Cli::try_parse_from(["allocbench", "-c", "/nonexistent/allocbench.json"]).unwrap();
        assert!(cli.resolve_config().is_err());
    }

    #[test]
    fn test_invalid_output_is_rejected_before_loading() {
        let cli = Cli::try_parse_from(["allocbench", "--output", "report.bmp"]).unwrap();
        assert!(cli.run().is_err());
    }
}
