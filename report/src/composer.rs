//! Maps a dataset onto the comparison grid

use crate::format::ValueFormat;
use crate::panel::{BarPanel, BarSeries, Orientation, Panel, RenderedReport, Rgb, TextPanel};
use allocbench_core::{Dataset, Metric, SummaryAnalyzer, DEFAULT_TITLE};

const GRID_ROWS: usize = 2;
const GRID_COLS: usize = 3;
const TITLE_BAND: f64 = 0.05;

/// Side-by-side bar width on the timing panel
const TIMING_BAR_WIDTH: f64 = 0.3;

/// Builds the 2x3 comparison figure
///
/// Row one holds timing, efficiency and fragmentation; row two holds
/// failures, total time and the text summary.
#[derive(Debug, Clone)]
pub struct ChartComposer {
    title: String,
}

impl Default for ChartComposer {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}

impl ChartComposer {
    /// Create a composer with the given figure title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Compose the report for a dataset
    pub fn compose(&self, dataset: &Dataset) -> RenderedReport {
        let labels = dataset.labels();

        let panels = vec![
            Panel::Bar(timing_panel(dataset, labels.clone())),
            Panel::Bar(BarPanel::single(
                labels.clone(),
                dataset.column(Metric::MemoryEfficiency),
                "Memory Efficiency (%)",
                "Percent",
                Rgb::GREEN,
                ValueFormat::Decimals(1),
            )),
            Panel::Bar(BarPanel::single(
                labels.clone(),
                dataset.column(Metric::InternalFragmentation),
                "Internal Fragmentation (bytes)",
                "Bytes",
                Rgb::RED,
                ValueFormat::Thousands,
            )),
            Panel::Bar(BarPanel::single(
                labels.clone(),
                dataset.column(Metric::FailedAllocations),
                "Failed Allocations",
                "Count",
                Rgb::PURPLE,
                ValueFormat::Decimals(0),
            )),
            Panel::Bar(BarPanel::single(
                labels,
                dataset.column(Metric::TotalTime),
                "Total Benchmark Time (s)",
                "Seconds",
                Rgb::YELLOW,
                ValueFormat::Decimals(3),
            )),
            Panel::Text(TextPanel {
                text: SummaryAnalyzer::summarize(dataset),
                monospace: true,
            }),
        ];

        RenderedReport {
            title: self.title.clone(),
            rows: GRID_ROWS,
            cols: GRID_COLS,
            panels,
            title_band: TITLE_BAND,
        }
    }
}

/// Allocation and deallocation times grouped per algorithm
fn timing_panel(dataset: &Dataset, labels: Vec<String>) -> BarPanel {
    let half = TIMING_BAR_WIDTH / 2.0;
    BarPanel {
        title: "Average Times".to_string(),
        axis_label: "Seconds".to_string(),
        labels,
        series: vec![
            BarSeries {
                name: "Alloc".to_string(),
                values: dataset.column(Metric::AllocationTime),
                color: Rgb::BLUE,
                offset: -half,
            },
            BarSeries {
                name: "Dealloc".to_string(),
                values: dataset.column(Metric::DeallocationTime),
                color: Rgb::ORANGE,
                offset: half,
            },
        ],
        bar_width: TIMING_BAR_WIDTH,
        orientation: Orientation::Vertical,
        value_format: None,
        legend: true,
    }
}
