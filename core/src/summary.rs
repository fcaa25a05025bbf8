//! Comparative summary across allocators

use crate::dataset::{BenchmarkRow, Dataset, Metric};

/// Message shown when there is nothing to compare
pub const INSUFFICIENT_ROWS_MESSAGE: &str = "Provide at least two algorithms to compare.";

const SUMMARY_TIP: &str =
    "Tip: Export C benchmark metrics to benchmark_results.csv to use real data.";

/// The three superlatives picked out of a dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Algorithm with the lowest total time
    pub fastest: String,
    /// Algorithm with the highest memory efficiency
    pub most_efficient: String,
    /// Algorithm with the lowest internal fragmentation
    pub least_fragmented: String,
}

impl Summary {
    /// Render the fixed-format text block
    pub fn render(&self) -> String {
        [
            "Summary:".to_string(),
            format!("- Fastest total time: {}", self.fastest),
            format!("- Highest memory efficiency: {}", self.most_efficient),
            format!("- Lowest internal fragmentation: {}", self.least_fragmented),
            String::new(),
            SUMMARY_TIP.to_string(),
        ]
        .join("\n")
    }
}

/// Derives comparative statistics from a dataset
pub struct SummaryAnalyzer;

impl SummaryAnalyzer {
    /// Pick the superlatives, or `None` with fewer than two rows
    ///
    /// Ties go to the row that appears first in the dataset.
    pub fn analyze(dataset: &Dataset) -> Option<Summary> {
        if dataset.len() < 2 {
            return None;
        }

        let rows = dataset.rows();
        Some(Summary {
            fastest: select(rows, Metric::TotalTime, Extreme::Min)?,
            most_efficient: select(rows, Metric::MemoryEfficiency, Extreme::Max)?,
            least_fragmented: select(rows, Metric::InternalFragmentation, Extreme::Min)?,
        })
    }

    /// Summary text for the report panel
    pub fn summarize(dataset: &Dataset) -> String {
        match Self::analyze(dataset) {
            Some(summary) => summary.render(),
            None => INSUFFICIENT_ROWS_MESSAGE.to_string(),
        }
    }
}

#[derive(Clone, Copy)]
enum Extreme {
    Min,
    Max,
}

/// Linear scan; only a strictly better value replaces the current pick.
fn select(rows: &[BenchmarkRow], metric: Metric, extreme: Extreme) -> Option<String> {
    let mut best: Option<&BenchmarkRow> = None;
    for row in rows {
        let replace = match best {
            None => true,
            Some(current) => {
                let (candidate, current) = (row.metric(metric), current.metric(metric));
                match extreme {
                    Extreme::Min => candidate < current,
                    Extreme::Max => candidate > current,
                }
            }
        };
        if replace {
            best = Some(row);
        }
    }
    best.map(|r| r.algorithm.clone())
}
