//! Benchmark rows and datasets

/// Results for a single allocator under comparison
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRow {
    /// Allocator name, used as the display label
    pub algorithm: String,
    /// Average allocation time in seconds
    pub avg_allocation_time: f64,
    /// Average deallocation time in seconds
    pub avg_deallocation_time: f64,
    /// Percentage of requested memory actually delivered
    pub memory_efficiency: f64,
    /// Bytes wasted inside allocated blocks
    pub internal_fragmentation: f64,
    /// Number of allocations that failed
    pub failed_allocations: f64,
    /// Total benchmark time in seconds
    pub total_time: f64,
}

impl BenchmarkRow {
    /// Read one numeric column from this row
    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::AllocationTime => self.avg_allocation_time,
            Metric::DeallocationTime => self.avg_deallocation_time,
            Metric::MemoryEfficiency => self.memory_efficiency,
            Metric::InternalFragmentation => self.internal_fragmentation,
            Metric::FailedAllocations => self.failed_allocations,
            Metric::TotalTime => self.total_time,
        }
    }
}

/// The six numeric columns of a benchmark row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// `avg_allocation_time`
    AllocationTime,
    /// `avg_deallocation_time`
    DeallocationTime,
    /// `memory_efficiency`
    MemoryEfficiency,
    /// `internal_fragmentation`
    InternalFragmentation,
    /// `failed_allocations`
    FailedAllocations,
    /// `total_time`
    TotalTime,
}

impl Metric {
    /// All metrics in CSV column order
    pub const ALL: [Metric; 6] = [
        Metric::AllocationTime,
        Metric::DeallocationTime,
        Metric::MemoryEfficiency,
        Metric::InternalFragmentation,
        Metric::FailedAllocations,
        Metric::TotalTime,
    ];

    /// CSV header name of this column
    pub fn column(&self) -> &'static str {
        match self {
            Metric::AllocationTime => "avg_allocation_time",
            Metric::DeallocationTime => "avg_deallocation_time",
            Metric::MemoryEfficiency => "memory_efficiency",
            Metric::InternalFragmentation => "internal_fragmentation",
            Metric::FailedAllocations => "failed_allocations",
            Metric::TotalTime => "total_time",
        }
    }
}

/// Ordered, immutable collection of benchmark rows
///
/// Row order is ingestion order and carries through to chart ordering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    rows: Vec<BenchmarkRow>,
}

impl Dataset {
    /// Create a dataset from rows in their display order
    pub fn new(rows: Vec<BenchmarkRow>) -> Self {
        Self { rows }
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the dataset has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows as a slice
    pub fn rows(&self) -> &[BenchmarkRow] {
        &self.rows
    }

    /// Algorithm names in dataset order
    pub fn labels(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.algorithm.clone()).collect()
    }

    /// Values of one metric in dataset order
    pub fn column(&self, metric: Metric) -> Vec<f64> {
        self.rows.iter().map(|r| r.metric(metric)).collect()
    }
}
