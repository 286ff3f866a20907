//! Data types produced by the parsers.

/// One data row of one benchmark result file
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRecord {
    /// Benchmark name, trimmed
    pub name: String,

    /// Wall-clock time per iteration
    pub real_time: f64,

    /// CPU time per iteration
    pub cpu_time: f64,

    /// Iteration count reported by the benchmark
    pub iterations: i64,
}

/// Resolved positions of the four required columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndices {
    pub name: usize,
    pub real_time: usize,
    pub cpu_time: usize,
    pub iterations: usize,
}

impl ColumnIndices {
    /// Highest index a data row must reach
    pub fn max_index(&self) -> usize {
        self.name
            .max(self.real_time)
            .max(self.cpu_time)
            .max(self.iterations)
    }
}

/// A header line located in a file, with its parsed columns
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveredHeader {
    /// Zero-based line index of the header
    pub line_index: usize,

    /// Raw header fields, split on commas
    pub fields: Vec<String>,
}

/// One operation's timing deltas, in run order
#[derive(Debug, Clone, PartialEq)]
pub struct TimingSeries {
    pub operation: String,
    pub deltas: Vec<f64>,
}

impl TimingSeries {
    pub fn len(&self) -> usize {
        self.deltas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }

    /// Points as (1-based run index, value)
    pub fn points(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.deltas
            .iter()
            .enumerate()
            .map(|(i, &v)| (i as i32 + 1, v))
    }
}
