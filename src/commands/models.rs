use crate::chart::ChartConfig;
use std::path::PathBuf;

/// Arguments for the average command
///
/// **Public** - used by the `bench-average` binary to construct from CLI args
#[derive(Debug, Clone)]
pub struct AverageArgs {
    /// Directory holding the benchmark result CSVs of one library
    pub results_dir: PathBuf,
}

/// Arguments for the graph command
///
/// **Public** - used by the `bench-graph` binary to construct from CLI args
#[derive(Debug, Clone)]
pub struct GraphArgs {
    /// Timing CSV to plot; the PNG is written beside it
    pub input: PathBuf,

    /// Title, labels and image size
    pub chart_config: ChartConfig,
}

/// Result of a successful average run
#[derive(Debug, Clone, PartialEq)]
pub struct AverageReport {
    /// Where the averages were written
    pub output: PathBuf,

    /// Input files considered, in processing order
    pub input_files: Vec<PathBuf>,

    /// Rows written, including `OVERALL_AVERAGE`
    pub entry_count: usize,

    /// Records accepted across all files
    pub record_count: usize,
}
