//! Configuration and constants for both tools.

/// Header row of the averages file
pub const OUTPUT_HEADER: [&str; 5] = ["name", "real_time", "cpu_time", "iterations", "run_count"];

/// Name of the synthetic entry summarizing every record
pub const OVERALL_AVERAGE_NAME: &str = "OVERALL_AVERAGE";

/// Appended to the library prefix to form the output file name
pub const AVERAGE_FILE_SUFFIX: &str = "_average.csv";

/// Files whose name contains this (case-insensitive) are never read as input
pub const AVERAGE_MARKER: &str = "average";

/// Extension of benchmark result files
pub const INPUT_EXTENSION: &str = "csv";

// A header needs more than this many fields to qualify
pub const MIN_HEADER_FIELDS: usize = 3;

// Header discovery requires one field containing each of these
pub const HEADER_NAME_MARKER: &str = "name";
pub const HEADER_REAL_MARKER: &str = "real";

// Column patterns, tried in order; a column matches if it contains any pattern
pub const NAME_PATTERNS: &[&str] = &["name"];
pub const REAL_TIME_PATTERNS: &[&str] = &["real_time", "real"];
pub const CPU_TIME_PATTERNS: &[&str] = &["cpu_time", "cpu"];
pub const ITERATIONS_PATTERNS: &[&str] = &["iterations", "iter"];

/// Directory markers mapped to output prefixes, checked in order
pub const LIBRARY_PREFIXES: &[(&str, &str)] = &[
    ("redis-plus-plus", "redis_plus_plus"),
    ("redis-cpp", "redis_cpp"),
];

/// Prefix used when no library marker matches
pub const UNKNOWN_LIBRARY: &str = "unknown_library";

// Chart defaults: 14x7 inches at 300 dpi
pub const DEFAULT_CHART_TITLE: &str = "Benchmark Timing Results for Redis Operations";
pub const DEFAULT_X_LABEL: &str = "Run Number";
pub const DEFAULT_Y_LABEL: &str = "Time (ns)";
pub const DEFAULT_CHART_WIDTH: u32 = 4200;
pub const DEFAULT_CHART_HEIGHT: u32 = 2100;
pub const MIN_CHART_DIMENSION: u32 = 200;
pub const MAX_CHART_DIMENSION: u32 = 10_000;

/// Extension of the rendered chart
pub const IMAGE_EXTENSION: &str = "png";

// X-axis tick density: above these run counts, show roughly N ticks
pub const DENSE_RUN_THRESHOLD: usize = 100;
pub const DENSE_TICK_COUNT: usize = 20;
pub const MEDIUM_RUN_THRESHOLD: usize = 20;
pub const MEDIUM_TICK_COUNT: usize = 10;
