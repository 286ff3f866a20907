//! CSV parsing for both tools.
//!
//! This module handles:
//! - Locating the header row among preamble lines
//! - Resolving the required benchmark columns
//! - Best-effort row parsing of benchmark results
//! - Reading timing series for the chart renderer

pub mod benchmark_csv;
pub mod header;
pub mod schema;
pub mod timing_csv;

// Re-export main types
pub use benchmark_csv::{parse_benchmark_file, parse_benchmark_str, parse_row};
pub use header::{discover_header, resolve_columns};
pub use schema::{BenchmarkRecord, ColumnIndices, DiscoveredHeader, TimingSeries};
pub use timing_csv::{max_runs, parse_timing_file, parse_timing_reader};
