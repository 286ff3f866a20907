//! Aggregation of benchmark records into averages.
//!
//! This module turns parsed records from many runs into:
//! - Per-benchmark means (grouped by exact name)
//! - One overall mean across every record
//! - The output file name for a results directory

pub mod averages;
pub mod library;

// Re-export main types and functions
pub use averages::{aggregate, AggregateStats, AggregatedEntry};
pub use library::{average_file_name, average_output_path, library_prefix};
