//! Bench Report
//!
//! Post-processing for benchmark output. This crate provides the core
//! implementation for two CLI tools:
//!
//! - `bench-average <results_directory>` averages repeated benchmark-run CSV
//!   files into `<prefix>_average.csv`
//! - `bench-graph <input_csv_file>` renders a log-scale line chart of timing
//!   deltas to a PNG beside the input
//!
//! ## Getting Started
//!
//! ```bash
//! cargo install --path .
//! bench-average results/redis-cpp
//! bench-graph results/redis-cpp/timings.csv
//! ```

pub mod aggregator;
pub mod chart;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
