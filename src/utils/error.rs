//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in the binaries and commands.
//!
//! Severity follows the pipeline: `RowError` drops one row, `HeaderError`
//! drops one file, and `AggregateError` / `ChartError` abort the run.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that make a single file contribute no records
#[derive(Error, Debug)]
pub enum HeaderError {
    #[error("Empty file")]
    Empty,

    #[error("Could not find CSV header")]
    NotFound,

    #[error(
        "Missing required columns. Found indices - Name: {name:?}, Real Time: {real_time:?}, \
         CPU Time: {cpu_time:?}, Iterations: {iterations:?}"
    )]
    MissingColumns {
        name: Option<usize>,
        real_time: Option<usize>,
        cpu_time: Option<usize>,
        iterations: Option<usize>,
    },

    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that drop a single data row
#[derive(Error, Debug, PartialEq)]
pub enum RowError {
    #[error("Incomplete row: {len} fields, need more than {required}")]
    Incomplete { len: usize, required: usize },

    #[error("Invalid number in {field}: {value:?}")]
    InvalidFloat { field: &'static str, value: String },

    #[error("Invalid integer in {field}: {value:?}")]
    InvalidInteger { field: &'static str, value: String },
}

/// Fatal errors of the aggregator
#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("Directory {} does not exist or is not a directory.", .0.display())]
    NotADirectory(PathBuf),

    #[error("No benchmark result CSV files found in {}.", .0.display())]
    NoInputFiles(PathBuf),

    #[error("No valid data extracted from CSV files in {}.", .0.display())]
    NoRecords(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Fatal errors of the chart renderer
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Input file {} does not exist.", .0.display())]
    InputNotFound(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("No data to plot from the input file.")]
    NoPlottableRows,

    #[error("Failed to render chart: {0}")]
    Render(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
