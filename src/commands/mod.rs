//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod average;
pub mod graph;
pub mod models;

// Re-export main command functions
pub use average::{collect_input_files, execute_average};
pub use graph::{execute_graph, plottable_series};
pub use models::{AverageArgs, AverageReport, GraphArgs};
