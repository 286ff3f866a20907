//! Graph command implementation.
//!
//! The graph command:
//! 1. Validates the input file and chart size
//! 2. Reads the timing series (first row skipped)
//! 3. Drops rows without data points
//! 4. Renders the PNG beside the input

use super::models::GraphArgs;
use crate::chart::{render_chart, ChartSummary};
use crate::output::{output_image_path, prepare_image_path};
use crate::parser::{parse_timing_file, TimingSeries};
use crate::utils::config::{MAX_CHART_DIMENSION, MIN_CHART_DIMENSION};
use crate::utils::error::ChartError;
use anyhow::{Context, Result};
use log::{info, warn};

/// Execute the graph command
///
/// **Public** - main entry point called from the `bench-graph` binary
///
/// # Errors
/// * `ChartError::InputNotFound` - input file does not exist
/// * `ChartError::Read` - input cannot be read as CSV
/// * `ChartError::NoPlottableRows` - every row is empty after dropping blanks
/// * Rendering and output path failures
pub fn execute_graph(args: GraphArgs) -> Result<ChartSummary> {
    validate_args(&args)?;

    info!("Reading timing data from {}", args.input.display());
    let series = parse_timing_file(&args.input)?;

    let plottable = plottable_series(series);
    if plottable.is_empty() {
        return Err(ChartError::NoPlottableRows.into());
    }

    let output = output_image_path(&args.input);
    prepare_image_path(&output)
        .with_context(|| format!("Invalid chart output path {}", output.display()))?;

    let summary = render_chart(&plottable, &args.chart_config, &output)?;

    info!("Graph saved to {}", summary.output.display());

    Ok(summary)
}

/// Validate graph arguments
///
/// **Public** - can be called before execute_graph for early validation
pub fn validate_args(args: &GraphArgs) -> Result<()> {
    if !args.input.exists() {
        return Err(ChartError::InputNotFound(args.input.clone()).into());
    }

    let size_range = MIN_CHART_DIMENSION..=MAX_CHART_DIMENSION;
    let config = &args.chart_config;

    if !size_range.contains(&config.width) {
        anyhow::bail!(
            "Chart width must be between {} and {} pixels",
            MIN_CHART_DIMENSION,
            MAX_CHART_DIMENSION
        );
    }

    if !size_range.contains(&config.height) {
        anyhow::bail!(
            "Chart height must be between {} and {} pixels",
            MIN_CHART_DIMENSION,
            MAX_CHART_DIMENSION
        );
    }

    Ok(())
}

/// Keep series with at least one data point, logging the rest
pub fn plottable_series(series: Vec<TimingSeries>) -> Vec<TimingSeries> {
    series
        .into_iter()
        .filter(|s| {
            if s.is_empty() {
                warn!("No data points found for operation: {}", s.operation);
            }
            !s.is_empty()
        })
        .collect()
}
