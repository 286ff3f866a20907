//! Bench Graph CLI
//!
//! Renders a CSV of per-operation timing deltas as a log-scale line chart,
//! saved as a PNG beside the input.

use anyhow::Result;
use bench_report::chart::ChartConfig;
use bench_report::commands::{execute_graph, GraphArgs};
use bench_report::utils::config::{DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH};
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

/// Plot timing deltas, one line per operation
#[derive(Parser, Debug)]
#[command(name = "bench-graph")]
#[command(version, about, long_about = None)]
struct Cli {
    /// CSV file of timing deltas (first row is ignored)
    input_csv_file: PathBuf,

    /// Chart title
    #[arg(long)]
    title: Option<String>,

    /// Image width in pixels
    #[arg(long, default_value_t = DEFAULT_CHART_WIDTH)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = DEFAULT_CHART_HEIGHT)]
    height: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Create chart config
    let mut chart_config = ChartConfig::new().with_size(cli.width, cli.height);
    if let Some(title) = cli.title {
        chart_config = chart_config.with_title(title);
    }

    let summary = execute_graph(GraphArgs {
        input: cli.input_csv_file,
        chart_config,
    })?;

    println!(
        "✓ {} series ({} runs max) plotted to {}",
        summary.series_plotted,
        summary.max_runs,
        summary.output.display()
    );

    Ok(())
}
