//! Bench Average CLI
//!
//! Averages every benchmark result CSV in a directory into one
//! `<prefix>_average.csv` file.

use anyhow::Result;
use bench_report::commands::{execute_average, AverageArgs};
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

/// Average repeated benchmark runs per benchmark name
#[derive(Parser, Debug)]
#[command(name = "bench-average")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory containing the benchmark result CSV files
    results_directory: PathBuf,

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

    let report = execute_average(AverageArgs {
        results_dir: cli.results_directory,
    })?;

    println!(
        "✓ {} averages from {} files written to {}",
        report.entry_count,
        report.input_files.len(),
        report.output.display()
    );

    Ok(())
}
