//! Average command implementation.
//!
//! The average command:
//! 1. Validates the results directory
//! 2. Collects eligible result files
//! 3. Parses each file (best effort)
//! 4. Aggregates records by benchmark name
//! 5. Writes `<prefix>_average.csv`

use super::models::{AverageArgs, AverageReport};
use crate::aggregator::{aggregate, average_output_path, library_prefix, AggregateStats};
use crate::output::write_averages;
use crate::parser::{parse_benchmark_file, BenchmarkRecord};
use crate::utils::config::{AVERAGE_MARKER, INPUT_EXTENSION};
use crate::utils::error::AggregateError;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Execute the average command
///
/// **Public** - main entry point called from the `bench-average` binary
///
/// # Errors
/// * `AggregateError::NotADirectory` - path is missing or not a directory
/// * `AggregateError::NoInputFiles` - no eligible CSV files
/// * `AggregateError::NoRecords` - no file yielded a single record
/// * Output write failures
///
/// # Example
/// ```ignore
/// let args = AverageArgs {
///     results_dir: PathBuf::from("results/redis-cpp"),
/// };
///
/// execute_average(args)?;
/// ```
pub fn execute_average(args: AverageArgs) -> Result<AverageReport> {
    let start_time = Instant::now();
    let dir = args.results_dir.as_path();

    validate_args(&args)?;

    let output = average_output_path(dir);
    debug!(
        "Library prefix for {}: {}",
        dir.display(),
        library_prefix(dir)
    );

    let input_files = collect_input_files(dir)?;
    if input_files.is_empty() {
        return Err(AggregateError::NoInputFiles(dir.to_path_buf()).into());
    }

    info!(
        "Processing {} result files in {}...",
        input_files.len(),
        dir.display()
    );

    let records = load_records(&input_files);
    if records.is_empty() {
        return Err(AggregateError::NoRecords(dir.to_path_buf()).into());
    }

    let entries = aggregate(&records, input_files.len());
    let stats = AggregateStats::new(input_files.len(), &records, &entries);
    info!("Aggregated: {}", stats.summary());

    write_averages(&entries, &output)
        .with_context(|| format!("Failed to write averages to {}", output.display()))?;

    info!("Averages calculated and saved to {}", output.display());
    debug!(
        "Average completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(AverageReport {
        output,
        input_files,
        entry_count: entries.len(),
        record_count: records.len(),
    })
}

/// Validate average arguments
///
/// **Public** - can be called before execute_average for early validation
pub fn validate_args(args: &AverageArgs) -> Result<()> {
    if !args.results_dir.is_dir() {
        return Err(AggregateError::NotADirectory(args.results_dir.clone()).into());
    }
    Ok(())
}

/// List the result files of a directory
///
/// **Public** - file discovery contract
///
/// Keeps regular `*.csv` files whose name does not contain "average"
/// (case-insensitive), sorted by file name.
pub fn collect_input_files(dir: &Path) -> Result<Vec<PathBuf>, AggregateError> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() || !is_result_file(&path) {
            continue;
        }
        files.push(path);
    }

    files.sort();
    debug!("Found {} eligible files in {}", files.len(), dir.display());

    Ok(files)
}

fn is_result_file(path: &Path) -> bool {
    let has_csv_extension = path.extension().is_some_and(|ext| ext == INPUT_EXTENSION);
    let is_previous_output = path
        .file_name()
        .map(|name| name.to_string_lossy().to_lowercase().contains(AVERAGE_MARKER))
        .unwrap_or(false);

    has_csv_extension && !is_previous_output
}

/// Parse every file, logging and skipping the ones without usable data
fn load_records(files: &[PathBuf]) -> Vec<BenchmarkRecord> {
    let mut records = Vec::new();

    for path in files {
        match parse_benchmark_file(path) {
            Ok(parsed) => {
                debug!("{}: {} records", path.display(), parsed.len());
                records.extend(parsed);
            }
            Err(e) => warn!("{} in {}", e, path.display()),
        }
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_is_result_file() {
        assert!(is_result_file(Path::new("dir/run1.csv")));
        assert!(!is_result_file(Path::new("dir/run1.txt")));
        assert!(!is_result_file(Path::new("dir/redis_cpp_AVERAGE.csv")));
        assert!(!is_result_file(Path::new("dir/run1.CSV")));
    }

    #[test]
    fn test_collect_input_files_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.csv", "a.csv", "unknown_library_average.csv", "notes.txt"] {
            fs::write(dir.path().join(name), "x").unwrap();
        }
        fs::create_dir(dir.path().join("nested.csv")).unwrap();

        let files = collect_input_files(dir.path()).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["a.csv", "b.csv"]);
    }

    #[test]
    fn test_validate_args_missing_dir() {
        let args = AverageArgs {
            results_dir: PathBuf::from("/definitely/not/a/dir"),
        };
        let err = validate_args(&args).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AggregateError>(),
            Some(AggregateError::NotADirectory(_))
        ));
    }

    #[test]
    fn test_validate_args_file_is_not_dir() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let args = AverageArgs {
            results_dir: file.path().to_path_buf(),
        };
        assert!(validate_args(&args).is_err());
    }
}
