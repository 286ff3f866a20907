//! Parser for per-operation timing series (chart renderer input).
//!
//! The file has no fixed header. Its first row is always skipped; every
//! other row is `operation,delta_1,delta_2,...`. Blank cells are dropped
//! and the remaining values keep their run order.

use super::schema::TimingSeries;
use crate::utils::error::ChartError;
use csv::{ReaderBuilder, StringRecord};
use log::debug;
use std::io::Read;
use std::path::Path;

/// Parse a timing CSV file
///
/// **Public** - main entry point for the chart renderer
///
/// # Returns
/// One series per data row, including rows left with no values
///
/// # Errors
/// * `ChartError::Read` - file missing, unreadable, or not valid CSV text
pub fn parse_timing_file(path: impl AsRef<Path>) -> Result<Vec<TimingSeries>, ChartError> {
    let path = path.as_ref();
    let to_chart_error = |source| ChartError::Read {
        path: path.to_path_buf(),
        source,
    };

    let reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(to_chart_error)?;

    read_series(reader).map_err(to_chart_error)
}

/// Parse timing CSV from any reader
///
/// **Public** - used by `parse_timing_file` and tests
pub fn parse_timing_reader<R: Read>(rdr: R) -> Result<Vec<TimingSeries>, csv::Error> {
    let reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(rdr);

    read_series(reader)
}

fn read_series<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<TimingSeries>, csv::Error> {
    let mut series = Vec::new();

    // First row is a title/header placeholder, even when it holds data
    for (idx, result) in reader.records().enumerate().skip(1) {
        let row = result?;
        let parsed = parse_series_row(&row);
        debug!(
            "Row {}: operation {:?} with {} values",
            idx + 1,
            parsed.operation,
            parsed.len()
        );
        series.push(parsed);
    }

    Ok(series)
}

/// Split one row into its label and numeric values
///
/// Blank cells are dropped. Cells that are not numbers are dropped too.
pub fn parse_series_row(row: &StringRecord) -> TimingSeries {
    let operation = row.get(0).unwrap_or_default().trim().to_string();

    let deltas = row
        .iter()
        .skip(1)
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .filter_map(|cell| match cell.parse::<f64>() {
            Ok(v) if !v.is_nan() => Some(v),
            _ => {
                debug!("Dropping non-numeric value {:?} for {:?}", cell, operation);
                None
            }
        })
        .collect();

    TimingSeries { operation, deltas }
}

/// Longest series length, in points
pub fn max_runs(series: &[TimingSeries]) -> usize {
    series.iter().map(TimingSeries::len).max().unwrap_or(0)
}
