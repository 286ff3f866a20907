//! Best-effort parser for benchmark result CSV files.
//!
//! A file is read in three steps: locate the header among the preamble,
//! resolve the required columns, then parse every following row. Rows that
//! fail to parse are logged and skipped; they never abort the file.

use super::header::{discover_header, resolve_columns};
use super::schema::{BenchmarkRecord, ColumnIndices};
use crate::utils::error::{HeaderError, RowError};
use csv::{ReaderBuilder, StringRecord};
use log::{debug, info, warn};
use std::fs;
use std::path::Path;

/// Parse one benchmark result file
///
/// **Public** - main entry point for file parsing
///
/// # Arguments
/// * `path` - Path to a benchmark result CSV
///
/// # Returns
/// Every row that parsed cleanly, in file order
///
/// # Errors
/// * `HeaderError::Io` - file could not be read
/// * `HeaderError::Empty` / `NotFound` / `MissingColumns` - no usable header
pub fn parse_benchmark_file(path: impl AsRef<Path>) -> Result<Vec<BenchmarkRecord>, HeaderError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    parse_benchmark_str(&text, &path.display().to_string())
}

/// Parse benchmark CSV text
///
/// **Public** - used by `parse_benchmark_file` and tests
///
/// # Arguments
/// * `text` - Full file contents
/// * `source` - Label used in log messages (usually the file path)
pub fn parse_benchmark_str(text: &str, source: &str) -> Result<Vec<BenchmarkRecord>, HeaderError> {
    // Keep line endings so the data section can be handed to the CSV reader verbatim
    let lines: Vec<&str> = text.split_inclusive('\n').collect();

    let header = discover_header(&lines)?;
    info!(
        "Found CSV header at line {} in {}, skipped {} unrelated lines",
        header.line_index + 1,
        source,
        header.line_index
    );

    let columns = resolve_columns(&header.fields)?;
    debug!("Resolved columns in {}: {:?}", source, columns);

    let body = lines[header.line_index + 1..].concat();
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(body.as_bytes());

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for result in reader.records() {
        let row = match result {
            Ok(row) => row,
            Err(e) => {
                warn!("Malformed CSV record in {}: {}", source, e);
                skipped += 1;
                continue;
            }
        };

        match parse_row(&row, &columns) {
            Ok(record) => records.push(record),
            Err(RowError::Incomplete { .. }) => {
                warn!("Incomplete row in {}: {:?}", source, row_fields(&row));
                skipped += 1;
            }
            Err(e) => {
                warn!(
                    "Error parsing row in {}: {:?}, Error: {}",
                    source,
                    row_fields(&row),
                    e
                );
                skipped += 1;
            }
        }
    }

    debug!(
        "Parsed {} records from {} ({} rows skipped)",
        records.len(),
        source,
        skipped
    );

    Ok(records)
}

/// Parse a single data row
///
/// **Public** - row-level contract, exercised directly by tests
///
/// # Errors
/// * `RowError::Incomplete` - row does not reach the highest required column
/// * `RowError::InvalidFloat` - real_time or cpu_time is not a number
/// * `RowError::InvalidInteger` - iterations is not an integer
pub fn parse_row(row: &StringRecord, columns: &ColumnIndices) -> Result<BenchmarkRecord, RowError> {
    let required = columns.max_index();
    if row.len() <= required {
        return Err(RowError::Incomplete {
            len: row.len(),
            required,
        });
    }

    // Bounds were checked above
    let field = |idx: usize| row.get(idx).unwrap_or_default().trim();

    Ok(BenchmarkRecord {
        name: field(columns.name).to_string(),
        real_time: parse_float("real_time", field(columns.real_time))?,
        cpu_time: parse_float("cpu_time", field(columns.cpu_time))?,
        iterations: parse_integer("iterations", field(columns.iterations))?,
    })
}

fn parse_float(field: &'static str, value: &str) -> Result<f64, RowError> {
    value.parse().map_err(|_| RowError::InvalidFloat {
        field,
        value: value.to_string(),
    })
}

fn parse_integer(field: &'static str, value: &str) -> Result<i64, RowError> {
    value.parse().map_err(|_| RowError::InvalidInteger {
        field,
        value: value.to_string(),
    })
}

fn row_fields(row: &StringRecord) -> Vec<&str> {
    row.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const COLUMNS: ColumnIndices = ColumnIndices {
        name: 0,
        real_time: 2,
        cpu_time: 3,
        iterations: 4,
    };

    fn record(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    #[test]
    fn test_parse_row() {
        let parsed = parse_row(&record(&[" Foo ", "1", "100.5", "99", "1000"]), &COLUMNS).unwrap();
        assert_eq!(
            parsed,
            BenchmarkRecord {
                name: "Foo".to_string(),
                real_time: 100.5,
                cpu_time: 99.0,
                iterations: 1000,
            }
        );
    }

    #[test]
    fn test_parse_row_incomplete() {
        let err = parse_row(&record(&["Foo", "1", "100", "100"]), &COLUMNS).unwrap_err();
        assert_eq!(err, RowError::Incomplete { len: 4, required: 4 });
    }

    #[test]
    fn test_parse_row_invalid_float() {
        let err = parse_row(&record(&["Foo", "1", "fast", "100", "1000"]), &COLUMNS).unwrap_err();
        assert!(matches!(err, RowError::InvalidFloat { field: "real_time", .. }));
    }

    #[test]
    fn test_parse_row_invalid_integer() {
        let err = parse_row(&record(&["Foo", "1", "100", "100", "10.5"]), &COLUMNS).unwrap_err();
        assert!(matches!(err, RowError::InvalidInteger { field: "iterations", .. }));
    }

    #[test]
    fn test_parse_str_skips_bad_rows() {
        let text = "name,x,real_time,cpu_time,iterations\n\
                    Foo,1,100,100,1000\n\
                    Bar,1,oops,100,1000\n\
                    Baz,1,300\n\
                    Qux,1,50,40,10\n";

        let records = parse_benchmark_str(text, "test.csv").unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Foo", "Qux"]);
    }

    #[test]
    fn test_parse_str_honors_quoting() {
        let text = "name,real_time,cpu_time,iterations\n\
                    \"BM_Set/key,value\",12.5,12.0,500\n";

        let records = parse_benchmark_str(text, "test.csv").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "BM_Set/key,value");
        assert_eq!(records[0].iterations, 500);
    }

    #[test]
    fn test_parse_str_without_trailing_newline() {
        let text = "name,real_time,cpu_time,iterations\r\nFoo,1.5,1.0,7";
        let records = parse_benchmark_str(text, "test.csv").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].real_time, 1.5);
    }

    #[test]
    fn test_parse_str_no_header() {
        let result = parse_benchmark_str("a,b\n1,2\n", "test.csv");
        assert!(matches!(result, Err(HeaderError::NotFound)));
    }

    #[test]
    fn test_parse_str_empty() {
        assert!(matches!(parse_benchmark_str("", "test.csv"), Err(HeaderError::Empty)));
    }
}
