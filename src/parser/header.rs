//! Header discovery and column resolution for benchmark result files.
//!
//! Benchmark runners often print a preamble (context lines, CPU info,
//! warnings) before the CSV table. The header is the first line that looks
//! like a column row: more than three comma-separated fields, one of which
//! mentions "name" and one of which mentions "real".

use super::schema::{ColumnIndices, DiscoveredHeader};
use crate::utils::config::{
    CPU_TIME_PATTERNS, HEADER_NAME_MARKER, HEADER_REAL_MARKER, ITERATIONS_PATTERNS,
    MIN_HEADER_FIELDS, NAME_PATTERNS, REAL_TIME_PATTERNS,
};
use crate::utils::error::HeaderError;
use log::debug;

/// Lowercase, trim and replace spaces with underscores
///
/// "Real Time " and "real_time" normalize to the same key.
pub fn normalize_field(field: &str) -> String {
    field.trim().to_lowercase().replace(' ', "_")
}

/// Whether a single line qualifies as the column header
pub fn is_header_line(line: &str) -> bool {
    let fields: Vec<&str> = line.trim().split(',').collect();
    if fields.len() <= MIN_HEADER_FIELDS {
        return false;
    }

    let normalized: Vec<String> = fields.iter().map(|f| normalize_field(f)).collect();
    normalized.iter().any(|f| f.contains(HEADER_NAME_MARKER))
        && normalized.iter().any(|f| f.contains(HEADER_REAL_MARKER))
}

/// Find the first qualifying header line
///
/// **Public** - main entry point for header discovery
///
/// # Arguments
/// * `lines` - Raw lines of one file, in order
///
/// # Returns
/// The header's line index and its raw fields. Lines before it are preamble.
///
/// # Errors
/// * `HeaderError::Empty` - no lines at all
/// * `HeaderError::NotFound` - no line qualifies
pub fn discover_header<S: AsRef<str>>(lines: &[S]) -> Result<DiscoveredHeader, HeaderError> {
    if lines.is_empty() {
        return Err(HeaderError::Empty);
    }

    let (line_index, line) = lines
        .iter()
        .map(|line| line.as_ref())
        .enumerate()
        .find(|(_, line)| is_header_line(line))
        .ok_or(HeaderError::NotFound)?;

    let fields = line.trim().split(',').map(str::to_string).collect();

    debug!("Header candidate at line {}: {:?}", line_index + 1, line.trim());

    Ok(DiscoveredHeader { line_index, fields })
}

/// Which of the four required fields a column is read as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    RealTime,
    CpuTime,
    Iterations,
}

impl Field {
    /// Classify one normalized column; checks run in priority order
    fn classify(column: &str) -> Option<Self> {
        let matches = |patterns: &[&str]| patterns.iter().any(|p| column.contains(p));

        if matches(NAME_PATTERNS) {
            Some(Self::Name)
        } else if matches(REAL_TIME_PATTERNS) {
            Some(Self::RealTime)
        } else if matches(CPU_TIME_PATTERNS) {
            Some(Self::CpuTime)
        } else if matches(ITERATIONS_PATTERNS) {
            Some(Self::Iterations)
        } else {
            None
        }
    }
}

/// Resolve the indices of the name, real_time, cpu_time and iterations columns
///
/// **Public** - used by the benchmark CSV parser
///
/// Each column is assigned to the first field (in priority order) whose
/// pattern it contains. The first column assigned to a field wins.
///
/// # Errors
/// * `HeaderError::MissingColumns` - any of the four fields is unresolved
pub fn resolve_columns<S: AsRef<str>>(fields: &[S]) -> Result<ColumnIndices, HeaderError> {
    let mut name = None;
    let mut real_time = None;
    let mut cpu_time = None;
    let mut iterations = None;

    for (i, field) in fields.iter().enumerate() {
        let slot = match Field::classify(&normalize_field(field.as_ref())) {
            Some(Field::Name) => &mut name,
            Some(Field::RealTime) => &mut real_time,
            Some(Field::CpuTime) => &mut cpu_time,
            Some(Field::Iterations) => &mut iterations,
            None => continue,
        };
        if slot.is_none() {
            *slot = Some(i);
        }
    }

    match (name, real_time, cpu_time, iterations) {
        (Some(name), Some(real_time), Some(cpu_time), Some(iterations)) => Ok(ColumnIndices {
            name,
            real_time,
            cpu_time,
            iterations,
        }),
        _ => Err(HeaderError::MissingColumns {
            name,
            real_time,
            cpu_time,
            iterations,
        }),
    }
}
