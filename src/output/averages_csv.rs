//! Averages CSV writer and reader.
//!
//! Rows are serialized from `AggregatedEntry` with the header
//! `name,real_time,cpu_time,iterations,run_count`.

use super::{ensure_parent_dir, validate_path};
use crate::aggregator::AggregatedEntry;
use crate::utils::config::OUTPUT_HEADER;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write averages to a CSV file
///
/// **Public** - main entry point for averages output
///
/// # Arguments
/// * `entries` - Entries in output order
/// * `output_path` - Path to the averages CSV
///
/// # Errors
/// * `OutputError::InvalidPath` - path is empty, a directory, or its parent cannot be created
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::Csv` - serialization error
pub fn write_averages(
    entries: &[AggregatedEntry],
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing averages to: {}", output_path.display());

    validate_path(output_path)?;
    ensure_parent_dir(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;

    // Header is written explicitly so an empty slice still yields a valid file
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(BufWriter::new(file));

    writer.write_record(OUTPUT_HEADER)?;
    for entry in entries {
        writer.serialize(entry)?;
    }
    writer.flush().map_err(OutputError::WriteFailed)?;

    debug!("Wrote {} rows to {}", entries.len(), output_path.display());

    Ok(())
}

/// Read an averages CSV back into entries
///
/// **Public** - useful for validation and testing
pub fn read_averages(input_path: impl AsRef<Path>) -> Result<Vec<AggregatedEntry>, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading averages from: {}", input_path.display());

    let mut reader = csv::Reader::from_path(input_path)?;
    let entries = reader
        .deserialize()
        .collect::<Result<Vec<AggregatedEntry>, csv::Error>>()?;

    Ok(entries)
}
