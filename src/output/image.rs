//! Chart image output paths.

use super::{ensure_parent_dir, validate_path};
use crate::utils::config::IMAGE_EXTENSION;
use crate::utils::error::OutputError;
use std::path::{Path, PathBuf};

/// Input path with its extension replaced by the image extension
///
/// `results/timings.csv` becomes `results/timings.png`.
pub fn output_image_path(input: &Path) -> PathBuf {
    input.with_extension(IMAGE_EXTENSION)
}

/// Validate an image output path and create its parent directory
pub fn prepare_image_path(path: &Path) -> Result<(), OutputError> {
    validate_path(path)?;
    ensure_parent_dir(path)
}
