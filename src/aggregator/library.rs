//! Output naming derived from the results directory.

use crate::utils::config::{AVERAGE_FILE_SUFFIX, LIBRARY_PREFIXES, UNKNOWN_LIBRARY};
use std::path::{Path, PathBuf};

/// Library prefix for a results directory
///
/// Matches the lowercased path against the known library markers.
pub fn library_prefix(dir: &Path) -> &'static str {
    let lowered = dir.to_string_lossy().to_lowercase();

    LIBRARY_PREFIXES
        .iter()
        .find(|(marker, _)| lowered.contains(marker))
        .map(|(_, prefix)| *prefix)
        .unwrap_or(UNKNOWN_LIBRARY)
}

/// File name of the averages output, e.g. `redis_cpp_average.csv`
pub fn average_file_name(dir: &Path) -> String {
    format!("{}{}", library_prefix(dir), AVERAGE_FILE_SUFFIX)
}

/// Full path of the averages output inside `dir`
pub fn average_output_path(dir: &Path) -> PathBuf {
    dir.join(average_file_name(dir))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_prefix() {
        assert_eq!(
            library_prefix(Path::new("results/Redis-Plus-Plus/run")),
            "redis_plus_plus"
        );
        assert_eq!(library_prefix(Path::new("/tmp/redis-cpp")), "redis_cpp");
        assert_eq!(library_prefix(Path::new("results/hiredis")), "unknown_library");
    }

    #[test]
    fn test_average_output_path() {
        let path = average_output_path(Path::new("bench/redis-cpp"));
        assert_eq!(path, Path::new("bench/redis-cpp/redis_cpp_average.csv"));
    }
}
