use std::fs;
use std::path::Path;
use crate::utils::{OptimizerError, OptimizerResult};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Get file size in bytes
pub fn get_file_size(path: impl AsRef<Path>) -> OptimizerResult<u64> {
    fs::metadata(path.as_ref())
        .map(|m| m.len())
        .map_err(|e| OptimizerError::IO(format!(
            "Failed to get file size of {}: {}", path.as_ref().display(), e
        )))
}

/// Check that `path` is an existing, readable directory.
pub fn ensure_readable_dir(path: impl AsRef<Path>) -> OptimizerResult<()> {
    let path = path.as_ref();
    let meta = fs::metadata(path)
        .map_err(|e| OptimizerError::file_system(path, e))?;

    if !meta.is_dir() {
        return Err(OptimizerError::file_system(path, "not a directory"));
    }

    // A listing attempt surfaces permission problems up front
    fs::read_dir(path).map_err(|e| OptimizerError::file_system(path, e))?;
    Ok(())
}

/// `(original - new) / original * 100`; negative when the output grew.
pub fn reduction_percent(original: u64, new: u64) -> f64 {
    if original == 0 {
        return 0.0;
    }
    (original as f64 - new as f64) / original as f64 * 100.0
}

/// Bytes expressed in binary megabytes.
pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB
}
