//! Shared utility functions for tree walking

use std::fs;
use std::path::Path;

use crate::error::TreeError;

/// Get the display name of a path: its final segment, or the path as given
/// when it has none (`.`, `/`, `..`).
pub fn get_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Byte length of a file. A symlink reports its target's length.
pub fn get_file_size(path: &Path) -> Result<u64, TreeError> {
    fs::metadata(path)
        .map(|meta| meta.len())
        .map_err(|e| TreeError::metadata(path, e))
}
