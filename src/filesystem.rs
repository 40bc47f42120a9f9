//! Local filesystem helpers for metadata discovery.
//!
//! Listing files on disk is an orchestrator concern: the matcher and
//! merger only ever see path lists. The walk is sorted so that runs are
//! deterministic regardless of directory iteration order.

use std::path::{Path, PathBuf};

use regex::Regex;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::metadata::TypeConfig;

/// Recursively list metadata files of the given type under `root`.
///
/// A file belongs to the type when its base name matches the type's name
/// pattern, which covers both the retrieved convention (`Admin.profile`)
/// and the project convention (`Admin.profile-meta.xml`).
pub fn list_metadata_files(root: &Path, config: &TypeConfig) -> Result<Vec<PathBuf>> {
    let regex = Regex::new(config.name_pattern)?;

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::Filesystem {
            message: format!("failed to scan {}: {}", root.display(), e),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if regex.is_match(&name) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
