//! Copying of manifest files that have no project-side counterpart.
//!
//! Missing means "does not yet exist locally", so no merging or conflict
//! resolution is involved: content is copied byte-for-byte, only the file
//! name is rewritten to the project-side convention (comparison key plus
//! the type's project suffix). Existing files are never deleted or
//! rewritten by this module.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::error::{Error, Result};
use crate::matcher::transform_name;
use crate::metadata::TypeConfig;

/// Project-side file name for a manifest file name.
///
/// `Bar.profile` becomes `Bar.profile-meta.xml` for the `Profile` type.
pub fn project_file_name(file_name: &str, config: &TypeConfig) -> Result<String> {
    let regex = Regex::new(config.name_pattern)?;
    let key = transform_name(&regex, config.name_replacement, file_name);
    Ok(format!("{}{}", key, config.project_suffix))
}

/// Copy one missing manifest file into the project tree.
///
/// Returns the destination path on success. Failures are file-scoped: the
/// error names both endpoints so the orchestrator can record it and
/// continue with the remaining files.
pub fn copy_missing_file(
    source: &Path,
    destination_root: &Path,
    config: &TypeConfig,
) -> Result<PathBuf> {
    let base = source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| Error::Filesystem {
            message: format!("{} has no file name", source.display()),
        })?;
    let destination = destination_root.join(project_file_name(&base, config)?);

    fs::copy(source, &destination).map_err(|e| Error::Copy {
        src: source.display().to_string(),
        dst: destination.display().to_string(),
        message: e.to_string(),
    })?;

    Ok(destination)
}
