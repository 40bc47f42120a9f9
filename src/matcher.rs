//! # File Matching
//!
//! Pairs retrieved manifest files with their project-side counterparts.
//!
//! Retrieved metadata and project metadata use different naming
//! conventions for the same logical component (`Admin.profile` vs
//! `Admin.profile-meta.xml`), so both sides are reduced to a comparison
//! key with the type's name regex before being compared. The matcher does
//! no I/O of its own: callers supply the two path lists (see
//! [`crate::filesystem::list_metadata_files`]) and consume the resulting
//! partition.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::warn;
use regex::Regex;

use crate::error::Result;
use crate::metadata::TypeConfig;

/// A manifest file together with the project file it merges into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedPair {
    /// Path on the manifest (retrieved) side.
    pub source: PathBuf,
    /// Path on the project side; always taken from the caller's project
    /// file list.
    pub target: PathBuf,
}

/// The partition produced by [`find_matching_files`].
///
/// Every manifest file appears in exactly one of the two sequences, in
/// manifest input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    /// Manifest files with a project-side counterpart.
    pub matching: Vec<MatchedPair>,
    /// Manifest files with no project-side counterpart.
    pub missing: Vec<PathBuf>,
}

impl MatchResult {
    /// True when the manifest side contributed no files at all.
    pub fn is_empty(&self) -> bool {
        self.matching.is_empty() && self.missing.is_empty()
    }
}

/// Derive the comparison key for a file name.
///
/// Applies the pattern/replacement to the base name. When the pattern does
/// not match, the name is returned unmodified: an unrecognized file simply
/// keys as itself rather than failing the run.
pub fn transform_name(regex: &Regex, replacement: &str, file_name: &str) -> String {
    match regex.captures(file_name) {
        Some(captures) => {
            let mut key = String::new();
            captures.expand(replacement, &mut key);
            key
        }
        None => file_name.to_string(),
    }
}

/// Comparison key for a path, using its base name.
fn path_key(regex: &Regex, replacement: &str, path: &Path) -> String {
    let base = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned());
    transform_name(regex, replacement, &base)
}

/// Partition manifest files into matching pairs and missing files.
///
/// Project files are indexed by comparison key first; when two project
/// files reduce to the same key the last registration wins, since only one
/// project-side target per component is meaningful. The collision is
/// logged at warn level but is not an error.
///
/// Output order follows the manifest input order, which keeps logs and
/// re-runs deterministic.
///
/// # Errors
///
/// Returns an error only when the type's name pattern fails to compile,
/// which is a configuration error raised before any file is touched.
pub fn find_matching_files(
    manifest_files: &[PathBuf],
    project_files: &[PathBuf],
    config: &TypeConfig,
) -> Result<MatchResult> {
    let regex = Regex::new(config.name_pattern)?;

    let mut lookup: HashMap<String, &PathBuf> = HashMap::new();
    for path in project_files {
        let key = path_key(&regex, config.name_replacement, path);
        if let Some(previous) = lookup.insert(key.clone(), path) {
            warn!(
                "project files {} and {} both normalize to '{}'; keeping the latter",
                previous.display(),
                path.display(),
                key
            );
        }
    }

    let mut result = MatchResult::default();
    for path in manifest_files {
        let key = path_key(&regex, config.name_replacement, path);
        match lookup.get(&key) {
            Some(target) => result.matching.push(MatchedPair {
                source: path.clone(),
                target: (*target).clone(),
            }),
            None => result.missing.push(path.clone()),
        }
    }

    Ok(result)
}
