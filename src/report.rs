//! Structured results of one merge run.
//!
//! The engine components return data; the CLI decides how to render it.
//! Every file-scoped failure is collected here with its stage and path so
//! nothing is silently lost, and the end-of-run summary has enough context
//! to reproduce each failure.

use std::fmt;
use std::path::PathBuf;

use crate::error::Error;

/// The pipeline stage in which a file-scoped failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Merge,
    Copy,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Merge => f.write_str("merge"),
            Stage::Copy => f.write_str("copy"),
        }
    }
}

/// One collected file-scoped failure.
#[derive(Debug)]
pub struct FileFailure {
    /// The manifest-side path being processed when the failure occurred.
    pub path: PathBuf,
    pub stage: Stage,
    pub error: Error,
}

/// Accumulated outcome of a run.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Project files updated by a merge.
    pub merged: Vec<PathBuf>,
    /// Files newly copied into the project tree.
    pub copied: Vec<PathBuf>,
    /// File-scoped failures, in the order they occurred.
    pub failures: Vec<FileFailure>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_merged(&mut self, path: PathBuf) {
        self.merged.push(path);
    }

    pub fn record_copied(&mut self, path: PathBuf) {
        self.copied.push(path);
    }

    pub fn record_failure(&mut self, path: PathBuf, stage: Stage, error: Error) {
        self.failures.push(FileFailure { path, stage, error });
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}
