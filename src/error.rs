//! # Error Handling
//!
//! Centralized error handling for `metamerge`, built on `thiserror`.
//!
//! Errors fall into two tiers that the rest of the crate relies on:
//!
//! - **Configuration errors** (`UnknownType`, `Regex`) are fatal and are
//!   raised before any file is touched.
//! - **File-scoped errors** (`Parse`, `RootTag`, `Merge`, `Copy`, `Io`)
//!   carry the offending path so the orchestrator can collect them, keep
//!   going with the remaining files, and report everything at the end of
//!   the run.
//!
//! The `Result<T>` alias is used throughout the library.

use thiserror::Error;

/// Main error type for metamerge operations
#[derive(Error, Debug)]
pub enum Error {
    /// The `--type` selector does not name a supported metadata type.
    #[error("Unknown metadata type '{name}'\n  hint: supported types are {supported}")]
    UnknownType { name: String, supported: String },

    /// A metadata document could not be parsed as XML.
    #[error("Parse error in {path}: {message}")]
    Parse { path: String, message: String },

    /// A document's root element does not match the expected root tag for
    /// the selected metadata type.
    #[error("Unexpected root element in {path}: expected <{expected}>, found <{found}>")]
    RootTag {
        path: String,
        expected: String,
        found: String,
    },

    /// A structural merge operation failed.
    #[error("Merge operation error: {operation} - {message}")]
    Merge { operation: String, message: String },

    /// Copying a missing metadata file into the project tree failed.
    #[error("Copy error: {src} -> {dst}: {message}")]
    Copy {
        src: String,
        dst: String,
        message: String,
    },

    /// A filesystem operation outside of merge/copy failed.
    #[error("Filesystem operation error: {message}")]
    Filesystem { message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A regular expression error, wrapped from `regex::Error`.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_unknown_type() {
        let error = Error::UnknownType {
            name: "Layout".to_string(),
            supported: "Profile, CustomLabels, Translations".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Unknown metadata type 'Layout'"));
        assert!(display.contains("hint:"));
        assert!(display.contains("Profile"));
    }

    #[test]
    fn test_error_display_parse() {
        let error = Error::Parse {
            path: "force-app/Admin.profile-meta.xml".to_string(),
            message: "unexpected end of file".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Parse error"));
        assert!(display.contains("Admin.profile-meta.xml"));
        assert!(display.contains("unexpected end of file"));
    }

    #[test]
    fn test_error_display_root_tag() {
        let error = Error::RootTag {
            path: "Admin.profile".to_string(),
            expected: "Profile".to_string(),
            found: "CustomLabels".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("expected <Profile>"));
        assert!(display.contains("found <CustomLabels>"));
        assert!(display.contains("Admin.profile"));
    }

    #[test]
    fn test_error_display_copy() {
        let error = Error::Copy {
            src: "tmp/Bar.profile".to_string(),
            dst: "force-app/Bar.profile-meta.xml".to_string(),
            message: "permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Copy error"));
        assert!(display.contains("tmp/Bar.profile"));
        assert!(display.contains("permission denied"));
    }

    #[test]
    fn test_error_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let error: Error = io_error.into();
        let display = format!("{}", error);
        assert!(display.contains("I/O error"));
        assert!(display.contains("File not found"));
    }

    #[test]
    fn test_error_from_regex_error() {
        let regex_error = regex::Error::Syntax("Invalid regex".to_string());
        let error: Error = regex_error.into();
        let display = format!("{}", error);
        assert!(display.contains("Regex error"));
    }
}
