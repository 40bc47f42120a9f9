//! # Metamerge Library
//!
//! This library provides the core functionality for merging retrieved
//! Salesforce metadata XML into a local project tree. It is designed to be
//! used by the `metamerge` command-line tool but can also be integrated
//! into other applications that need section-aware metadata merging.
//!
//! ## Quick Example
//!
//! ```
//! use metamerge::matcher::find_matching_files;
//! use metamerge::metadata::MetadataType;
//! use std::path::PathBuf;
//!
//! let config = MetadataType::Profile.config();
//! let manifest = vec![PathBuf::from("/tmp/retrieve/Admin.profile")];
//! let project = vec![PathBuf::from("force-app/Admin.profile-meta.xml")];
//!
//! let result = find_matching_files(&manifest, &project, config).unwrap();
//! assert_eq!(result.matching.len(), 1);
//! assert!(result.missing.is_empty());
//! ```
//!
//! ## Core Concepts
//!
//! - **Metadata Types (`metadata`, `defaults`)**: A closed set of
//!   supported document types, each described by a static `TypeConfig`
//!   (name regex, root tag, section keys, key fields, default flags).
//! - **File Matching (`matcher`)**: Pairs retrieved files with project
//!   files by normalizing both naming conventions to a comparison key.
//! - **Document Merging (`merge`)**: Section-aware structural merge of two
//!   XML documents, with optional deduplication and property-level
//!   merging.
//! - **File Copying (`copier`)**: Byte-for-byte copies of retrieved files
//!   that have no local counterpart, renamed to the project convention.
//! - **Run Reporting (`report`)**: Structured collection of per-file
//!   outcomes and failures for the orchestrating CLI to render.
//!
//! ## Execution Flow
//!
//! The `metamerge merge` command sequences the library as follows:
//!
//! 1. Resolve the type selector to a `TypeConfig` and derive the default
//!    merge flags.
//! 2. List metadata files on both sides (`filesystem`).
//! 3. Partition manifest files into matching pairs and missing files
//!    (`matcher`).
//! 4. Merge each matching pair in place (`merge::xml`), collecting
//!    file-scoped failures.
//! 5. Copy each missing file into the project tree (`copier`).
//! 6. Report merged, copied and failed files (`report`).
//!
//! Each file pair is an independent unit of work; a failure in one pair
//! never aborts the run unless the caller asks for fail-fast behavior.

pub mod copier;
pub mod defaults;
pub mod error;
pub mod filesystem;
pub mod matcher;
pub mod merge;
pub mod metadata;
pub mod report;

#[cfg(test)]
mod matcher_proptest;
