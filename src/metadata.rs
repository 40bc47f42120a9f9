//! # Metadata Types
//!
//! This module defines the closed set of supported metadata types and the
//! per-type configuration consumed uniformly by the matcher, merger and
//! copier. Each type is described by data (a [`TypeConfig`]), not code:
//! adding support for a new type means adding a configuration entry in
//! [`crate::defaults`], not new control flow.

use std::fmt;

use crate::defaults;
use crate::error::{Error, Result};

/// The supported metadata document types.
///
/// This enumeration is closed by design: each variant maps to exactly one
/// static [`TypeConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataType {
    Profile,
    CustomLabels,
    Translations,
}

impl MetadataType {
    /// All supported types, in the order they are listed to users.
    pub const ALL: [MetadataType; 3] = [
        MetadataType::Profile,
        MetadataType::CustomLabels,
        MetadataType::Translations,
    ];

    /// Parse a type selector as supplied on the command line.
    ///
    /// Matching is case-insensitive. An unknown selector is a configuration
    /// error and is raised before any file is touched.
    pub fn parse(name: &str) -> Result<Self> {
        for t in Self::ALL {
            if t.name().eq_ignore_ascii_case(name) {
                return Ok(t);
            }
        }
        Err(Error::UnknownType {
            name: name.to_string(),
            supported: Self::ALL
                .iter()
                .map(|t| t.name())
                .collect::<Vec<_>>()
                .join(", "),
        })
    }

    /// Canonical name of the type as it appears in `package.xml` manifests.
    pub fn name(self) -> &'static str {
        self.config().name
    }

    /// The static configuration for this type.
    pub fn config(self) -> &'static TypeConfig {
        match self {
            MetadataType::Profile => &defaults::PROFILE,
            MetadataType::CustomLabels => &defaults::CUSTOM_LABELS,
            MetadataType::Translations => &defaults::TRANSLATIONS,
        }
    }
}

impl fmt::Display for MetadataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-type default merge behavior.
///
/// The original tool managed these switches internally from the type
/// selector; here they are derived up front by [`derive_default_flags`] so
/// the engine itself carries no ambient configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeFlags {
    /// Collapse duplicate-keyed entries within a section after merging.
    pub dedup: bool,
    /// Merge entry property bags field-by-field instead of replacing whole
    /// entries.
    pub merge_props: bool,
}

/// Immutable descriptor for one metadata type.
///
/// Loaded once per run and shared by reference; all fields are static data.
#[derive(Debug)]
pub struct TypeConfig {
    /// Metadata type name as used in manifests and on the CLI.
    pub name: &'static str,
    /// Expected local name of the document's root element.
    pub root_tag: &'static str,
    /// Regex applied to a file's base name to derive its comparison key.
    ///
    /// Retrieved and project-side files use different naming conventions
    /// for the same logical component; this pattern normalizes both.
    pub name_pattern: &'static str,
    /// Replacement expansion for `name_pattern` (capture groups as `$1`).
    pub name_replacement: &'static str,
    /// Suffix appended to a comparison key to form the project-side file
    /// name, used when copying files that have no local counterpart.
    pub project_suffix: &'static str,
    /// Child elements of the root treated as mergeable sections, in the
    /// order they are emitted in merged output.
    pub section_keys: &'static [&'static str],
    /// Candidate identifying child elements for section entries, searched
    /// in priority order.
    pub key_fields: &'static [&'static str],
    /// Type-specific defaults for dedup / merge-props behavior.
    pub default_flags: MergeFlags,
}

/// Derive the default merge flags for a metadata type.
///
/// Pure function applied by the orchestrator before merge invocation;
/// explicit CLI switches can only force a flag on, never below the type's
/// baseline.
pub fn derive_default_flags(metadata_type: MetadataType) -> MergeFlags {
    metadata_type.config().default_flags
}
