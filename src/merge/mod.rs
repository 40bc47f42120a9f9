//! Merge operations for metadata documents
//!
//! This module implements section-aware structural merging: documents are
//! treated as an ordered set of named sections, each holding entries
//! identified by a designated key field. Manifest-side ("source") entries
//! override or append into the project-side ("target") document while
//! non-conflicting target entries survive.
//!
//! The entry-level algorithm lives here as plain list logic, independent
//! of any serialization format; the XML-specific document handling is in
//! the `xml` submodule.

pub mod xml;

use std::collections::HashMap;

use crate::error::Result;
use crate::metadata::MergeFlags;

/// Tie-break for duplicate-keyed entries collapsed by dedup.
///
/// Source entries are merged into the last registration of a key, so
/// `KeepLast` (the default) makes freshly merged data win over stale
/// duplicates. `KeepFirst` is the explicit override for callers that want
/// pre-existing entries to survive instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DedupPolicy {
    #[default]
    KeepLast,
    KeepFirst,
}

/// Behavior switches for one merge call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeOptions {
    /// Collapse duplicate-keyed entries within a section after merging.
    pub dedup: bool,
    /// Merge matching entries field-by-field instead of replacing them.
    pub merge_props: bool,
    /// How dedup breaks ties between duplicate-keyed entries.
    pub dedup_policy: DedupPolicy,
}

impl MergeOptions {
    /// Build options from derived per-type flags, with the default dedup
    /// tie-break.
    pub fn from_flags(flags: MergeFlags) -> Self {
        Self {
            dedup: flags.dedup,
            merge_props: flags.merge_props,
            dedup_policy: DedupPolicy::default(),
        }
    }
}

/// An entry together with its identifying key.
///
/// A key of `None` marks an entry that cannot be identified; such entries
/// are preserved as-is and never matched or collapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyed<T> {
    pub key: Option<String>,
    pub value: T,
}

/// Merge source entries into a target entry list.
///
/// Target entries are indexed by key with last registration winning. Each
/// source entry, in source order, either merges into its keyed match via
/// `merge_in_place` (when `merge_props` is set), replaces the match in
/// position, or is appended. With `dedup` set, remaining duplicate keys
/// collapse to a single entry at the position of the first occurrence,
/// with content chosen by the dedup policy.
pub(crate) fn merge_entries<T>(
    target: Vec<Keyed<T>>,
    source: Vec<Keyed<T>>,
    options: &MergeOptions,
    mut merge_in_place: impl FnMut(&mut T, T) -> Result<()>,
) -> Result<Vec<Keyed<T>>> {
    let mut entries = target;

    let mut index: HashMap<String, usize> = HashMap::new();
    for (i, entry) in entries.iter().enumerate() {
        if let Some(key) = &entry.key {
            index.insert(key.clone(), i);
        }
    }

    for entry in source {
        let slot = entry.key.as_ref().and_then(|key| index.get(key)).copied();
        match slot {
            Some(i) => {
                if options.merge_props {
                    merge_in_place(&mut entries[i].value, entry.value)?;
                } else {
                    entries[i].value = entry.value;
                }
            }
            None => {
                if let Some(key) = &entry.key {
                    index.insert(key.clone(), entries.len());
                }
                entries.push(entry);
            }
        }
    }

    if options.dedup {
        entries = dedup_entries(entries, options.dedup_policy);
    }

    Ok(entries)
}

/// Collapse duplicate-keyed entries, keeping one entry per key at the
/// position of the key's first occurrence.
fn dedup_entries<T>(entries: Vec<Keyed<T>>, policy: DedupPolicy) -> Vec<Keyed<T>> {
    let mut slots: Vec<Option<Keyed<T>>> = Vec::with_capacity(entries.len());
    let mut seen: HashMap<String, usize> = HashMap::new();

    for entry in entries {
        match &entry.key {
            None => slots.push(Some(entry)),
            Some(key) => match seen.get(key) {
                Some(&slot) => {
                    if policy == DedupPolicy::KeepLast {
                        slots[slot] = Some(entry);
                    }
                }
                None => {
                    seen.insert(key.clone(), slots.len());
                    slots.push(Some(entry));
                }
            },
        }
    }

    slots.into_iter().flatten().collect()
}
