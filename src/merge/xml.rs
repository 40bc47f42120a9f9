//! XML document merging for metadata files
//!
//! Both documents are parsed into a single `xot` arena, which lets the
//! merge move nodes from the source tree into the target tree without
//! copying. The merge is scoped to the sections named by the type
//! configuration; any other children of the root pass through unchanged,
//! in their original relative order, ahead of the merged sections.
//!
//! Element names are compared by local name only, so documents with and
//! without the metadata namespace merge alike. Whitespace between entries
//! is rebuilt rather than preserved; field values and entry order are
//! exact.

use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::fs;
use std::path::Path;

use xot::{Node, Xot};

use super::{merge_entries, Keyed, MergeOptions};
use crate::error::{Error, Result};
use crate::metadata::TypeConfig;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Merge the source document into the target document and write the
/// result to `output`.
///
/// `output` is normally equal to `target`, making the merge in-place from
/// the caller's perspective. Re-merging an identical pair yields the same
/// result, so the operation is safe to re-invoke.
///
/// # Errors
///
/// All failures are file-scoped: parse errors and root-tag mismatches name
/// the offending path, and I/O errors name the file involved. The caller
/// decides whether the run continues with the remaining pairs.
pub fn merge_metadata_files(
    source: &Path,
    target: &Path,
    output: &Path,
    config: &TypeConfig,
    options: &MergeOptions,
) -> Result<()> {
    let source_xml = read_document(source)?;
    let target_xml = read_document(target)?;

    let merged = merge_documents(
        &source_xml,
        &target_xml,
        &source.display().to_string(),
        &target.display().to_string(),
        config,
        options,
    )?;

    fs::write(output, merged).map_err(|e| Error::Filesystem {
        message: format!("failed to write {}: {}", output.display(), e),
    })
}

/// Merge two documents given as strings; returns the serialized result.
///
/// `source_name` and `target_name` are used only in error context.
pub fn merge_documents(
    source_xml: &str,
    target_xml: &str,
    source_name: &str,
    target_name: &str,
    config: &TypeConfig,
    options: &MergeOptions,
) -> Result<String> {
    let mut xot = Xot::new();
    let source_doc = parse_document(&mut xot, source_xml, source_name)?;
    let target_doc = parse_document(&mut xot, target_xml, target_name)?;
    let source_root = checked_root(&xot, source_doc, config.root_tag, source_name)?;
    let target_root = checked_root(&xot, target_doc, config.root_tag, target_name)?;

    let target_children: Vec<Node> = xot.children(target_root).collect();

    // Pass-through first: element children outside the known sections keep
    // their relative order; merged sections follow in declared order.
    let mut ordered: Vec<Node> = target_children
        .iter()
        .copied()
        .filter(|&node| match local_name(&xot, node) {
            Some(name) => !is_section(config, name),
            None => false,
        })
        .collect();

    for section in config.section_keys {
        let target_entries = section_entries(&xot, target_root, section, config);
        let source_entries = section_entries(&xot, source_root, section, config);
        let merged = merge_entries(target_entries, source_entries, options, |tgt, src| {
            merge_entry_props(&mut xot, *tgt, src)
        })?;
        ordered.extend(merged.into_iter().map(|entry| entry.value));
    }

    rebuild_children(&mut xot, target_root, target_children, ordered, "\n    ")?;

    let body = xot
        .to_string(target_root)
        .map_err(|e| merge_err("serialize", e))?;
    Ok(format!("{}\n{}\n", XML_DECLARATION, body))
}

fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::Filesystem {
        message: format!("failed to read {}: {}", path.display(), e),
    })
}

fn parse_document(xot: &mut Xot, content: &str, name: &str) -> Result<Node> {
    xot.parse(content).map_err(|e| Error::Parse {
        path: name.to_string(),
        message: e.to_string(),
    })
}

/// Resolve the document element and verify its local name.
fn checked_root(xot: &Xot, doc: Node, expected: &str, path: &str) -> Result<Node> {
    let root = xot.document_element(doc).map_err(|e| Error::Parse {
        path: path.to_string(),
        message: e.to_string(),
    })?;
    let found = local_name(xot, root).unwrap_or_default().to_string();
    if found != expected {
        return Err(Error::RootTag {
            path: path.to_string(),
            expected: expected.to_string(),
            found,
        });
    }
    Ok(root)
}

fn is_section(config: &TypeConfig, name: &str) -> bool {
    config.section_keys.iter().any(|key| *key == name)
}

/// Local name of an element node, ignoring its namespace.
fn local_name(xot: &Xot, node: Node) -> Option<&str> {
    xot.element(node)
        .map(|element| xot.name_ns_str(element.name()).0)
}

/// Collect a section's entries in document order, each with its
/// identifying key.
fn section_entries(
    xot: &Xot,
    root: Node,
    section: &str,
    config: &TypeConfig,
) -> Vec<Keyed<Node>> {
    xot.children(root)
        .filter(|&node| local_name(xot, node) == Some(section))
        .map(|node| Keyed {
            key: Some(entry_key(xot, node, config.key_fields)),
            value: node,
        })
        .collect()
}

/// Identifying key of a section entry.
///
/// The key is the trimmed text of the first child element whose local name
/// appears in `key_fields`, searched in priority order. Entries without a
/// designated key field key on their content instead, which keeps
/// self-merge idempotent and lets identical duplicates collapse under
/// dedup.
fn entry_key(xot: &Xot, entry: Node, key_fields: &[&str]) -> String {
    for field in key_fields {
        for child in xot.children(entry) {
            if local_name(xot, child) == Some(*field) {
                return text_content(xot, child);
            }
        }
    }
    content_key(xot, entry)
}

fn content_key(xot: &Xot, entry: Node) -> String {
    let mut parts = Vec::new();
    for child in xot.children(entry) {
        if let Some(name) = local_name(xot, child) {
            parts.push(format!("{}={}", name, text_content(xot, child)));
        }
    }
    parts.join("|")
}

/// Concatenated, trimmed text of a node's direct text children.
fn text_content(xot: &Xot, node: Node) -> String {
    let mut text = String::new();
    for child in xot.children(node) {
        if let Some(t) = xot.text(child) {
            text.push_str(t.get());
        }
    }
    text.trim().to_string()
}

/// Merge the source entry's fields into the target entry.
///
/// Fields are the entry's child elements. Source fields win on conflict
/// and take the position of the target field's first occurrence; fields
/// present only in the target survive; source-only fields are appended in
/// source order.
fn merge_entry_props(xot: &mut Xot, target: Node, source: Node) -> Result<()> {
    let source_fields: Vec<Node> = xot
        .children(source)
        .filter(|&node| xot.element(node).is_some())
        .collect();

    let mut field_order: Vec<String> = Vec::new();
    let mut by_name: HashMap<String, Vec<Node>> = HashMap::new();
    for node in source_fields {
        let name = local_name(xot, node).unwrap_or_default().to_string();
        if !by_name.contains_key(&name) {
            field_order.push(name.clone());
        }
        by_name.entry(name).or_default().push(node);
    }

    let target_children: Vec<Node> = xot.children(target).collect();
    let mut ordered: Vec<Node> = Vec::new();
    let mut taken: HashSet<String> = HashSet::new();
    for child in &target_children {
        match local_name(xot, *child) {
            Some(name) if by_name.contains_key(name) => {
                // Source replaces the field at its first occurrence; any
                // later target occurrences of the same field are dropped.
                if taken.insert(name.to_string()) {
                    ordered.extend(by_name[name].iter().copied());
                }
            }
            Some(_) => ordered.push(*child),
            // Inter-field whitespace is rebuilt below.
            None => {}
        }
    }
    for name in &field_order {
        if !taken.contains(name) {
            ordered.extend(by_name[name].iter().copied());
        }
    }

    rebuild_children(xot, target, target_children, ordered, "\n        ")
}

/// Replace a parent's children with `ordered`, dropping every original
/// child not carried over and rebuilding the whitespace between children.
///
/// Nodes in `ordered` may come from either tree; appending moves them
/// under `parent`.
fn rebuild_children(
    xot: &mut Xot,
    parent: Node,
    original: Vec<Node>,
    ordered: Vec<Node>,
    indent: &str,
) -> Result<()> {
    for child in original {
        if !ordered.contains(&child) {
            xot.remove(child).map_err(|e| merge_err("rebuild", e))?;
        }
    }

    let has_children = !ordered.is_empty();
    for node in ordered {
        let sep = xot.new_text(indent);
        xot.append(parent, sep).map_err(|e| merge_err("rebuild", e))?;
        xot.append(parent, node).map_err(|e| merge_err("rebuild", e))?;
    }
    if has_children {
        // Closing tag sits one indent level shallower than the children.
        let tail = xot.new_text(indent.strip_suffix("    ").unwrap_or("\n"));
        xot.append(parent, tail).map_err(|e| merge_err("rebuild", e))?;
    }
    Ok(())
}

fn merge_err(operation: &str, e: impl Display) -> Error {
    Error::Merge {
        operation: operation.to_string(),
        message: e.to_string(),
    }
}
