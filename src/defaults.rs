//! Static type configurations for the supported metadata types.
//!
//! This module centralizes the per-type descriptors so the rest of the
//! crate never branches on the type enumeration directly. The section key
//! lists follow the order in which the Metadata API emits the elements in
//! retrieved documents.

use crate::metadata::{MergeFlags, TypeConfig};

/// Configuration for `Profile` metadata.
///
/// Profiles are retrieved partially (only the components named in the
/// manifest are present), so property-level merging is on by default:
/// replacing whole documents would discard local-only permissions.
pub static PROFILE: TypeConfig = TypeConfig {
    name: "Profile",
    root_tag: "Profile",
    name_pattern: r"^(.*)\.profile(?:-meta)?(?:\.xml)?$",
    name_replacement: "$1",
    project_suffix: ".profile-meta.xml",
    section_keys: &[
        "applicationVisibilities",
        "categoryGroupVisibilities",
        "classAccesses",
        "customMetadataTypeAccesses",
        "customPermissions",
        "customSettingAccesses",
        "externalDataSourceAccesses",
        "fieldPermissions",
        "flowAccesses",
        "layoutAssignments",
        "loginIpRanges",
        "objectPermissions",
        "pageAccesses",
        "recordTypeVisibilities",
        "tabVisibilities",
        "userPermissions",
    ],
    // Searched in priority order; recordType outranks layout so that
    // layout assignments are identified by the record type they bind.
    key_fields: &[
        "application",
        "apexClass",
        "name",
        "dataCategoryGroup",
        "externalDataSource",
        "field",
        "flow",
        "object",
        "apexPage",
        "recordType",
        "layout",
        "tab",
    ],
    default_flags: MergeFlags {
        dedup: false,
        merge_props: true,
    },
};

/// Configuration for `CustomLabels` metadata.
///
/// A single document holds every label, so retrieved data is complete per
/// entry and whole-entry replacement with deduplication is the safe default.
pub static CUSTOM_LABELS: TypeConfig = TypeConfig {
    name: "CustomLabels",
    root_tag: "CustomLabels",
    name_pattern: r"^(.*)\.labels(?:-meta)?(?:\.xml)?$",
    name_replacement: "$1",
    project_suffix: ".labels-meta.xml",
    section_keys: &["labels"],
    key_fields: &["fullName"],
    default_flags: MergeFlags {
        dedup: true,
        merge_props: false,
    },
};

/// Configuration for `Translations` metadata.
pub static TRANSLATIONS: TypeConfig = TypeConfig {
    name: "Translations",
    root_tag: "Translations",
    name_pattern: r"^(.*)\.translation(?:-meta)?(?:\.xml)?$",
    name_replacement: "$1",
    project_suffix: ".translation-meta.xml",
    section_keys: &[
        "customApplications",
        "customLabels",
        "customPageWebLinks",
        "customTabs",
        "flowDefinitions",
        "quickActions",
        "reportTypes",
    ],
    key_fields: &["name", "fullName"],
    default_flags: MergeFlags {
        dedup: false,
        merge_props: true,
    },
};
