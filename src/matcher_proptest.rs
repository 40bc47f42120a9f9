//! Property-based tests for the file matcher.
//!
//! These tests use proptest to generate random file name sets and verify
//! the matcher's partition invariants for all inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::matcher::{find_matching_files, transform_name};
    use crate::metadata::MetadataType;
    use proptest::prelude::*;
    use regex::Regex;
    use std::path::PathBuf;

    fn component_names() -> impl Strategy<Value = Vec<String>> {
        proptest::collection::vec("[A-Za-z][A-Za-z0-9_]{0,12}", 0..12)
    }

    proptest! {
        /// Property: matching ∪ missing (by manifest path) equals the
        /// manifest list exactly, with no duplicates and no omissions.
        #[test]
        fn partition_is_exact(
            manifest_names in component_names(),
            project_names in component_names(),
        ) {
            let config = MetadataType::Profile.config();
            let manifest: Vec<PathBuf> = manifest_names
                .iter()
                .map(|n| PathBuf::from(format!("/m/{}.profile", n)))
                .collect();
            let project: Vec<PathBuf> = project_names
                .iter()
                .map(|n| PathBuf::from(format!("/p/{}.profile-meta.xml", n)))
                .collect();

            let result = find_matching_files(&manifest, &project, config).unwrap();

            let mut reported: Vec<PathBuf> = result
                .matching
                .iter()
                .map(|pair| pair.source.clone())
                .collect();
            reported.extend(result.missing.iter().cloned());
            prop_assert_eq!(&reported, &manifest);
        }

        /// Property: every reported pair's target comes from the project
        /// list, and missing files have no project-side key match.
        #[test]
        fn targets_come_from_project_side(
            manifest_names in component_names(),
            project_names in component_names(),
        ) {
            let config = MetadataType::Profile.config();
            let regex = Regex::new(config.name_pattern).unwrap();
            let manifest: Vec<PathBuf> = manifest_names
                .iter()
                .map(|n| PathBuf::from(format!("/m/{}.profile", n)))
                .collect();
            let project: Vec<PathBuf> = project_names
                .iter()
                .map(|n| PathBuf::from(format!("/p/{}.profile-meta.xml", n)))
                .collect();

            let result = find_matching_files(&manifest, &project, config).unwrap();

            for pair in &result.matching {
                prop_assert!(project.contains(&pair.target));
            }
            for missing in &result.missing {
                let base = missing.file_name().unwrap().to_string_lossy();
                let key = transform_name(&regex, config.name_replacement, &base);
                prop_assert!(!project_names.contains(&key));
            }
        }

        /// Property: the name transform is deterministic.
        #[test]
        fn transform_is_deterministic(name in "[A-Za-z0-9_.]{1,24}") {
            let config = MetadataType::Profile.config();
            let regex = Regex::new(config.name_pattern).unwrap();
            let first = transform_name(&regex, config.name_replacement, &name);
            let second = transform_name(&regex, config.name_replacement, &name);
            prop_assert_eq!(first, second);
        }
    }
}
