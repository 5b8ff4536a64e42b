//! Property-based tests for file naming.

use proptest::prelude::*;
use savextract_core::naming::save_file_name;
use savextract_core::naming::transform_stem;
use std::path::PathBuf;

proptest! {
    /// Flattened stems never contain a dot.
    #[test]
    fn prop_no_dots_survive(stem in "[A-Za-z0-9._ ]{0,40}") {
        prop_assert!(!transform_stem(&stem).contains('.'));
    }

    /// Names without `Manual.` only have their dots replaced.
    #[test]
    fn prop_plain_names_only_flatten(stem in "[a-z0-9._]{0,40}") {
        prop_assume!(!stem.contains("Manual."));
        prop_assert_eq!(transform_stem(&stem), stem.replace('.', "_"));
    }

    /// `Manual.<rest>` becomes `ManualSave_<rest with dots flattened>`.
    #[test]
    fn prop_manual_prefix(rest in "[a-z0-9.]{0,20}") {
        let stem = format!("Manual.{rest}");
        let expected = format!("ManualSave_{}", rest.replace('.', "_"));
        prop_assert_eq!(transform_stem(&stem), expected);
    }

    /// The archive extension survives the transformation.
    #[test]
    fn prop_extension_preserved(
        stem in "[A-Za-z0-9]{1,10}(\\.[A-Za-z0-9]{1,5}){0,3}",
        ext in "[a-z]{1,4}"
    ) {
        let archive = PathBuf::from(format!("saves/{stem}.{ext}"));
        let name = save_file_name(&archive, true).expect("valid name");
        let expected_suffix = format!(".{ext}");
        prop_assert!(name.ends_with(&expected_suffix));
        prop_assert_eq!(name.matches('.').count(), 1);
    }
}
