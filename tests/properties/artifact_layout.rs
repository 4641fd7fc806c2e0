//! Property tests for artifact locations and staleness.

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use proptest::prelude::*;

use kiln::application::is_stale;
use kiln::domain::entities::{simple_name, source_resource_name};
use kiln::infrastructure::artifact_path;

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_]{0,8}").unwrap()
}

fn class_name() -> impl Strategy<Value = (Vec<String>, String)> {
    let package = proptest::collection::vec(segment(), 0..=4);
    let simple = proptest::string::string_regex("[A-Z][A-Za-z0-9]{0,8}(\\$[A-Z][a-z0-9]{0,4})?")
        .unwrap();
    (package, simple)
}

fn join(package: &[String], simple: &str) -> String {
    package
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(simple))
        .collect::<Vec<_>>()
        .join(".")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: with an output root, the artifact path mirrors the package.
    #[test]
    fn property_output_root_mirrors_package((package, simple) in class_name()) {
        let name = join(&package, &simple);
        let root = Path::new("out");

        let path = artifact_path(&name, Path::new("anywhere/X.src"), Some(root));

        let mut expected = PathBuf::from("out");
        for segment in &package {
            expected.push(segment);
        }
        expected.push(format!("{}.out", simple));
        prop_assert_eq!(path, expected);
    }

    /// PROPERTY: without an output root, the artifact sits next to the source
    /// under its simple name.
    #[test]
    fn property_artifact_next_to_source((package, simple) in class_name()) {
        let name = join(&package, &simple);
        let source = Path::new("src/deep/dir/File.src");

        let path = artifact_path(&name, source, None);

        prop_assert_eq!(path.parent(), source.parent());
        let expected_file_name = format!("{}.out", simple_name(&name));
        prop_assert_eq!(
            path.file_name().and_then(|f| f.to_str()),
            Some(expected_file_name.as_str())
        );
    }

    /// PROPERTY: nested classes are looked up in their outer class's source.
    #[test]
    fn property_nested_names_share_the_outer_source((package, simple) in class_name()) {
        let outer = simple.split('$').next().unwrap().to_string();
        let resource = source_resource_name(&join(&package, &simple));

        prop_assert_eq!(resource, source_resource_name(&join(&package, &outer)));
        prop_assert!(!source_resource_name(&join(&package, &simple)).contains('$'));
    }

    /// PROPERTY: a source is stale exactly when it is strictly newer.
    #[test]
    fn property_staleness_is_strict(source in 0u64..1_000, artifact in 0u64..1_000) {
        let base = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let source_time = base + Duration::from_secs(source);
        let artifact_time = base + Duration::from_secs(artifact);

        prop_assert_eq!(is_stale(source_time, Some(artifact_time)), source > artifact);
        prop_assert!(is_stale(source_time, None));
    }
}
