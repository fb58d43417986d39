//! Property tests for the relocated compositions.

use std::collections::HashSet;
use std::path::PathBuf;

use proptest::prelude::*;

use impldeps::domain::services::remove_all;
use impldeps::{Notation, RelocationKind};

use crate::common::{resolver_with, CountingRegistry, RecordingRelocator};

fn jar_name() -> impl Strategy<Value = String> {
    // A small alphabet so that lists overlap often.
    proptest::string::string_regex("lib/[a-f]\\.jar").unwrap()
}

fn classpath() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(jar_name(), 0..=8)
}

fn to_paths(items: &[String]) -> Vec<PathBuf> {
    items.iter().map(PathBuf::from).collect()
}

fn dedup(items: impl IntoIterator<Item = PathBuf>) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    items.into_iter().filter(|p| seen.insert(p.clone())).collect()
}

fn refs(items: &[String]) -> Vec<&str> {
    items.iter().map(String::as_str).collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `remove_all` keeps exactly the non-excluded entries, in order.
    #[test]
    fn property_remove_all_preserves_order(
        classpath in classpath(),
        excluded in classpath(),
    ) {
        let mut actual = to_paths(&classpath);
        let excluded = to_paths(&excluded);
        remove_all(&mut actual, excluded.iter());

        let expected: Vec<PathBuf> = to_paths(&classpath)
            .into_iter()
            .filter(|p| !excluded.contains(p))
            .collect();
        prop_assert_eq!(actual, expected);
    }

    /// PROPERTY: The API jar is generated from API minus (runtime and beacon),
    /// and the final files are the jar followed by runtime and beacon.
    #[test]
    fn property_api_relocates_set_difference(
        api in classpath(),
        runtime in classpath(),
        beacon in classpath(),
    ) {
        let registry = CountingRegistry::new(&[
            (Notation::ToolApi, &refs(&api)[..]),
            (Notation::ScriptRuntime, &refs(&runtime)[..]),
            (Notation::InstallationBeacon, &refs(&beacon)[..]),
        ]);
        let h = resolver_with(registry, true, RecordingRelocator::default());

        let resolved = h.resolver.resolve(Notation::ToolApi).unwrap();

        let untouched = to_paths(&runtime).into_iter().chain(to_paths(&beacon));
        let untouched: Vec<PathBuf> = untouched.collect();
        let expected_inputs = dedup(
            to_paths(&api).into_iter().filter(|p| !untouched.contains(p)),
        );
        prop_assert_eq!(
            h.relocator.inputs(RelocationKind::Api),
            vec![expected_inputs]
        );

        let expected_files = dedup(
            std::iter::once(RecordingRelocator::jar(RelocationKind::Api)).chain(untouched),
        );
        prop_assert_eq!(resolved.files().files(), expected_files);
    }

    /// PROPERTY: The test-kit jar never contains an API entry and the final
    /// files are the test-kit jar followed by the resolved API.
    #[test]
    fn property_test_kit_excludes_raw_api(
        api in classpath(),
        test_kit in classpath(),
    ) {
        let registry = CountingRegistry::new(&[
            (Notation::ToolApi, &refs(&api)[..]),
            (Notation::ScriptRuntime, &[]),
            (Notation::InstallationBeacon, &[]),
            (Notation::ToolTestKit, &refs(&test_kit)[..]),
        ]);
        let h = resolver_with(registry, true, RecordingRelocator::default());

        let resolved = h.resolver.resolve(Notation::ToolTestKit).unwrap();
        let api_files = h.resolver.cached(Notation::ToolApi).unwrap().files().files();

        let raw_api = to_paths(&api);
        let expected_inputs = dedup(
            to_paths(&test_kit).into_iter().filter(|p| !raw_api.contains(p)),
        );
        prop_assert_eq!(
            h.relocator.inputs(RelocationKind::TestKit),
            vec![expected_inputs]
        );

        let expected_files = dedup(
            std::iter::once(RecordingRelocator::jar(RelocationKind::TestKit)).chain(api_files),
        );
        prop_assert_eq!(resolved.files().files(), expected_files);
    }
}
