//! Property-based tests for path resolution.

use std::path::Path;

use proptest::prelude::*;
use tempfile::tempdir;

use crate::path::resolve;

// Strategy to generate path-safe component names.
fn component_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,10}"
}

fn path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(component_strategy(), 1..=5)
        .prop_map(|parts| format!("/{}", parts.join("/")))
}

proptest! {
    /// Successful resolution always yields an absolute path.
    #[test]
    fn resolved_paths_are_absolute(s in path_strategy()) {
        if let Ok(resolved) = resolve(Path::new(&s)) {
            prop_assert!(resolved.is_absolute());
        }
    }

    /// A canonical path resolves to itself.
    #[test]
    fn resolution_is_idempotent(s in component_strategy()) {
        let dir = tempdir().unwrap();
        let target = dir.path().join(&s);
        std::fs::create_dir_all(&target).unwrap();

        let once = resolve(&target).unwrap();
        let twice = resolve(&once).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// Resolution never panics on arbitrary component sequences, and any
    /// failure is a classified taxonomy variant.
    #[test]
    fn failures_are_classified(s in path_strategy()) {
        if let Err(e) = resolve(Path::new(&s)) {
            // Every variant carries a stable nonzero code.
            prop_assert!(e.code() > 0);
        }
    }
}
