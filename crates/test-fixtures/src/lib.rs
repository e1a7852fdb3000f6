//! Test fixture loader for the shared catalog datasets.
//!
//! Provides generic deserialization of fixture JSON files for tests across
//! crates; the files live next to this crate under `catalogs/`.

use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Root directory of the test-fixtures crate.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use obra_core::{AliasMap, CompositeItem, Resource};

    #[test]
    fn catalog_fixtures_deserialize_into_engine_types() {
        let resources: Vec<Resource> = load_fixture("catalogs/resources.json");
        assert!(!resources.is_empty());
        let apus: Vec<CompositeItem> = load_fixture("catalogs/apus.json");
        assert!(apus.len() >= 4);
        let aliases: AliasMap = load_fixture("catalogs/aliases.json");
        assert_eq!(aliases.resolve("r-cem-old").unwrap(), "r-cem");
    }

    #[test]
    fn missing_fixture_is_detectable() {
        assert!(fixture_exists("catalogs/resources.json"));
        assert!(!fixture_exists("catalogs/nope.json"));
    }
}
