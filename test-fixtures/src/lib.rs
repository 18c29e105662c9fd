//! Fixture loader for the medtrace golden datasets.
//!
//! Golden files share one layout:
//!
//! ```json
//! { "description": "...", "reference_date": "2024-06-10",
//!   "input": { "supplies": [], "suppliers": [], "alerts": [] },
//!   "expected": { ... } }
//! ```
//!
//! `input` holds raw listings exactly as the backend returns them, so the
//! golden tests exercise ingestion too.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("golden").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Raw listings fed to the engine.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GoldenInput {
    pub supplies: Vec<Value>,
    pub suppliers: Vec<Value>,
    pub alerts: Vec<Value>,
}

/// One golden scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenCase {
    pub description: String,
    /// ISO date the priority and dashboard passes are evaluated against.
    #[serde(default)]
    pub reference_date: Option<String>,
    pub input: GoldenInput,
    pub expected: Value,
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

/// Load a golden scenario.
pub fn load_golden(relative_path: &str) -> GoldenCase {
    load_fixture(relative_path)
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> Value {
    load_fixture(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by path.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    files.sort();
    files
}
