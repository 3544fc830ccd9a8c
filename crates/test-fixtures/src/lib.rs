//! Test fixture loader for Braid golden fusion scenarios.
//!
//! Provides typed deserialization of fixture JSON files and helper functions
//! for loading them in tests across crates.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    // If we're inside a crate (e.g. braid-retrieval), go up to the crates/ directory.
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

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by file name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

/// One record of a golden scenario, mirroring a provider result.
///
/// Kept independent of `braid-core` so fixtures can describe malformed input.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenRecord {
    pub content_key: Option<String>,
    pub value: f64,
    #[serde(default)]
    pub document_id: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GoldenWeights {
    pub dense_weight: f64,
    pub sparse_weight: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoldenInput {
    pub query: String,
    pub top_k: usize,
    /// Caller-pinned weights; when absent the keyword policy decides.
    #[serde(default)]
    pub weights: Option<GoldenWeights>,
    /// "distance" (default) or "similarity".
    #[serde(default)]
    pub dense_kind: Option<String>,
    #[serde(default)]
    pub sparse_kind: Option<String>,
    pub dense: Vec<GoldenRecord>,
    pub sparse: Vec<GoldenRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoldenExpected {
    /// Set when the scenario must fail; names the error kind in snake_case.
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub query_class: Option<String>,
    #[serde(default)]
    pub weights: Option<GoldenWeights>,
    #[serde(default)]
    pub order: Vec<String>,
    /// Only finite scores are listed; JSON has no infinity.
    #[serde(default)]
    pub finite_scores: HashMap<String, f64>,
    #[serde(default)]
    pub document_ids: HashMap<String, String>,
}

/// A complete golden fusion scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct FusionScenario {
    pub description: String,
    pub input: GoldenInput,
    pub expected: GoldenExpected,
}

/// Load every scenario under `golden/fusion`, paired with its file stem.
pub fn load_fusion_scenarios() -> Vec<(String, FusionScenario)> {
    list_fixtures("golden/fusion")
        .into_iter()
        .map(|path| {
            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            let rel = format!("golden/fusion/{}.json", name);
            (name, load_fixture(&rel))
        })
        .collect()
}
