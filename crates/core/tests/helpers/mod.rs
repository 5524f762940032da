//! Shared fixture access for integration tests.

use std::path::PathBuf;

/// Absolute path of a file under `tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name);
    assert!(path.exists(), "Fixture '{name}' not found at {}", path.display());
    path
}

/// Contents of a fixture file.
pub fn fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).expect("Failed to read fixture")
}
