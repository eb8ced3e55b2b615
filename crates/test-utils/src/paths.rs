//! Path utilities for locating preset config and scratch directories.

use std::fs;
use std::path::PathBuf;

/// Returns the workspace root directory.
///
/// This is determined by walking up from the test-utils manifest directory
/// (`crates/test-utils`) two levels.
pub fn workspace_root() -> PathBuf {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    PathBuf::from(manifest_dir)
        .parent() // crates/
        .and_then(|p| p.parent()) // workspace root
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from(manifest_dir))
}

/// Returns the directory holding the shipped preset files (`config/scenes/`).
pub fn scene_config_dir() -> PathBuf {
    workspace_root().join("config").join("scenes")
}

/// Creates a temporary directory for test output.
///
/// The directory is automatically cleaned up when the returned `TempDir` is dropped.
pub fn temp_test_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary test directory")
}

/// Creates a temporary preset directory holding `basemaps.yaml` and
/// `projections.yaml` with the given contents.
///
/// # Arguments
///
/// * `basemaps` - Contents of `basemaps.yaml`
/// * `projections` - Contents of `projections.yaml`
pub fn write_preset_dir(basemaps: &str, projections: &str) -> tempfile::TempDir {
    let dir = tempfile::Builder::new()
        .prefix("scene_presets_")
        .tempdir()
        .expect("Failed to create temporary preset directory");
    fs::write(dir.path().join("basemaps.yaml"), basemaps).expect("Failed to write basemaps.yaml");
    fs::write(dir.path().join("projections.yaml"), projections)
        .expect("Failed to write projections.yaml");
    dir
}
