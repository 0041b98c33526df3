//! Shared helpers for integration tests.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Path to the on-disk XML fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Creates a temporary working directory containing the given fixture as
/// `export.xml`, the fixed path the binary reads.
pub fn workdir_with_export(fixture: &str) -> TempDir {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    fs::copy(fixtures_dir().join(fixture), dir.path().join("export.xml"))
        .expect("failed to copy fixture");
    dir
}

/// Creates a temporary working directory with no export file in it.
pub fn empty_workdir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}
