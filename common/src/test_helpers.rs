//! Shared Test Helpers for Cross-Crate Use
//!
//! Fixture writers used by both the `pricing` and `phones` test suites.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

static GLOBAL_TEST_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Generate identifiers that won't conflict across parallel tests
///
/// # Returns
/// A unique string in the format: "{prefix}-{pid}-{counter}"
pub fn generate_unique_id(prefix: &str) -> String {
    let counter = GLOBAL_TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("{}-{}-{}", prefix, std::process::id(), counter)
}

/// Serialize `value` as pretty JSON into `dir/name` and return the path.
pub fn write_json_fixture(dir: &Path, name: &str, value: &serde_json::Value) -> PathBuf {
    let path = dir.join(name);
    let body = serde_json::to_string_pretty(value).expect("fixture must serialize");
    fs::write(&path, body).expect("fixture must be writable");
    path
}

/// A temporary directory holding model artifacts for one test.
///
/// The directory is removed when the value is dropped.
pub struct ArtifactDir {
    dir: tempfile::TempDir,
}

impl ArtifactDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::Builder::new()
                .prefix(&generate_unique_id("artifacts"))
                .tempdir()
                .expect("temp dir must be creatable"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn path_str(&self) -> String {
        self.dir.path().to_string_lossy().into_owned()
    }

    pub fn write(&self, name: &str, value: &serde_json::Value) -> PathBuf {
        write_json_fixture(self.dir.path(), name, value)
    }

    pub fn write_raw(&self, name: &str, body: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, body).expect("fixture must be writable");
        path
    }
}

impl Default for ArtifactDir {
    fn default() -> Self {
        Self::new()
    }
}
