//! Shared test helpers.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a temp directory for hosts files and FOCUSFOCUS_HOME.
pub fn temp_dir() -> TempDir {
    tempfile::Builder::new()
        .prefix("focusfocus_test_")
        .tempdir()
        .expect("temp dir")
}

/// Write `content` to `name` inside `dir` and return its path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("write test file");
    path
}

/// Lines as owned strings.
pub fn lines(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}
