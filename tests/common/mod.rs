// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use credimport::db;
use std::path::PathBuf;
use tempfile::TempDir;

/// Export with three rows: one repeat and one without credentials.
pub const SCENARIO_CSV: &str = "name,url,username,password,note\n\
A,https://a.com,bob,pw1,\n\
A,https://a.com,bob,pw1,\n\
B,https://b.com,,,\n";

/// Create an initialized, empty credential database.
///
/// Returns (TempDir, db_path) - keep the TempDir alive to prevent cleanup.
pub fn setup_test_db() -> (TempDir, String) {
    let temp_dir = tempfile::tempdir().unwrap();
    let db_path = temp_dir
        .path()
        .join("credentials.db")
        .to_str()
        .unwrap()
        .to_string();

    db::init(&db_path).unwrap();
    (temp_dir, db_path)
}

/// Write `contents` next to the database and return its path.
pub fn write_export(temp_dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = temp_dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}
