// src/db/paths.rs
//! Centralized path derivation for credimport files

use std::path::{Path, PathBuf};

/// Default location of the credential database
pub const DEFAULT_DB_PATH: &str = "/var/lib/credimport/credentials.db";

/// Environment variable overriding the database directory
pub const DB_DIR_ENV: &str = "CREDIMPORT_DB_DIR";

/// Resolve the database path, honoring `CREDIMPORT_DB_DIR`
///
/// The override only replaces the directory; the file name is kept.
pub fn resolve_db_path(db_path: &str) -> PathBuf {
    match std::env::var(DB_DIR_ENV) {
        Ok(dir) if !dir.is_empty() => {
            let file_name = Path::new(db_path)
                .file_name()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("credentials.db"));
            PathBuf::from(dir).join(file_name)
        }
        _ => PathBuf::from(db_path),
    }
}
