// src/db/mod.rs

//! Database layer for the credential store
//!
//! All persistent state lives in a single SQLite database. This module
//! owns connection setup (pragmas, parent directories); table
//! definitions live in [`schema`] and the row types in [`models`].

pub mod models;
pub mod paths;
pub mod schema;

use crate::error::{Error, Result};
use rusqlite::Connection;
use std::path::Path;
use tracing::info;

/// Create (or upgrade) the database at `db_path`
///
/// Parent directories are created as needed. Running this against an
/// existing database only applies pending migrations.
pub fn init(db_path: &str) -> Result<()> {
    let path = Path::new(db_path);
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    info!("Initializing credential database at {}", db_path);
    let conn = Connection::open(path)?;
    conn.pragma_update(None, "journal_mode", "WAL")?;
    configure(&conn)?;
    schema::migrate(&conn)?;
    Ok(())
}

/// Open an existing database
pub fn open(db_path: &str) -> Result<Connection> {
    if !Path::new(db_path).exists() {
        return Err(Error::InitError(format!(
            "Database not found at {} (run 'credimport init' first)",
            db_path
        )));
    }

    let conn = Connection::open(db_path)?;
    configure(&conn)?;
    Ok(conn)
}

/// Open a private in-memory database with the full schema applied
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    configure(&conn)?;
    schema::migrate(&conn)?;
    Ok(conn)
}

fn configure(conn: &Connection) -> Result<()> {
    conn.pragma_update(None, "foreign_keys", "ON")?;
    conn.busy_timeout(std::time::Duration::from_secs(5))?;
    Ok(())
}
