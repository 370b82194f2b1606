// src/store.rs

//! Persistent credential store
//!
//! The import orchestrator and the duplicate detector only talk to the
//! store through [`CredentialStore`], so the pipeline can run against the
//! SQLite store in production and against purpose-built stores in tests.

use crate::credential::CredentialRecord;
use crate::db;
use crate::db::models::StoredCredential;
use crate::error::Result;
use rusqlite::Connection;
use tracing::debug;

/// Existence-check and insert operations keyed by domain
pub trait CredentialStore {
    /// All credentials currently saved for `domain`
    fn credentials_for_domain(&self, domain: &str) -> Result<Vec<CredentialRecord>>;

    /// Save `record` under `domain`
    ///
    /// Returns the assigned identifier, or `None` when the store declined
    /// the insert.
    fn save_credentials(&mut self, domain: &str, record: &CredentialRecord)
        -> Result<Option<i64>>;
}

/// SQLite-backed credential store
pub struct SqliteCredentialStore {
    conn: Connection,
}

impl SqliteCredentialStore {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Open the store at an initialized database path
    pub fn open(db_path: &str) -> Result<Self> {
        Ok(Self::new(db::open(db_path)?))
    }

    /// Fresh in-memory store with the schema applied
    pub fn in_memory() -> Result<Self> {
        Ok(Self::new(db::open_in_memory()?))
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl CredentialStore for SqliteCredentialStore {
    fn credentials_for_domain(&self, domain: &str) -> Result<Vec<CredentialRecord>> {
        let stored = StoredCredential::find_by_domain(&self.conn, domain)?;
        Ok(stored.iter().map(StoredCredential::to_record).collect())
    }

    fn save_credentials(
        &mut self,
        domain: &str,
        record: &CredentialRecord,
    ) -> Result<Option<i64>> {
        // A login with neither username nor password is never stored.
        if record.username_or_empty().is_empty() && record.password_or_empty().is_empty() {
            debug!("Declining to save empty credential for {}", domain);
            return Ok(None);
        }

        let mut stored = StoredCredential::from_record(domain, record);
        let id = stored.insert(&self.conn)?;
        Ok(Some(id))
    }
}
