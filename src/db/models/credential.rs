// src/db/models/credential.rs

//! Saved login credential rows

use crate::credential::CredentialRecord;
use crate::error::Result;
use rusqlite::{Connection, Row, params};
use serde::Serialize;

/// A credential as persisted in the `credentials` table
#[derive(Debug, Clone, Serialize)]
pub struct StoredCredential {
    pub id: Option<i64>,
    pub domain: String,
    pub username: Option<String>,
    #[serde(skip_serializing)]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub created_at: Option<String>,
}

const COLUMNS: &str = "id, domain, username, password, notes, title, created_at";

impl StoredCredential {
    /// Build an unsaved row from an import record, keyed by `domain`
    pub fn from_record(domain: &str, record: &CredentialRecord) -> Self {
        Self {
            id: None,
            domain: domain.to_string(),
            username: record.username.clone(),
            password: record.password.clone(),
            notes: record.notes.clone(),
            title: record.title.clone(),
            created_at: None,
        }
    }

    /// Convert back into an import record
    pub fn to_record(&self) -> CredentialRecord {
        CredentialRecord {
            domain: Some(self.domain.clone()),
            username: self.username.clone(),
            password: self.password.clone(),
            notes: self.notes.clone(),
            title: self.title.clone(),
        }
    }

    /// Insert this credential into the database
    pub fn insert(&mut self, conn: &Connection) -> Result<i64> {
        conn.execute(
            "INSERT INTO credentials (domain, username, password, notes, title)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                &self.domain,
                &self.username,
                &self.password,
                &self.notes,
                &self.title,
            ],
        )?;

        let id = conn.last_insert_rowid();
        self.id = Some(id);
        Ok(id)
    }

    /// All credentials saved for an exact (normalized) domain
    pub fn find_by_domain(conn: &Connection, domain: &str) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(&format!(
            "SELECT {COLUMNS} FROM credentials WHERE domain = ?1 ORDER BY id"
        ))?;

        let credentials = stmt
            .query_map([domain], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(credentials)
    }

    /// List all credentials ordered by domain
    pub fn list_all(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(&format!(
            "SELECT {COLUMNS} FROM credentials ORDER BY domain, username, id"
        ))?;

        let credentials = stmt
            .query_map([], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(credentials)
    }

    /// Number of saved credentials
    pub fn count(conn: &Connection) -> Result<i64> {
        let count = conn.query_row("SELECT COUNT(*) FROM credentials", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Convert a database row to a StoredCredential
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get(0)?),
            domain: row.get(1)?,
            username: row.get(2)?,
            password: row.get(3)?,
            notes: row.get(4)?,
            title: row.get(5)?,
            created_at: row.get(6)?,
        })
    }
}
