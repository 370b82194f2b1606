// src/db/models/import_run.rs

//! History of finished import runs

use crate::error::Result;
use crate::import::ImportOutcome;
use rusqlite::{Connection, Row, params};
use serde::Serialize;

/// Terminal counts of one import, as recorded in `import_runs`
#[derive(Debug, Clone, Serialize)]
pub struct ImportRun {
    pub id: Option<i64>,
    /// Where the records came from (file path or "blob")
    pub source: String,
    /// Rows parsed from the source before filtering
    pub found_in_source: i64,
    pub total_count: i64,
    pub saved_count: i64,
    pub duplicate_count: i64,
    pub failed_count: i64,
    /// The run was interrupted before the batch was exhausted
    pub cancelled: bool,
    pub finished_at: Option<String>,
}

impl ImportRun {
    /// Summarize a finished outcome
    pub fn from_outcome(source: &str, found_in_source: usize, outcome: &ImportOutcome) -> Self {
        Self {
            id: None,
            source: source.to_string(),
            found_in_source: found_in_source as i64,
            total_count: outcome.total_count as i64,
            saved_count: outcome.saved_ids.len() as i64,
            duplicate_count: outcome.duplicates.len() as i64,
            failed_count: outcome.failed.len() as i64,
            cancelled: false,
            finished_at: None,
        }
    }

    /// Insert this run into the database
    pub fn insert(&mut self, conn: &Connection) -> Result<i64> {
        conn.execute(
            "INSERT INTO import_runs
                (source, found_in_source, total_count, saved_count, duplicate_count,
                 failed_count, cancelled)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                &self.source,
                self.found_in_source,
                self.total_count,
                self.saved_count,
                self.duplicate_count,
                self.failed_count,
                self.cancelled,
            ],
        )?;

        let id = conn.last_insert_rowid();
        self.id = Some(id);
        Ok(id)
    }

    /// Most recent runs first
    pub fn list_recent(conn: &Connection, limit: usize) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, source, found_in_source, total_count, saved_count, duplicate_count,
                    failed_count, cancelled, finished_at
             FROM import_runs ORDER BY id DESC LIMIT ?1",
        )?;

        let runs = stmt
            .query_map([limit as i64], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(runs)
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get(0)?),
            source: row.get(1)?,
            found_in_source: row.get(2)?,
            total_count: row.get(3)?,
            saved_count: row.get(4)?,
            duplicate_count: row.get(5)?,
            failed_count: row.get(6)?,
            cancelled: row.get(7)?,
            finished_at: row.get(8)?,
        })
    }
}
