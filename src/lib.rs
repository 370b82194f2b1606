// src/lib.rs

//! Credential import
//!
//! Imports saved passwords exported by another password manager into a
//! local credential store.
//!
//! # Architecture
//!
//! - Tolerant parsing: damaged rows are skipped, never fatal
//! - Database-first: saved credentials and import history live in SQLite
//! - Duplicate-aware: rows already saved (by site and username) are reported,
//!   not re-inserted
//! - Observable: every run publishes its running tally on a watch channel

pub mod config;
pub mod credential;
pub mod db;
mod error;
pub mod import;
pub mod progress;
pub mod store;

pub use config::{ImportConfig, load_config};
pub use credential::CredentialRecord;
pub use error::{Error, Result};
pub use import::{
    CsvPasswordImporter, ExistingPasswordMatchDetector, ImportOutcome, ImportStatus,
    ImportSummary, MatchPolicy, ParseResult, PasswordImporter, spawn_import,
};
pub use progress::{
    CallbackProgress, LogProgress, ProgressEvent, ProgressTracker, RecordDisposition,
    SilentProgress,
};
pub use store::{CredentialStore, SqliteCredentialStore};
