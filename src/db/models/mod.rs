// src/db/models/mod.rs

//! Data models for database entities
//!
//! Each struct maps to a table and carries its own insert and query
//! methods.

mod credential;
mod import_run;

pub use credential::StoredCredential;
pub use import_run::ImportRun;
