// src/error.rs

//! Error types for the credential import library
//!
//! Library code returns [`Result`]; the binary wraps these in `anyhow`.
//! Error messages must never contain passwords.

use thiserror::Error;

/// Errors produced by the import pipeline and the credential store
#[derive(Debug, Error)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode blob: {0}")]
    BlobDecode(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Initialization error: {0}")]
    InitError(String),

    #[error("Credential store error: {0}")]
    Store(String),
}

/// Result type for library operations
pub type Result<T> = std::result::Result<T, Error>;
