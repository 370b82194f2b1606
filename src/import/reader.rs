// src/import/reader.rs

//! Front end of the import pipeline
//!
//! Reads export text from a browser blob or a file and prepares the batch
//! for the importer: parse, drop verbatim repeats, drop invalid records,
//! normalize domains. Failures are reported as [`ParseResult::Error`]
//! so callers can tell an unreadable source from an empty one.

use super::blob::decode_data_uri;
use super::normalize::DomainNormalizer;
use super::parser::parse_csv;
use super::validate::filter_valid;
use crate::config::ImportConfig;
use crate::credential::{CredentialRecord, distinct};
use crate::error::Result;
use std::path::Path;
use tracing::{info, warn};

/// Outcome of reading and preparing an export
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseResult {
    Success {
        /// Rows parsed from the source, before any filtering
        found_in_source: usize,
        /// Distinct, valid, normalized records ready for import
        records: Vec<CredentialRecord>,
    },
    Error(String),
}

/// Reads password exports into import-ready batches
#[derive(Debug, Clone, Default)]
pub struct CsvPasswordImporter {
    normalizer: DomainNormalizer,
}

impl CsvPasswordImporter {
    pub fn new(normalizer: DomainNormalizer) -> Self {
        Self { normalizer }
    }

    pub fn from_config(config: &ImportConfig) -> Self {
        Self::new(DomainNormalizer::from_config(&config.normalize))
    }

    /// Prepare records from a `data:` URI handed over by the browser
    pub fn read_csv_blob(&self, data_uri: &str) -> ParseResult {
        match decode_data_uri(data_uri) {
            Ok(csv) => self.read_csv_text(&csv),
            Err(e) => into_parse_result(Err(e)),
        }
    }

    /// Prepare records from an export file
    pub fn read_csv_file(&self, path: &Path) -> ParseResult {
        match std::fs::read_to_string(path) {
            Ok(csv) => self.read_csv_text(&csv),
            Err(e) => into_parse_result(Err(e.into())),
        }
    }

    /// Prepare records from an export file without blocking the runtime
    pub async fn read_csv_file_async(&self, path: &Path) -> ParseResult {
        match tokio::fs::read_to_string(path).await {
            Ok(csv) => self.read_csv_text(&csv),
            Err(e) => into_parse_result(Err(e.into())),
        }
    }

    /// Prepare records from export text that is already decoded
    pub fn read_csv_text(&self, csv: &str) -> ParseResult {
        into_parse_result(Ok(self.prepare(csv)))
    }

    fn prepare(&self, csv: &str) -> (usize, Vec<CredentialRecord>) {
        let all = parse_csv(csv);
        let found_in_source = all.len();

        let unique = distinct(all);
        let valid = filter_valid(unique);
        let records = self.normalizer.normalize_domains(valid);

        info!(
            "Prepared {} of {} parsed credentials for import",
            records.len(),
            found_in_source
        );
        (found_in_source, records)
    }
}

fn into_parse_result(result: Result<(usize, Vec<CredentialRecord>)>) -> ParseResult {
    match result {
        Ok((found_in_source, records)) => ParseResult::Success {
            found_in_source,
            records,
        },
        Err(e) => {
            warn!("Unable to read password export: {}", e);
            ParseResult::Error(e.to_string())
        }
    }
}
