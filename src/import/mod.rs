// src/import/mod.rs

//! Password import pipeline
//!
//! raw input (CSV text, `data:` URI or file)
//!   -> [`parser`] -> distinct -> [`validate`] -> [`normalize`]
//!   -> [`importer`] (with [`duplicate`] detection) -> credential store
//!
//! The front half lives in [`CsvPasswordImporter`], which yields a
//! [`ParseResult`]; the back half in [`PasswordImporter`], which yields an
//! [`ImportOutcome`] and publishes [`ImportStatus`] updates.

pub mod blob;
pub mod duplicate;
pub mod importer;
pub mod normalize;
pub mod outcome;
pub mod parser;
pub mod reader;
pub mod validate;

pub use blob::decode_data_uri;
pub use duplicate::{ExistingPasswordMatchDetector, MatchPolicy};
pub use importer::{PasswordImporter, spawn_import};
pub use normalize::DomainNormalizer;
pub use outcome::{ImportOutcome, ImportStatus, ImportSummary};
pub use parser::parse_csv;
pub use reader::{CsvPasswordImporter, ParseResult};
pub use validate::is_valid;
