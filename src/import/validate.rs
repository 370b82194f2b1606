// src/import/validate.rs

//! Validation of parsed records
//!
//! A record is importable when it names a site we can key it by and
//! carries at least one of username or password. "Can key it by" means the
//! domain normalizer produces a host for it, so every record that passes
//! is stored under a canonical host.

use super::normalize::DomainNormalizer;
use crate::credential::CredentialRecord;

/// Whether a parsed record is well-formed enough to import
pub fn is_valid(record: &CredentialRecord) -> bool {
    let has_site = record
        .domain
        .as_deref()
        .is_some_and(|domain| DomainNormalizer::default().normalize_domain(domain).is_some());

    let has_login = !record.username_or_empty().is_empty() || !record.password_or_empty().is_empty();

    has_site && has_login
}

/// Keep only valid records, preserving order
pub fn filter_valid(records: Vec<CredentialRecord>) -> Vec<CredentialRecord> {
    records.into_iter().filter(is_valid).collect()
}
