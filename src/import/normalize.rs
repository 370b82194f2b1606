// src/import/normalize.rs

//! Site identifier normalization
//!
//! Exports carry full URLs (`https://Accounts.Example.com/login?next=/`).
//! Duplicate detection and storage key credentials by host, so every
//! record's domain is rewritten to a canonical host form first.

use crate::config::NormalizeConfig;
use crate::credential::CredentialRecord;
use url::Url;

/// Parse a site value the way exports write them
///
/// Values without a scheme (`example.com/login`) are read as `https`.
pub fn parse_site_url(raw: &str) -> Option<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let url = if trimmed.contains("://") {
        Url::parse(trimmed).ok()?
    } else {
        Url::parse(&format!("https://{}", trimmed)).ok()?
    };

    match url.host_str() {
        Some(host) if !host.is_empty() => Some(url),
        _ => None,
    }
}

/// Rewrites record domains into canonical host form
#[derive(Debug, Clone)]
pub struct DomainNormalizer {
    keep_port: bool,
    strip_www: bool,
}

impl Default for DomainNormalizer {
    fn default() -> Self {
        Self::from_config(&NormalizeConfig::default())
    }
}

impl DomainNormalizer {
    pub fn from_config(config: &NormalizeConfig) -> Self {
        Self {
            keep_port: config.keep_port,
            strip_www: config.strip_www,
        }
    }

    /// Canonical host for a raw site value
    ///
    /// Scheme, credentials, path, query and fragment are dropped, the host
    /// is lower-cased and loses any trailing dot. Default ports for the
    /// scheme never appear; other ports are kept unless disabled.
    pub fn normalize_domain(&self, raw: &str) -> Option<String> {
        let url = parse_site_url(raw)?;
        let mut host = url.host_str()?.to_lowercase();

        if host.ends_with('.') {
            host.pop();
        }

        // "." and ".." parse as hosts but name no site
        if host.is_empty() || host.split('.').any(str::is_empty) {
            return None;
        }

        if self.strip_www
            && let Some(rest) = host.strip_prefix("www.")
            && rest.contains('.')
        {
            host = rest.to_string();
        }

        match url.port() {
            Some(port) if self.keep_port => Some(format!("{}:{}", host, port)),
            _ => Some(host),
        }
    }

    /// Normalize the domain of every record in a batch
    ///
    /// Records whose domain has no canonical form keep their original
    /// value; [`super::validate::is_valid`] rejects those beforehand.
    pub fn normalize_domains(&self, records: Vec<CredentialRecord>) -> Vec<CredentialRecord> {
        records
            .into_iter()
            .map(|record| {
                let normalized = record
                    .domain
                    .as_deref()
                    .and_then(|domain| self.normalize_domain(domain));
                match normalized {
                    Some(domain) => CredentialRecord {
                        domain: Some(domain),
                        ..record
                    },
                    None => record,
                }
            })
            .collect()
    }
}
