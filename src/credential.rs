// src/credential.rs

//! The unit of import: one site/username/password tuple
//!
//! Records are plain values. Equality and hashing are structural so a
//! batch can be filtered down to distinct records before validation.

use std::collections::HashSet;
use std::fmt;

/// A login credential extracted from an import source
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct CredentialRecord {
    /// Site the credential applies to (URL as exported, host after normalization)
    pub domain: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub notes: Option<String>,
    /// Display name from the export's `name` column
    pub title: Option<String>,
}

impl CredentialRecord {
    /// Create a record with domain, username and password set
    pub fn new(
        domain: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            domain: Some(domain.into()),
            username: Some(username.into()),
            password: Some(password.into()),
            notes: None,
            title: None,
        }
    }

    /// Username, treating a missing value as empty
    pub fn username_or_empty(&self) -> &str {
        self.username.as_deref().unwrap_or("")
    }

    /// Password, treating a missing value as empty
    pub fn password_or_empty(&self) -> &str {
        self.password.as_deref().unwrap_or("")
    }
}

// Passwords must never reach logs or error messages.
impl fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialRecord")
            .field("domain", &self.domain)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("notes", &self.notes.as_ref().map(|_| "..."))
            .field("title", &self.title)
            .finish()
    }
}

/// Drop repeated records, keeping the first occurrence of each
pub fn distinct(records: Vec<CredentialRecord>) -> Vec<CredentialRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| seen.insert(record.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_equality() {
        let a = CredentialRecord::new("https://a.com", "bob", "pw1");
        let b = CredentialRecord::new("https://a.com", "bob", "pw1");
        assert_eq!(a, b);
        let with_note = CredentialRecord {
            notes: Some("note".to_string()),
            ..b.clone()
        };
        assert_ne!(a, with_note);
    }

    #[test]
    fn test_distinct_keeps_first_occurrence_order() {
        let records = vec![
            CredentialRecord::new("https://a.com", "bob", "pw1"),
            CredentialRecord::new("https://b.com", "amy", "pw2"),
            CredentialRecord::new("https://a.com", "bob", "pw1"),
            CredentialRecord::new("https://c.com", "cat", "pw3"),
        ];

        let unique = distinct(records);
        assert_eq!(unique.len(), 3);
        assert_eq!(unique[0].domain.as_deref(), Some("https://a.com"));
        assert_eq!(unique[1].domain.as_deref(), Some("https://b.com"));
        assert_eq!(unique[2].domain.as_deref(), Some("https://c.com"));
    }

    #[test]
    fn test_debug_redacts_password() {
        let record = CredentialRecord::new("a.com", "bob", "hunter2");
        let rendered = format!("{:?}", record);
        assert!(rendered.contains("bob"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn test_missing_fields_read_as_empty() {
        let record = CredentialRecord::default();
        assert_eq!(record.username_or_empty(), "");
        assert_eq!(record.password_or_empty(), "");
    }
}
