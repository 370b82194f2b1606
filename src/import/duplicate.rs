// src/import/duplicate.rs

//! Detection of credentials that are already saved
//!
//! Matching runs against the store after domain normalization, so the
//! domain comparison is effectively case-insensitive. Usernames and
//! passwords are compared exactly; a missing username matches an empty
//! one.

use crate::credential::CredentialRecord;
use crate::error::Result;
use crate::store::CredentialStore;

/// Which fields must match for a record to count as already saved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    /// Same domain and username
    #[default]
    DomainAndUsername,
    /// Same domain, username and password
    DomainUsernameAndPassword,
}

/// Checks candidate records against the persistent store
#[derive(Debug, Clone, Default)]
pub struct ExistingPasswordMatchDetector {
    policy: MatchPolicy,
}

impl ExistingPasswordMatchDetector {
    pub fn new(policy: MatchPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Whether the store already holds a credential matching `candidate`
    ///
    /// Reflects the store as of this call. Store errors are returned
    /// rather than guessed at.
    pub fn already_exists<S>(&self, store: &S, candidate: &CredentialRecord) -> Result<bool>
    where
        S: CredentialStore + ?Sized,
    {
        let Some(domain) = candidate.domain.as_deref() else {
            return Ok(false);
        };

        let existing = store.credentials_for_domain(domain)?;
        Ok(existing.iter().any(|stored| self.matches(stored, candidate)))
    }

    fn matches(&self, stored: &CredentialRecord, candidate: &CredentialRecord) -> bool {
        if stored.username_or_empty() != candidate.username_or_empty() {
            return false;
        }

        match self.policy {
            MatchPolicy::DomainAndUsername => true,
            MatchPolicy::DomainUsernameAndPassword => {
                stored.password_or_empty() == candidate.password_or_empty()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SqliteCredentialStore;

    fn store_with(records: &[CredentialRecord]) -> SqliteCredentialStore {
        let mut store = SqliteCredentialStore::in_memory().unwrap();
        for record in records {
            let domain = record.domain.clone().unwrap();
            store.save_credentials(&domain, record).unwrap();
        }
        store
    }

    #[test]
    fn test_match_on_domain_and_username() {
        let store = store_with(&[CredentialRecord::new("a.com", "bob", "old")]);
        let detector = ExistingPasswordMatchDetector::default();

        assert!(detector
            .already_exists(&store, &CredentialRecord::new("a.com", "bob", "new"))
            .unwrap());
        assert!(!detector
            .already_exists(&store, &CredentialRecord::new("a.com", "amy", "old"))
            .unwrap());
        assert!(!detector
            .already_exists(&store, &CredentialRecord::new("b.com", "bob", "old"))
            .unwrap());
    }

    #[test]
    fn test_usernames_are_case_sensitive() {
        let store = store_with(&[CredentialRecord::new("a.com", "Bob", "pw")]);
        let detector = ExistingPasswordMatchDetector::default();

        assert!(!detector
            .already_exists(&store, &CredentialRecord::new("a.com", "bob", "pw"))
            .unwrap());
    }

    #[test]
    fn test_password_policy() {
        let store = store_with(&[CredentialRecord::new("a.com", "bob", "old")]);
        let detector = ExistingPasswordMatchDetector::new(MatchPolicy::DomainUsernameAndPassword);

        assert!(!detector
            .already_exists(&store, &CredentialRecord::new("a.com", "bob", "new"))
            .unwrap());
        assert!(detector
            .already_exists(&store, &CredentialRecord::new("a.com", "bob", "old"))
            .unwrap());
    }

    #[test]
    fn test_missing_username_matches_empty_username() {
        let stored = CredentialRecord {
            domain: Some("a.com".to_string()),
            username: None,
            password: Some("pw".to_string()),
            ..Default::default()
        };
        let store = store_with(&[stored]);
        let detector = ExistingPasswordMatchDetector::default();

        let candidate = CredentialRecord::new("a.com", "", "other");
        assert!(detector.already_exists(&store, &candidate).unwrap());
    }

    #[test]
    fn test_record_without_domain_is_never_a_duplicate() {
        let store = store_with(&[]);
        let detector = ExistingPasswordMatchDetector::default();
        assert!(!detector
            .already_exists(&store, &CredentialRecord::default())
            .unwrap());
    }
}
