// src/import/outcome.rs

//! Result shapes of an import run

use crate::credential::CredentialRecord;
use std::fmt;

/// Running or final tally of one import run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportOutcome {
    /// Identifiers the store assigned to newly saved credentials, in input order
    pub saved_ids: Vec<i64>,
    /// Records skipped because the store already held a match
    pub duplicates: Vec<CredentialRecord>,
    /// Records the store declined or failed to save
    pub failed: Vec<CredentialRecord>,
    /// Size of the batch handed to the importer; fixed for the run
    pub total_count: usize,
}

impl ImportOutcome {
    pub fn new(total_count: usize) -> Self {
        Self {
            total_count,
            ..Default::default()
        }
    }

    /// Records handled so far
    pub fn processed(&self) -> usize {
        self.saved_ids.len() + self.duplicates.len() + self.failed.len()
    }
}

/// Status published on the importer's status channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportStatus {
    /// Published after each record
    InProgress(ImportOutcome),
    /// Published once after the last record; the result to keep
    Finished(ImportOutcome),
    /// The run stopped early because the store could not be read
    Aborted {
        outcome: ImportOutcome,
        reason: String,
    },
}

impl ImportStatus {
    pub fn outcome(&self) -> &ImportOutcome {
        match self {
            ImportStatus::InProgress(outcome) | ImportStatus::Finished(outcome) => outcome,
            ImportStatus::Aborted { outcome, .. } => outcome,
        }
    }

    /// No further status follows this one
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ImportStatus::InProgress(_))
    }
}

/// What the caller shows once the import flow ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportSummary {
    Success {
        imported: usize,
        duplicates: usize,
        failed: usize,
        /// Rows found in the source before filtering
        found_in_import: usize,
    },
    /// The user left the flow before it finished
    UserCancelled { stage: String },
    /// The source could not be read or the run aborted; offer a retry
    Error,
}

impl ImportSummary {
    pub fn from_outcome(found_in_import: usize, outcome: &ImportOutcome) -> Self {
        ImportSummary::Success {
            imported: outcome.saved_ids.len(),
            duplicates: outcome.duplicates.len(),
            failed: outcome.failed.len(),
            found_in_import,
        }
    }
}

impl fmt::Display for ImportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportSummary::Success {
                imported,
                duplicates,
                failed,
                found_in_import,
            } => {
                write!(
                    f,
                    "Found {} passwords; imported {}",
                    found_in_import, imported
                )?;
                if *duplicates > 0 {
                    write!(f, ", {} already saved", duplicates)?;
                }
                if *failed > 0 {
                    write!(f, ", {} could not be saved", failed)?;
                }
                Ok(())
            }
            ImportSummary::UserCancelled { stage } => {
                write!(f, "Import cancelled ({})", stage)
            }
            ImportSummary::Error => write!(f, "Passwords could not be imported"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_accounting() {
        let mut outcome = ImportOutcome::new(4);
        assert_eq!(outcome.processed(), 0);

        outcome.saved_ids.push(1);
        outcome.duplicates.push(CredentialRecord::new("a.com", "bob", "pw"));
        outcome.failed.push(CredentialRecord::new("b.com", "amy", "pw"));
        assert_eq!(outcome.processed(), 3);
        assert_eq!(outcome.total_count, 4);
    }

    #[test]
    fn test_status_variants_share_outcome() {
        let outcome = ImportOutcome::new(1);
        let in_progress = ImportStatus::InProgress(outcome.clone());
        let finished = ImportStatus::Finished(outcome.clone());
        let aborted = ImportStatus::Aborted {
            outcome: outcome.clone(),
            reason: "store offline".to_string(),
        };

        assert!(!in_progress.is_terminal());
        assert!(finished.is_terminal());
        assert!(aborted.is_terminal());
        assert_eq!(aborted.outcome(), &outcome);
    }

    #[test]
    fn test_summary_rendering() {
        let mut outcome = ImportOutcome::new(3);
        outcome.saved_ids = vec![1, 2];
        outcome.duplicates.push(CredentialRecord::new("a.com", "bob", "pw"));

        let summary = ImportSummary::from_outcome(5, &outcome);
        assert!(matches!(summary, ImportSummary::Success { imported: 2, .. }));
        assert_eq!(
            summary.to_string(),
            "Found 5 passwords; imported 2, 1 already saved"
        );
        assert_eq!(
            ImportSummary::UserCancelled {
                stage: "importing".to_string()
            }
            .to_string(),
            "Import cancelled (importing)"
        );
        assert_eq!(ImportSummary::Error.to_string(), "Passwords could not be imported");
    }
}
