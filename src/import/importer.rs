// src/import/importer.rs

//! Import orchestrator
//!
//! Walks a prepared batch in input order. Each record is checked against
//! the store and either counted as a duplicate or saved; after every
//! record the running outcome is published on a watch channel so that
//! observers (including ones that subscribe late) always see the latest
//! state.

use super::duplicate::ExistingPasswordMatchDetector;
use super::outcome::{ImportOutcome, ImportStatus};
use crate::credential::CredentialRecord;
use crate::error::{Error, Result};
use crate::progress::{ProgressTracker, RecordDisposition, SilentProgress};
use crate::store::CredentialStore;
use std::sync::{Arc, Mutex};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_stream::wrappers::WatchStream;
use tracing::{debug, info, warn};

/// Persists prepared batches and publishes their progress
pub struct PasswordImporter<S> {
    store: Mutex<S>,
    detector: ExistingPasswordMatchDetector,
    status_tx: watch::Sender<Option<ImportStatus>>,
    progress: Box<dyn ProgressTracker>,
}

impl<S: CredentialStore> PasswordImporter<S> {
    pub fn new(store: S, detector: ExistingPasswordMatchDetector) -> Self {
        let (status_tx, _) = watch::channel(None);
        Self {
            store: Mutex::new(store),
            detector,
            status_tx,
            progress: Box::new(SilentProgress::new()),
        }
    }

    /// Report per-record progress to `progress` as well
    pub fn with_progress(mut self, progress: Box<dyn ProgressTracker>) -> Self {
        self.progress = progress;
        self
    }

    /// Subscribe to import status
    ///
    /// The receiver's current value is the most recent status (or `None`
    /// before the first run); later updates arrive through `changed()`.
    pub fn status(&self) -> watch::Receiver<Option<ImportStatus>> {
        self.status_tx.subscribe()
    }

    /// Import status as a stream: the latest status first, then updates
    ///
    /// A slow consumer sees the newest status rather than every one.
    pub fn status_stream(&self) -> WatchStream<Option<ImportStatus>> {
        WatchStream::new(self.status())
    }

    /// Latest published status
    pub fn last_status(&self) -> Option<ImportStatus> {
        self.status_tx.borrow().clone()
    }

    /// Run exclusive access to the underlying store
    pub fn with_store<R>(&self, f: impl FnOnce(&mut S) -> R) -> Result<R> {
        let mut store = self.lock_store()?;
        Ok(f(&mut store))
    }

    /// Import a prepared batch, one record at a time
    ///
    /// Blocks on store I/O. A store read failure ends the run: the partial
    /// outcome is published as [`ImportStatus::Aborted`] and the error is
    /// returned. Insert failures only affect their own record, which is
    /// counted in `failed`.
    pub fn import_passwords(&self, batch: &[CredentialRecord]) -> Result<ImportOutcome> {
        let mut store = self.lock_store()?;
        let mut outcome = ImportOutcome::new(batch.len());

        info!("Importing {} credentials", batch.len());
        self.progress.start(batch.len() as u64);

        for record in batch {
            let disposition = match self.detector.already_exists(&*store, record) {
                Ok(true) => {
                    outcome.duplicates.push(record.clone());
                    RecordDisposition::Duplicate
                }
                Ok(false) => self.save(&mut *store, record, &mut outcome),
                Err(e) => {
                    let reason = e.to_string();
                    warn!("Aborting import: duplicate check failed: {}", reason);
                    self.progress.finish_with_error(&reason);
                    self.publish(ImportStatus::Aborted {
                        outcome: outcome.clone(),
                        reason,
                    });
                    return Err(e);
                }
            };

            self.progress.record_processed(disposition);
            self.publish(ImportStatus::InProgress(outcome.clone()));
        }

        info!(
            "Import finished: {} saved, {} duplicates, {} failed (of {})",
            outcome.saved_ids.len(),
            outcome.duplicates.len(),
            outcome.failed.len(),
            outcome.total_count
        );
        self.progress.finish_with_message(&format!(
            "{} saved, {} duplicates, {} failed",
            outcome.saved_ids.len(),
            outcome.duplicates.len(),
            outcome.failed.len()
        ));
        self.publish(ImportStatus::Finished(outcome.clone()));

        Ok(outcome)
    }

    fn save(
        &self,
        store: &mut S,
        record: &CredentialRecord,
        outcome: &mut ImportOutcome,
    ) -> RecordDisposition {
        let Some(domain) = record.domain.as_deref().filter(|d| !d.is_empty()) else {
            warn!("Skipping credential without a domain");
            outcome.failed.push(record.clone());
            return RecordDisposition::Failed;
        };

        match store.save_credentials(domain, record) {
            Ok(Some(id)) => {
                debug!("Saved credential {} for {}", id, domain);
                outcome.saved_ids.push(id);
                RecordDisposition::Saved
            }
            Ok(None) => {
                warn!("Credential store declined credential for {}", domain);
                outcome.failed.push(record.clone());
                RecordDisposition::Failed
            }
            Err(e) => {
                warn!("Failed to save credential for {}: {}", domain, e);
                outcome.failed.push(record.clone());
                RecordDisposition::Failed
            }
        }
    }

    fn publish(&self, status: ImportStatus) {
        // send_replace keeps the value even when nobody is subscribed yet
        self.status_tx.send_replace(Some(status));
    }

    fn lock_store(&self) -> Result<std::sync::MutexGuard<'_, S>> {
        self.store
            .lock()
            .map_err(|_| Error::Store("credential store lock poisoned".to_string()))
    }
}

/// Run an import on the blocking thread pool
///
/// Progress is observed through the importer's status channel; awaiting
/// the handle yields the final outcome. Dropping the handle does not stop
/// the run.
pub fn spawn_import<S>(
    importer: Arc<PasswordImporter<S>>,
    batch: Vec<CredentialRecord>,
) -> JoinHandle<Result<ImportOutcome>>
where
    S: CredentialStore + Send + 'static,
{
    tokio::task::spawn_blocking(move || importer.import_passwords(&batch))
}
