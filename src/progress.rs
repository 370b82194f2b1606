// src/progress.rs

//! Progress tracking for import runs
//!
//! The importer reports every processed record to a [`ProgressTracker`].
//! Implementations cover the common output modes:
//! - `LogProgress`: logs progress to tracing
//! - `SilentProgress`: no-op for embedded or quiet use
//! - `CallbackProgress`: forwards events to a closure (GUI integration)
//!
//! The status channel on [`crate::import::PasswordImporter`] carries the
//! full outcome; trackers only see counts.

use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{info, warn};

/// What happened to a single record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordDisposition {
    Saved,
    Duplicate,
    Failed,
}

/// Core trait for progress tracking
///
/// Implementations must be thread-safe; an import may run on a blocking
/// worker thread while the tracker is shared with the caller.
pub trait ProgressTracker: Send + Sync {
    /// A run over `total` records is starting
    fn start(&self, total: u64);

    /// One record has been handled
    fn record_processed(&self, disposition: RecordDisposition);

    /// Finish progress successfully with a message
    fn finish_with_message(&self, message: &str);

    /// Finish progress with an error message
    fn finish_with_error(&self, message: &str);
}

/// Silent progress tracker (no-op)
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentProgress;

impl SilentProgress {
    pub fn new() -> Self {
        Self
    }
}

impl ProgressTracker for SilentProgress {
    fn start(&self, _total: u64) {}

    fn record_processed(&self, _disposition: RecordDisposition) {}

    fn finish_with_message(&self, _message: &str) {}

    fn finish_with_error(&self, _message: &str) {}
}

/// Logging progress tracker
///
/// Logs at info level roughly every tenth of the run, with running
/// saved/duplicate/failed counts.
#[derive(Debug)]
pub struct LogProgress {
    name: String,
    position: AtomicU64,
    length: AtomicU64,
    saved: AtomicU64,
    duplicates: AtomicU64,
    failed: AtomicU64,
}

impl LogProgress {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: AtomicU64::new(0),
            length: AtomicU64::new(0),
            saved: AtomicU64::new(0),
            duplicates: AtomicU64::new(0),
            failed: AtomicU64::new(0),
        }
    }

    fn log_interval(&self) -> u64 {
        std::cmp::max(1, self.length.load(Ordering::Relaxed) / 10)
    }
}

impl ProgressTracker for LogProgress {
    fn start(&self, total: u64) {
        self.length.store(total, Ordering::Relaxed);
        self.position.store(0, Ordering::Relaxed);
        self.saved.store(0, Ordering::Relaxed);
        self.duplicates.store(0, Ordering::Relaxed);
        self.failed.store(0, Ordering::Relaxed);
        info!("{}: importing {} credentials", self.name, total);
    }

    fn record_processed(&self, disposition: RecordDisposition) {
        match disposition {
            RecordDisposition::Saved => self.saved.fetch_add(1, Ordering::Relaxed),
            RecordDisposition::Duplicate => self.duplicates.fetch_add(1, Ordering::Relaxed),
            RecordDisposition::Failed => self.failed.fetch_add(1, Ordering::Relaxed),
        };

        let new_pos = self.position.fetch_add(1, Ordering::Relaxed) + 1;
        let length = self.length.load(Ordering::Relaxed);
        if length > 0 && new_pos % self.log_interval() == 0 {
            info!(
                "{}: {}% ({}/{}; {} saved, {} duplicates, {} failed)",
                self.name,
                (new_pos * 100) / length,
                new_pos,
                length,
                self.saved.load(Ordering::Relaxed),
                self.duplicates.load(Ordering::Relaxed),
                self.failed.load(Ordering::Relaxed),
            );
        }
    }

    fn finish_with_message(&self, message: &str) {
        info!("{}: {}", self.name, message);
    }

    fn finish_with_error(&self, message: &str) {
        warn!("{}: ERROR - {}", self.name, message);
    }
}

/// Events emitted by callback progress tracker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    Started { total: u64 },
    Record {
        current: u64,
        total: u64,
        disposition: RecordDisposition,
    },
    Finished(String),
    Error(String),
}

/// Callback-based progress tracker
///
/// Calls a user-provided function on every progress update.
pub struct CallbackProgress<F>
where
    F: Fn(ProgressEvent) + Send + Sync,
{
    callback: F,
    position: AtomicU64,
    length: AtomicU64,
}

impl<F> CallbackProgress<F>
where
    F: Fn(ProgressEvent) + Send + Sync,
{
    pub fn new(callback: F) -> Self {
        Self {
            callback,
            position: AtomicU64::new(0),
            length: AtomicU64::new(0),
        }
    }
}

impl<F> ProgressTracker for CallbackProgress<F>
where
    F: Fn(ProgressEvent) + Send + Sync,
{
    fn start(&self, total: u64) {
        self.length.store(total, Ordering::Relaxed);
        self.position.store(0, Ordering::Relaxed);
        (self.callback)(ProgressEvent::Started { total });
    }

    fn record_processed(&self, disposition: RecordDisposition) {
        let current = self.position.fetch_add(1, Ordering::Relaxed) + 1;
        (self.callback)(ProgressEvent::Record {
            current,
            total: self.length.load(Ordering::Relaxed),
            disposition,
        });
    }

    fn finish_with_message(&self, message: &str) {
        (self.callback)(ProgressEvent::Finished(message.to_string()));
    }

    fn finish_with_error(&self, message: &str) {
        (self.callback)(ProgressEvent::Error(message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_log_progress_handles_empty_and_restarted_runs() {
        let progress = LogProgress::new("test");
        progress.start(0);
        progress.record_processed(RecordDisposition::Saved);
        progress.finish_with_message("done");

        progress.start(20);
        for _ in 0..20 {
            progress.record_processed(RecordDisposition::Duplicate);
        }
        progress.finish_with_error("store offline");
    }

    #[test]
    fn test_callback_progress_restarts_count() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let events_clone = events.clone();
        let progress = CallbackProgress::new(move |event| {
            events_clone.lock().unwrap().push(event);
        });

        progress.start(1);
        progress.record_processed(RecordDisposition::Saved);
        progress.start(1);
        progress.record_processed(RecordDisposition::Duplicate);

        let captured = events.lock().unwrap();
        assert_eq!(
            captured[3],
            ProgressEvent::Record {
                current: 1,
                total: 1,
                disposition: RecordDisposition::Duplicate,
            }
        );
    }

    #[test]
    fn test_callback_progress() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let events_clone = events.clone();

        let progress = CallbackProgress::new(move |event| {
            events_clone.lock().unwrap().push(event);
        });

        progress.start(2);
        progress.record_processed(RecordDisposition::Saved);
        progress.record_processed(RecordDisposition::Failed);
        progress.finish_with_message("done");

        let captured = events.lock().unwrap();
        assert_eq!(captured.len(), 4);
        assert_eq!(captured[0], ProgressEvent::Started { total: 2 });
        assert_eq!(
            captured[2],
            ProgressEvent::Record {
                current: 2,
                total: 2,
                disposition: RecordDisposition::Failed,
            }
        );
        assert!(matches!(&captured[3], ProgressEvent::Finished(m) if m == "done"));
    }
}
