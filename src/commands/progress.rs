// src/commands/progress.rs
//! Terminal progress display for imports
//!
//! Draws a single bar from the importer's status channel, with running
//! saved/duplicate counts in the message.

use credimport::{ImportOutcome, ImportStatus};
use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar driven by import status updates
pub struct ImportProgressBar {
    bar: ProgressBar,
}

impl ImportProgressBar {
    pub fn new(total: u64) -> Self {
        let bar = ProgressBar::new(total);
        let style = ProgressStyle::default_bar()
            .template("Importing ({pos}/{len}) [{bar:40.green/dim}] {percent}% {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-");
        bar.set_style(style);
        Self { bar }
    }

    /// Reflect the latest status
    pub fn update(&self, status: &ImportStatus) {
        let outcome = status.outcome();
        self.bar.set_position(outcome.processed() as u64);
        self.bar.set_message(counts(outcome));

        match status {
            ImportStatus::InProgress(_) => {}
            ImportStatus::Finished(_) => self.bar.finish_with_message(counts(outcome)),
            ImportStatus::Aborted { reason, .. } => {
                self.bar.abandon_with_message(format!("aborted: {}", reason))
            }
        }
    }

    /// Stop drawing, leaving the bar where it is
    pub fn abandon(&self, message: &str) {
        self.bar.abandon_with_message(message.to_string());
    }
}

fn counts(outcome: &ImportOutcome) -> String {
    format!(
        "{} saved, {} duplicates, {} failed",
        outcome.saved_ids.len(),
        outcome.duplicates.len(),
        outcome.failed.len()
    )
}
