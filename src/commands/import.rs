// src/commands/import.rs

//! Import CLI commands
//!
//! `import` reads an export, saves what is new and records the run;
//! `parse` stops after preparing the batch and only reports it.

use super::progress::ImportProgressBar;
use anyhow::{Context, Result};
use credimport::db::models::ImportRun;
use credimport::db::paths::resolve_db_path;
use credimport::{
    CsvPasswordImporter, ExistingPasswordMatchDetector, ImportOutcome, ImportSummary,
    LogProgress, ParseResult, PasswordImporter, SqliteCredentialStore, spawn_import,
};
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use tokio_stream::StreamExt;
use tracing::{info, warn};

/// Import passwords from an export file into the credential database
///
/// Ctrl-C records the run as cancelled with the counts reached so far and
/// exits with status 130. Credentials saved before the interrupt stay
/// saved; the import thread is stopped by the exit.
pub async fn cmd_import(
    file: &Path,
    db_path: &str,
    config_path: Option<&Path>,
    blob: bool,
    quiet: bool,
) -> Result<()> {
    let config = credimport::load_config(config_path)
        .context("Failed to load import configuration")?;
    let db_path = resolve_db_path(db_path).to_string_lossy().into_owned();
    let store = SqliteCredentialStore::open(&db_path)
        .with_context(|| format!("Failed to open credential database {}", db_path))?;

    let reader = CsvPasswordImporter::from_config(&config);
    let (found_in_source, records) = match read_export(&reader, file, blob).await {
        ParseResult::Success {
            found_in_source,
            records,
        } => (found_in_source, records),
        ParseResult::Error(reason) => {
            println!("{}", ImportSummary::Error);
            anyhow::bail!("Could not read {}: {}", file.display(), reason);
        }
    };

    info!(
        "{} rows in {}, {} to import",
        found_in_source,
        file.display(),
        records.len()
    );

    let show_bar = !quiet && std::io::stderr().is_terminal();
    let mut importer = PasswordImporter::new(
        store,
        ExistingPasswordMatchDetector::new(config.duplicates.policy()),
    );
    if !show_bar {
        importer = importer.with_progress(Box::new(LogProgress::new("import")));
    }
    let importer = Arc::new(importer);

    let source = source_label(file, blob);
    let total = records.len();
    let bar = show_bar.then(|| ImportProgressBar::new(total as u64));
    let mut status = importer.status_stream();
    let handle = spawn_import(Arc::clone(&importer), records);

    let watch_status = async {
        while let Some(update) = status.next().await {
            let Some(update) = update else { continue };
            if let Some(bar) = &bar {
                bar.update(&update);
            }
            if update.is_terminal() {
                break;
            }
        }
    };

    tokio::select! {
        _ = watch_status => {}
        _ = tokio::signal::ctrl_c() => {
            if let Some(bar) = &bar {
                bar.abandon("cancelled");
            }
            warn!("Import interrupted");

            let partial = importer
                .last_status()
                .map(|status| status.outcome().clone())
                .unwrap_or_else(|| ImportOutcome::new(total));
            let mut run = ImportRun::from_outcome(&source, found_in_source, &partial);
            run.cancelled = true;

            // The import thread still holds the store connection
            let conn = credimport::db::open(&db_path)?;
            run.insert(&conn).context("Failed to record cancelled import run")?;

            println!("{}", ImportSummary::UserCancelled { stage: "importing".to_string() });
            // spawn_blocking work cannot be aborted, and runtime shutdown would wait for it
            std::process::exit(130);
        }
    }

    let outcome = match handle.await.context("Import task failed to complete")? {
        Ok(outcome) => outcome,
        Err(e) => {
            println!("{}", ImportSummary::Error);
            return Err(e).context("Import aborted");
        }
    };

    let mut run = ImportRun::from_outcome(&source, found_in_source, &outcome);
    importer
        .with_store(|store| run.insert(store.connection()))?
        .context("Failed to record import run")?;

    println!("{}", ImportSummary::from_outcome(found_in_source, &outcome));
    for record in &outcome.failed {
        println!(
            "  not saved: {} ({})",
            record.domain.as_deref().unwrap_or("<no site>"),
            record.username_or_empty()
        );
    }

    Ok(())
}

/// Show what an export would import, without touching the database
pub async fn cmd_parse(file: &Path, config_path: Option<&Path>, blob: bool) -> Result<()> {
    let config = credimport::load_config(config_path)
        .context("Failed to load import configuration")?;
    let reader = CsvPasswordImporter::from_config(&config);

    let (found_in_source, records) = match read_export(&reader, file, blob).await {
        ParseResult::Success {
            found_in_source,
            records,
        } => (found_in_source, records),
        ParseResult::Error(reason) => {
            anyhow::bail!("Could not read {}: {}", file.display(), reason);
        }
    };

    println!(
        "Found {} rows; {} would be imported",
        found_in_source,
        records.len()
    );
    for record in &records {
        print!(
            "  {} {}",
            record.domain.as_deref().unwrap_or_default(),
            record.username_or_empty()
        );
        if let Some(title) = record.title.as_deref()
            && !title.is_empty()
        {
            print!(" [{}]", title);
        }
        println!();
    }

    Ok(())
}

async fn read_export(reader: &CsvPasswordImporter, file: &Path, blob: bool) -> ParseResult {
    if !blob {
        return reader.read_csv_file_async(file).await;
    }

    match tokio::fs::read_to_string(file).await {
        Ok(uri) => reader.read_csv_blob(uri.trim()),
        Err(e) => ParseResult::Error(e.to_string()),
    }
}

fn source_label(file: &Path, blob: bool) -> String {
    if blob {
        format!("blob:{}", file.display())
    } else {
        file.display().to_string()
    }
}
