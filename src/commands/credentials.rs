// src/commands/credentials.rs

//! Credential database CLI commands

use anyhow::{Context, Result};
use credimport::db::models::{ImportRun, StoredCredential};
use credimport::db::paths::resolve_db_path;
use tracing::info;

/// Create the credential database, or upgrade an existing one
pub fn cmd_init(db_path: &str) -> Result<()> {
    let db_path = resolve_db_path(db_path);
    let db_path = db_path.to_string_lossy();

    credimport::db::init(&db_path)
        .with_context(|| format!("Failed to initialize database at {}", db_path))?;

    let conn = credimport::db::open(&db_path)?;
    let saved = StoredCredential::count(&conn)?;

    info!("Database ready at {}", db_path);
    println!(
        "Initialized credential database at {} ({} saved credentials)",
        db_path, saved
    );
    Ok(())
}

/// List saved credentials; passwords are never printed
pub fn cmd_list(db_path: &str, domain: Option<&str>, json: bool) -> Result<()> {
    let db_path = resolve_db_path(db_path);
    let conn = credimport::db::open(&db_path.to_string_lossy())?;

    let credentials = match domain {
        Some(domain) => StoredCredential::find_by_domain(&conn, domain)?,
        None => StoredCredential::list_all(&conn)?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&credentials)?);
        return Ok(());
    }

    if credentials.is_empty() {
        println!("No saved credentials.");
        println!("\nUse 'credimport import <file>' to import an export.");
        return Ok(());
    }

    println!("Saved credentials ({}):", credentials.len());
    for credential in &credentials {
        print!(
            "  [{}] {} {}",
            credential.id.unwrap_or(0),
            credential.domain,
            credential.username.as_deref().unwrap_or("<no username>")
        );
        if let Some(title) = &credential.title
            && !title.is_empty()
        {
            print!(" - {}", title);
        }
        println!();
    }

    Ok(())
}

/// Show the most recent import runs
pub fn cmd_history(db_path: &str, limit: usize) -> Result<()> {
    let db_path = resolve_db_path(db_path);
    let conn = credimport::db::open(&db_path.to_string_lossy())?;

    let runs = ImportRun::list_recent(&conn, limit)?;
    if runs.is_empty() {
        println!("No imports recorded.");
        return Ok(());
    }

    println!("Recent imports:");
    for run in &runs {
        print!(
            "  [{}] {} {}: found {}, imported {}, {} duplicates, {} failed",
            run.id.unwrap_or(0),
            run.finished_at.as_deref().unwrap_or("-"),
            run.source,
            run.found_in_source,
            run.saved_count,
            run.duplicate_count,
            run.failed_count
        );
        if run.cancelled {
            let processed = run.saved_count + run.duplicate_count + run.failed_count;
            print!(" (cancelled after {} of {})", processed, run.total_count);
        }
        println!();
    }

    Ok(())
}
