// src/cli.rs
//! CLI definitions for credimport
//!
//! This module contains all command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use credimport::db::paths::DEFAULT_DB_PATH;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "credimport")]
#[command(author = "Credimport Contributors")]
#[command(version)]
#[command(about = "Import saved passwords from a password manager export", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the credential database
    Init {
        /// Path to the database file
        #[arg(short, long, default_value = DEFAULT_DB_PATH)]
        db_path: String,
    },

    /// Import passwords from an export file
    ///
    /// The file is a CSV export (name,url,username,password,note). With
    /// --blob it instead holds a data: URI as delivered by the browser.
    Import {
        /// Path to the export file
        file: PathBuf,

        /// Path to the database file
        #[arg(short, long, default_value = DEFAULT_DB_PATH)]
        db_path: String,

        /// Import configuration file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// The file contains a data: URI rather than CSV text
        #[arg(long)]
        blob: bool,

        /// Do not draw a progress bar
        #[arg(short, long)]
        quiet: bool,
    },

    /// Show what an export would import, without saving anything
    Parse {
        /// Path to the export file
        file: PathBuf,

        /// Import configuration file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// The file contains a data: URI rather than CSV text
        #[arg(long)]
        blob: bool,
    },

    /// List saved credentials (passwords are never shown)
    List {
        /// Path to the database file
        #[arg(short, long, default_value = DEFAULT_DB_PATH)]
        db_path: String,

        /// Only show credentials for this site
        #[arg(long)]
        domain: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show recent import runs
    History {
        /// Path to the database file
        #[arg(short, long, default_value = DEFAULT_DB_PATH)]
        db_path: String,

        /// Number of runs to show
        #[arg(short = 'n', long, default_value_t = 10)]
        limit: usize,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
