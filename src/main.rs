// src/main.rs

mod cli;
mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init { db_path }) => commands::cmd_init(&db_path),

        Some(Commands::Import {
            file,
            db_path,
            config,
            blob,
            quiet,
        }) => commands::cmd_import(&file, &db_path, config.as_deref(), blob, quiet).await,

        Some(Commands::Parse { file, config, blob }) => {
            commands::cmd_parse(&file, config.as_deref(), blob).await
        }

        Some(Commands::List {
            db_path,
            domain,
            json,
        }) => commands::cmd_list(&db_path, domain.as_deref(), json),

        Some(Commands::History { db_path, limit }) => commands::cmd_history(&db_path, limit),

        Some(Commands::Completions { shell }) => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "credimport",
                &mut std::io::stdout(),
            );
            Ok(())
        }

        None => {
            Cli::command().print_help()?;
            println!();
            Ok(())
        }
    }
}
