// build.rs

use clap::{Arg, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Common argument: database path
fn db_path_arg() -> Arg {
    Arg::new("db_path")
        .short('d')
        .long("db-path")
        .value_name("PATH")
        .default_value("/var/lib/credimport/credentials.db")
        .help("Path to the database file")
}

/// Common argument: import configuration
fn config_arg() -> Arg {
    Arg::new("config")
        .short('c')
        .long("config")
        .value_name("PATH")
        .help("Import configuration file (TOML)")
}

/// Common argument: input is a data: URI
fn blob_arg() -> Arg {
    Arg::new("blob")
        .long("blob")
        .action(clap::ArgAction::SetTrue)
        .help("The file contains a data: URI rather than CSV text")
}

fn build_cli() -> Command {
    Command::new("credimport")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Credimport Contributors")
        .about("Import saved passwords from a password manager export")
        .subcommand_required(false)
        .subcommand(
            Command::new("init")
                .about("Initialize the credential database")
                .arg(db_path_arg()),
        )
        .subcommand(
            Command::new("import")
                .about("Import passwords from an export file")
                .arg(Arg::new("file").required(true).help("Path to the export file"))
                .arg(db_path_arg())
                .arg(config_arg())
                .arg(blob_arg())
                .arg(
                    Arg::new("quiet")
                        .short('q')
                        .long("quiet")
                        .action(clap::ArgAction::SetTrue)
                        .help("Do not draw a progress bar"),
                ),
        )
        .subcommand(
            Command::new("parse")
                .about("Show what an export would import, without saving anything")
                .arg(Arg::new("file").required(true).help("Path to the export file"))
                .arg(config_arg())
                .arg(blob_arg()),
        )
        .subcommand(
            Command::new("list")
                .about("List saved credentials (passwords are never shown)")
                .arg(db_path_arg())
                .arg(Arg::new("domain").long("domain").help("Only show credentials for this site"))
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(clap::ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(
            Command::new("history")
                .about("Show recent import runs")
                .arg(db_path_arg())
                .arg(
                    Arg::new("limit")
                        .short('n')
                        .long("limit")
                        .default_value("10")
                        .help("Number of runs to show"),
                ),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .required(true)
                        .value_parser(["bash", "zsh", "fish", "powershell", "elvish"])
                        .help("Shell type"),
                ),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("credimport.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
    }
}
