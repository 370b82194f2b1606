// src/commands/mod.rs
//! Command handlers for the credimport CLI

mod credentials;
mod import;
pub mod progress;

pub use credentials::{cmd_history, cmd_init, cmd_list};
pub use import::{cmd_import, cmd_parse};
