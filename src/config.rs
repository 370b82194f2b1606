// src/config.rs

//! Import configuration
//!
//! Settings are read from a TOML file. Every field has a default, so a
//! missing file or a missing section simply means default behavior.
//!
//! # Example import.toml
//!
//! ```toml
//! [normalize]
//! # Keep explicit ports as part of the site key (example.com:8443)
//! keep_port = true
//! # Treat www.example.com and example.com as the same site
//! strip_www = false
//!
//! [duplicates]
//! # Only treat a row as already saved when the password matches too
//! match_password = false
//! ```

use crate::error::{Error, Result};
use crate::import::MatchPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default path for the import configuration file
pub const DEFAULT_CONFIG_PATH: &str = "/etc/credimport/import.toml";

/// Top-level import configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    pub normalize: NormalizeConfig,
    pub duplicates: DuplicateConfig,
}

/// Domain normalization policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeConfig {
    pub keep_port: bool,
    pub strip_www: bool,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            keep_port: true,
            strip_www: false,
        }
    }
}

/// Duplicate detection policy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DuplicateConfig {
    pub match_password: bool,
}

impl DuplicateConfig {
    pub fn policy(&self) -> MatchPolicy {
        if self.match_password {
            MatchPolicy::DomainUsernameAndPassword
        } else {
            MatchPolicy::DomainAndUsername
        }
    }
}

/// Load configuration from `path`, or from the default location
///
/// An explicit path must exist. The default path is optional; when it is
/// absent the built-in defaults are used.
pub fn load_config(path: Option<&Path>) -> Result<ImportConfig> {
    match path {
        Some(path) => parse_config_file(path),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_PATH);
            if default_path.exists() {
                parse_config_file(default_path)
            } else {
                Ok(ImportConfig::default())
            }
        }
    }
}

/// Parse a configuration file
pub fn parse_config_file(path: &Path) -> Result<ImportConfig> {
    let content = std::fs::read_to_string(path)?;
    parse_config_string(&content)
}

/// Parse configuration from a TOML string
pub fn parse_config_string(content: &str) -> Result<ImportConfig> {
    toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
}
