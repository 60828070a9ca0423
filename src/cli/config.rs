//! Configuration file (`neodb.json`)
//!
//! Every key is optional:
//!
//! ```json
//! { "neo_file": "data/neos.csv", "cad_file": "data/cad.json",
//!   "strict_designations": true, "log_level": "warn" }
//! ```
//!
//! Precedence: command-line option, then config file, then default.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::database::LinkOptions;
use crate::observability::Severity;

use super::args::Cli;
use super::errors::{CliError, CliResult};

/// Config file read when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "neodb.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// NEO catalog (CSV)
    #[serde(default = "default_neo_file")]
    pub neo_file: PathBuf,

    /// Close approach data (JSON)
    #[serde(default = "default_cad_file")]
    pub cad_file: PathBuf,

    /// Duplicate designations are an error when set, otherwise the last one wins
    #[serde(default = "default_strict_designations")]
    pub strict_designations: bool,

    /// Minimum log severity
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_neo_file() -> PathBuf {
    PathBuf::from("data/neos.csv")
}
fn default_cad_file() -> PathBuf {
    PathBuf::from("data/cad.json")
}
fn default_strict_designations() -> bool {
    true
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            neo_file: default_neo_file(),
            cad_file: default_cad_file(),
            strict_designations: default_strict_designations(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Config for a parsed command line.
    ///
    /// A missing `neodb.json` in the working directory falls back to
    /// defaults; a missing file named with `--config` is an error.
    pub fn resolve(cli: &Cli) -> CliResult<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => {
                let path = Path::new(DEFAULT_CONFIG_PATH);
                if path.exists() {
                    Self::load(path)?
                } else {
                    Self::default()
                }
            }
        };

        if let Some(neo_file) = &cli.neofile {
            config.neo_file = neo_file.clone();
        }
        if let Some(cad_file) = &cli.cadfile {
            config.cad_file = cad_file.clone();
        }
        if let Some(level) = cli.log_level {
            config.log_level = level.as_str().to_ascii_lowercase();
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.neo_file.as_os_str().is_empty() {
            return Err(CliError::config_error("neo_file must not be empty"));
        }

        if self.cad_file.as_os_str().is_empty() {
            return Err(CliError::config_error("cad_file must not be empty"));
        }

        self.severity()?;

        Ok(())
    }

    /// Parsed `log_level`
    pub fn severity(&self) -> CliResult<Severity> {
        self.log_level.parse().map_err(|_| {
            CliError::config_error(format!(
                "Invalid log_level: '{}'. Expected trace, info, warn, error or fatal.",
                self.log_level
            ))
        })
    }

    pub fn link_options(&self) -> LinkOptions {
        LinkOptions {
            strict_designations: self.strict_designations,
        }
    }
}
