//! CLI module for neodb
//!
//! Provides command-line interface for:
//! - inspect: Look up one NEO by designation or name
//! - query: Stream close approaches matching filters to stdout or a file

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command, InspectArgs, InspectTarget, QueryArgs};
pub use commands::{inspect, open_database, query, run, run_command, DEFAULT_PRINT_LIMIT};
pub use config::{Config, DEFAULT_CONFIG_PATH};
pub use errors::{CliError, CliErrorCode, CliResult};
