//! Result writers
//!
//! - Row-oriented: CSV with a fixed header, one row per approach
//! - Document-oriented: a JSON list of nested approach documents
//!
//! `write_to_file` picks the format from the output file's extension.

mod errors;
mod writers;

pub use errors::{WriteError, WriteResult};
pub use writers::{
    write_csv, write_json, write_to_csv, write_to_file, write_to_json, OutputFormat,
};
