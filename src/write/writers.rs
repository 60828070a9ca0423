//! Row-oriented (CSV) and document-oriented (JSON) result writers
//!
//! Both writers consume the result stream lazily and return the number of
//! approaches written.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serializer as _;
use serde_json::ser::PrettyFormatter;

use crate::model::{ApproachView, ROW_FIELDS};
use crate::observability::ObservationScope;

use super::errors::{WriteError, WriteResult};

/// Output file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl OutputFormat {
    /// Chooses the format from the file extension (case-insensitive)
    pub fn from_path(path: &Path) -> WriteResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("csv") => Ok(OutputFormat::Csv),
            Some("json") => Ok(OutputFormat::Json),
            _ => Err(WriteError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

/// Writes a header row and one row per approach.
pub fn write_csv<'a, W, I>(results: I, writer: W) -> WriteResult<usize>
where
    W: Write,
    I: IntoIterator<Item = ApproachView<'a>>,
{
    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv.write_record(ROW_FIELDS)?;

    let mut written = 0;
    for view in results {
        csv.serialize(view.to_row())?;
        written += 1;
    }

    csv.flush()?;
    Ok(written)
}

/// Writes a JSON list with one document per approach.
pub fn write_json<'a, W, I>(results: I, writer: W) -> WriteResult<usize>
where
    W: Write,
    I: IntoIterator<Item = ApproachView<'a>>,
{
    let mut serializer =
        serde_json::Serializer::with_formatter(writer, PrettyFormatter::with_indent(b"    "));

    let mut written = 0;
    serializer.collect_seq(results.into_iter().map(|view| {
        written += 1;
        view.serialize()
    }))?;

    let mut writer = serializer.into_inner();
    writeln!(writer)?;
    writer.flush()?;
    Ok(written)
}

/// Writes results to a CSV file.
pub fn write_to_csv<'a, I>(results: I, path: impl AsRef<Path>) -> WriteResult<usize>
where
    I: IntoIterator<Item = ApproachView<'a>>,
{
    write_file(results, path.as_ref(), OutputFormat::Csv)
}

/// Writes results to a JSON file.
pub fn write_to_json<'a, I>(results: I, path: impl AsRef<Path>) -> WriteResult<usize>
where
    I: IntoIterator<Item = ApproachView<'a>>,
{
    write_file(results, path.as_ref(), OutputFormat::Json)
}

/// Writes results to a file, choosing the format from its extension.
pub fn write_to_file<'a, I>(results: I, path: impl AsRef<Path>) -> WriteResult<usize>
where
    I: IntoIterator<Item = ApproachView<'a>>,
{
    let path = path.as_ref();
    let format = OutputFormat::from_path(path)?;
    write_file(results, path, format)
}

fn write_file<'a, I>(results: I, path: &Path, format: OutputFormat) -> WriteResult<usize>
where
    I: IntoIterator<Item = ApproachView<'a>>,
{
    let display = path.display().to_string();
    let scope = ObservationScope::with_fields(
        "WRITE_RESULTS",
        &[("format", format.as_str()), ("path", display.as_str())],
    );

    let result = File::create(path)
        .map_err(WriteError::from)
        .and_then(|file| {
            let writer = BufWriter::new(file);
            match format {
                OutputFormat::Csv => write_csv(results, writer),
                OutputFormat::Json => write_json(results, writer),
            }
        });

    match &result {
        Ok(written) => scope.complete(&[("written", written.to_string().as_str())]),
        Err(e) => scope.fail(&e.to_string()),
    }
    result
}
