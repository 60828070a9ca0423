//! Close approach loader (JSON)
//!
//! Document shape: `{ "data": [[...], ...] }`. Tuple positions used:
//! 0 designation, 3 calendar time, 4 distance (au), 7 velocity (km/s).
//! Values may be JSON strings or numbers; other top-level keys are ignored.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::model::CloseApproach;
use crate::observability::ObservationScope;

use super::errors::{ExtractError, ExtractResult};

pub const DESIGNATION_FIELD: usize = 0;
pub const TIME_FIELD: usize = 3;
pub const DISTANCE_FIELD: usize = 4;
pub const VELOCITY_FIELD: usize = 7;

#[derive(Debug, Deserialize)]
struct CadDocument {
    data: Vec<Vec<Value>>,
}

/// Reads close approaches from a JSON file, in document order.
pub fn load_approaches(path: impl AsRef<Path>) -> ExtractResult<Vec<CloseApproach>> {
    let path = path.as_ref();
    let display = path.display().to_string();
    let scope = ObservationScope::with_fields("LOAD_APPROACHES", &[("path", display.as_str())]);

    let file = File::open(path).map_err(|e| ExtractError::io(path, e));
    let result = file.and_then(|f| read_approaches(BufReader::new(f)));

    match &result {
        Ok(approaches) => scope.complete(&[("count", approaches.len().to_string().as_str())]),
        Err(e) => scope.fail(&e.to_string()),
    }
    result
}

/// Reads close approaches from any JSON source.
pub fn read_approaches<R: Read>(reader: R) -> ExtractResult<Vec<CloseApproach>> {
    let document: CadDocument = serde_json::from_reader(reader)?;

    document
        .data
        .iter()
        .enumerate()
        .map(|(row, tuple)| {
            let field = |index: usize| field_text(tuple, row, index);

            CloseApproach::from_source(
                &field(DESIGNATION_FIELD)?,
                &field(TIME_FIELD)?,
                &field(DISTANCE_FIELD)?,
                &field(VELOCITY_FIELD)?,
            )
            .map_err(|source| ExtractError::InvalidRecord { row, source })
        })
        .collect()
}

/// Text of one tuple position; numbers are rendered as written.
fn field_text(tuple: &[Value], row: usize, column: usize) -> ExtractResult<String> {
    match tuple.get(column) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(_) => Err(ExtractError::UnexpectedValue { row, column }),
        None => Err(ExtractError::MissingColumn { row, column }),
    }
}
