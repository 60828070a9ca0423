//! NEO catalog loader (CSV)
//!
//! A header row, then one NEO per row. Columns used, by zero-based index:
//! 3 designation, 4 name, 7 hazardous flag, 15 diameter (km).

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::model::NearEarthObject;
use crate::observability::ObservationScope;

use super::errors::{ExtractError, ExtractResult};

pub const DESIGNATION_COLUMN: usize = 3;
pub const NAME_COLUMN: usize = 4;
pub const HAZARDOUS_COLUMN: usize = 7;
pub const DIAMETER_COLUMN: usize = 15;

/// Reads NEOs from a CSV file, in file order.
pub fn load_neos(path: impl AsRef<Path>) -> ExtractResult<Vec<NearEarthObject>> {
    let path = path.as_ref();
    let display = path.display().to_string();
    let scope = ObservationScope::with_fields("LOAD_NEOS", &[("path", display.as_str())]);

    let file = File::open(path).map_err(|e| ExtractError::io(path, e));
    let result = file.and_then(|f| read_neos(BufReader::new(f)));

    match &result {
        Ok(neos) => scope.complete(&[("count", neos.len().to_string().as_str())]),
        Err(e) => scope.fail(&e.to_string()),
    }
    result
}

/// Reads NEOs from any CSV source. The first row is a header.
pub fn read_neos<R: Read>(reader: R) -> ExtractResult<Vec<NearEarthObject>> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut neos = Vec::new();
    for (i, record) in csv.records().enumerate() {
        let record = record?;
        // 1-based, counting the header
        let row = i + 2;
        let column = |index: usize| {
            record
                .get(index)
                .ok_or(ExtractError::MissingColumn { row, column: index })
        };

        let neo = NearEarthObject::from_source(
            column(DESIGNATION_COLUMN)?,
            column(NAME_COLUMN)?,
            column(HAZARDOUS_COLUMN)?,
            column(DIAMETER_COLUMN)?,
        )
        .map_err(|source| ExtractError::InvalidRecord { row, source })?;

        neos.push(neo);
    }

    Ok(neos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "id,spkid,full_name,pdes,name,prefix,neo,pha,H,G,M1,M2,K1,K2,PC,diameter,extent,albedo\n";

    fn row(pdes: &str, name: &str, pha: &str, diameter: &str) -> String {
        format!(
            "a0,2000,\"full\",{},{},,Y,{},10.4,,,,,,,{},,0.25\n",
            pdes, name, pha, diameter
        )
    }

    #[test]
    fn test_reads_columns_by_index() {
        let data = format!(
            "{}{}{}",
            HEADER,
            row("433", "Eros", "N", "16.84"),
            row("2020 AA", "", "", "")
        );
        let neos = read_neos(data.as_bytes()).unwrap();

        assert_eq!(neos.len(), 2);
        assert_eq!(neos[0].designation(), "433");
        assert_eq!(neos[0].name(), Some("Eros"));
        assert_eq!(neos[0].diameter(), 16.84);
        assert!(!neos[0].hazardous());
        assert_eq!(neos[1].name(), None);
        assert!(neos[1].diameter().is_nan());
    }

    #[test]
    fn test_quoted_fields_with_commas() {
        let data = format!(
            "{}a0,2000,\"433 Eros (A898 PA)\",433,\"Eros, the lover\",,Y,Y,10.4,,,,,,,16.84,,0.25\n",
            HEADER
        );
        let neos = read_neos(data.as_bytes()).unwrap();
        assert_eq!(neos[0].name(), Some("Eros, the lover"));
        assert!(neos[0].hazardous());
    }

    #[test]
    fn test_short_row_reports_missing_column() {
        let data = format!("{}a0,2000,full,433,Eros\n", HEADER);
        let err = read_neos(data.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::MissingColumn { row: 2, column: 7 }
        ));
    }

    #[test]
    fn test_bad_diameter_reports_row() {
        let data = format!("{}{}{}", HEADER, row("1", "", "", "1.0"), row("2", "", "", "wide"));
        let err = read_neos(data.as_bytes()).unwrap_err();
        assert!(matches!(err, ExtractError::InvalidRecord { row: 3, .. }));
    }

    #[test]
    fn test_header_only() {
        assert!(read_neos(HEADER.as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}{}", HEADER, row("1999 RQ36", "Bennu", "Y", "0.492")).unwrap();

        let neos = load_neos(file.path()).unwrap();
        assert_eq!(neos.len(), 1);
        assert_eq!(neos[0].name(), Some("Bennu"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_neos(dir.path().join("nope.csv")).unwrap_err();
        assert_eq!(err.code(), "NEO_LOAD_IO");
    }
}
