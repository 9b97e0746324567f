//! CSV sheet exports. The first record is the header row.

use std::path::{Path, PathBuf};

use campsheet_core::RawCampRow;
use tracing::{info, warn};

use crate::{read_file, RowSource, SourceError};

#[derive(Debug, Clone)]
pub struct CsvSheet {
    path: PathBuf,
}

impl CsvSheet {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RowSource for CsvSheet {
    fn read_rows(&self) -> Result<Vec<RawCampRow>, SourceError> {
        let text = read_file(&self.path)?;
        let rows = parse_csv(&text)?;
        info!(path = %self.path.display(), rows = rows.len(), "read csv sheet");
        Ok(rows)
    }
}

/// Parse CSV text into rows. Short rows are allowed; malformed records are
/// skipped with a warning.
pub fn parse_csv(text: &str) -> Result<Vec<RawCampRow>, SourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let mut rows = Vec::new();

    for (i, result) in reader.records().enumerate() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                warn!("skipping malformed CSV row {}: {e}", i + 2);
                continue;
            }
        };
        let row: RawCampRow = headers
            .iter()
            .zip(record.iter())
            .filter(|(header, cell)| !header.is_empty() && !cell.is_empty())
            .collect();
        if !row.is_empty() {
            rows.push(row);
        }
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use campsheet_core::Column;
    use pretty_assertions::assert_eq;

    #[test]
    fn headers_and_cells_are_trimmed() {
        let text = "Camp Name , Ages ,Price ($/wk or noted)\n  Camp Fun ,5-10,  $250 \n";
        let rows = parse_csv(text).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name(), "Camp Fun");
        assert_eq!(rows[0].get(Column::Ages), Some("5-10"));
        assert_eq!(rows[0].get(Column::Price), Some("$250"));
    }

    #[test]
    fn quoted_commas_survive() {
        let text = "Camp Name,Discounts / Notes\n\"Camp Fun\",\"Sibling discount, aftercare\"\n";
        let rows = parse_csv(text).unwrap();
        assert_eq!(rows[0].get(Column::Notes), Some("Sibling discount, aftercare"));
    }

    #[test]
    fn short_rows_and_blank_lines() {
        let text = "Camp Name,Ages,Website\nCamp Fun\n,,\nZilker,6-10,zilker.org\n";
        let rows = parse_csv(text).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 1);
        assert_eq!(rows[1].get(Column::Website), Some("zilker.org"));
    }

    #[test]
    fn reads_rows_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("camps.csv");
        std::fs::write(&path, "Camp Name,City/Area\nCamp Fun,Buda\n").unwrap();
        let rows = CsvSheet::new(&path).read_rows().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get(Column::CityArea), Some("Buda"));
    }

    #[test]
    fn empty_input_has_no_rows() {
        assert!(parse_csv("").unwrap().is_empty());
    }
}
