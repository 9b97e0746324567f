//! Workbook JSON exports: `{ "<sheet>": [ { "<header>": <cell>, ... }, ... ] }`.

use std::path::{Path, PathBuf};

use campsheet_core::RawCampRow;
use serde_json::{Map, Value};
use tracing::info;

use crate::{read_file, RowSource, SourceError};

#[derive(Debug, Clone)]
pub struct WorkbookJson {
    path: PathBuf,
    sheet: String,
}

impl WorkbookJson {
    pub fn new(path: impl Into<PathBuf>, sheet: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            sheet: sheet.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RowSource for WorkbookJson {
    fn read_rows(&self) -> Result<Vec<RawCampRow>, SourceError> {
        let text = read_file(&self.path)?;
        let rows = parse_workbook(&text, &self.sheet)?;
        info!(path = %self.path.display(), sheet = %self.sheet, rows = rows.len(), "read workbook");
        Ok(rows)
    }
}

/// Parse one sheet out of a workbook export.
pub fn parse_workbook(text: &str, sheet: &str) -> Result<Vec<RawCampRow>, SourceError> {
    let workbook: Map<String, Value> = match serde_json::from_str(text)? {
        Value::Object(map) => map,
        _ => {
            return Err(SourceError::UnexpectedShape(
                "top level is not an object keyed by sheet name".to_string(),
            ))
        }
    };

    let Some(rows) = workbook.get(sheet) else {
        return Err(SourceError::MissingSheet {
            sheet: sheet.to_string(),
            available: workbook.keys().cloned().collect(),
        });
    };
    let Value::Array(rows) = rows else {
        return Err(SourceError::UnexpectedShape(format!(
            "sheet {sheet:?} is not an array of rows"
        )));
    };

    rows.iter()
        .enumerate()
        .map(|(i, row)| match row {
            Value::Object(cells) => Ok(row_from_cells(cells)),
            _ => Err(SourceError::UnexpectedShape(format!(
                "row {} of sheet {sheet:?} is not an object",
                i + 1
            ))),
        })
        .collect()
}

fn row_from_cells(cells: &Map<String, Value>) -> RawCampRow {
    cells
        .iter()
        .filter_map(|(header, value)| Some((header.as_str(), cell_text(value)?)))
        .collect()
}

/// Cell text, or `None` for null and blank cells.
fn cell_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::Null => return None,
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    };
    (!text.trim().is_empty()).then_some(text)
}
