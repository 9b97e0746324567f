//! campsheet-sources: spreadsheet row sources for campsheet.
//!
//! Each source reads one sheet of a spreadsheet export and yields
//! [`campsheet_core::RawCampRow`]s: header label → non-empty cell text.

use std::path::{Path, PathBuf};

use campsheet_core::RawCampRow;

pub mod delimited;
pub mod workbook;

pub use delimited::{parse_csv, CsvSheet};
pub use workbook::{parse_workbook, WorkbookJson};

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid workbook JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("sheet {sheet:?} not found (available: {})", .available.join(", "))]
    MissingSheet { sheet: String, available: Vec<String> },
    #[error("unexpected workbook shape: {0}")]
    UnexpectedShape(String),
    #[error("unsupported input {0:?}: expected a .json or .csv file")]
    UnsupportedExtension(PathBuf),
}

/// Trait implemented by each row source.
pub trait RowSource {
    /// Read every data row, in sheet order.
    fn read_rows(&self) -> Result<Vec<RawCampRow>, SourceError>;
}

/// Pick a source for `path` by extension. `sheet` is only used by workbook
/// JSON exports.
pub fn open_source(path: &Path, sheet: &str) -> Result<Box<dyn RowSource>, SourceError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("json") => Ok(Box::new(WorkbookJson::new(path, sheet))),
        Some("csv") => Ok(Box::new(CsvSheet::new(path))),
        _ => Err(SourceError::UnsupportedExtension(path.to_path_buf())),
    }
}

pub(crate) fn read_file(path: &Path) -> Result<String, SourceError> {
    std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })
}
