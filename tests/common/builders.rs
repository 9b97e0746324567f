//! Test builders: ergonomic constructors for raw rows and fixture files.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on I/O failure rather than returning `Result`.

use std::path::PathBuf;

use campsheet_core::{Column, RawCampRow};
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// RowBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`RawCampRow`] fixtures.
///
/// # Example
///
/// ```rust
/// let row = RowBuilder::new("Zilker Nature Camp")
///     .category("Outdoor / Nature")
///     .ages("Grades 1-5")
///     .price("$135-500 (sliding scale)")
///     .build();
/// ```
pub struct RowBuilder {
    row: RawCampRow,
}

impl RowBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            row: RawCampRow::new().with(Column::CampName, name),
        }
    }

    /// A row with no `Camp Name` cell at all.
    pub fn nameless() -> Self {
        Self {
            row: RawCampRow::new(),
        }
    }

    fn set(mut self, column: Column, value: &str) -> Self {
        self.row = self.row.with(column, value);
        self
    }

    pub fn category(self, value: &str) -> Self {
        self.set(Column::Category, value)
    }

    pub fn ages(self, value: &str) -> Self {
        self.set(Column::Ages, value)
    }

    pub fn price(self, value: &str) -> Self {
        self.set(Column::Price, value)
    }

    pub fn city(self, value: &str) -> Self {
        self.set(Column::CityArea, value)
    }

    pub fn location(self, value: &str) -> Self {
        self.set(Column::Location, value)
    }

    pub fn status(self, value: &str) -> Self {
        self.set(Column::RegistrationStatus, value)
    }

    pub fn notes(self, value: &str) -> Self {
        self.set(Column::Notes, value)
    }

    pub fn website(self, value: &str) -> Self {
        self.set(Column::Website, value)
    }

    pub fn build(self) -> RawCampRow {
        self.row
    }
}

/// Rows named after `names`, every other cell absent.
pub fn named_rows(names: &[&str]) -> Vec<RawCampRow> {
    names.iter().map(|n| RowBuilder::new(n).build()).collect()
}

// ---------------------------------------------------------------------------
// Fixture files
// ---------------------------------------------------------------------------

/// Write `contents` to `dir/file_name` and return the path.
pub fn write_fixture(dir: &TempDir, file_name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(file_name);
    std::fs::write(&path, contents).expect("write fixture file");
    path
}
