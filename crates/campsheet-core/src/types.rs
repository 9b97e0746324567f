//! Core types for campsheet-core.
//!
//! This module defines the records that flow through the pipeline: the raw
//! spreadsheet [`RawCampRow`], the normalised [`Camp`], and the closed
//! enumerations its classified fields are drawn from.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Raw input
// ---------------------------------------------------------------------------

/// Spreadsheet columns the normalizer reads. Any other column in a row is
/// carried along but ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    CampName,
    Category,
    Ages,
    Price,
    CityArea,
    Location,
    RegistrationStatus,
    Notes,
    Website,
}

impl Column {
    pub const ALL: [Column; 9] = [
        Column::CampName,
        Column::Category,
        Column::Ages,
        Column::Price,
        Column::CityArea,
        Column::Location,
        Column::RegistrationStatus,
        Column::Notes,
        Column::Website,
    ];

    /// Header label as it appears in the source workbook.
    pub fn label(self) -> &'static str {
        match self {
            Column::CampName => "Camp Name",
            Column::Category => "Category",
            Column::Ages => "Ages",
            Column::Price => "Price ($/wk or noted)",
            Column::CityArea => "City/Area",
            Column::Location => "Location / Address",
            Column::RegistrationStatus => "Registration Status",
            Column::Notes => "Discounts / Notes",
            Column::Website => "Website",
        }
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One spreadsheet row: column label → cell text.
///
/// A missing key means the cell was absent. Row sources drop empty cells, so
/// an empty string only reaches the normalizer when a caller builds the row
/// by hand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawCampRow {
    cells: BTreeMap<String, String>,
}

impl RawCampRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for a known column.
    pub fn with(mut self, column: Column, value: impl Into<String>) -> Self {
        self.cells.insert(column.label().to_string(), value.into());
        self
    }

    /// Insert a cell under an arbitrary header label.
    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.cells.insert(label.into(), value.into());
    }

    pub fn get(&self, column: Column) -> Option<&str> {
        self.get_label(column.label())
    }

    pub fn get_label(&self, label: &str) -> Option<&str> {
        self.cells.get(label).map(String::as_str)
    }

    /// The `Camp Name` cell, or `""` when the row has none.
    pub fn name(&self) -> &str {
        self.get(Column::CampName).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawCampRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

macro_rules! str_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire name, identical to the serde representation.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum! {
    /// Camp category. Unrecognised source categories land in `MultiActivity`.
    Category {
        AcademicStem => "academic_stem",
        ArtsMusic => "arts_music",
        PerformingArts => "performing_arts",
        Sports => "sports",
        NatureOutdoor => "nature_outdoor",
        FaithVbs => "faith_vbs",
        Overnight => "overnight",
        AcademicWriting => "academic_writing",
        SpecialNeeds => "special_needs",
        Specialty => "specialty",
        MultiActivity => "multi_activity",
    }
}

str_enum! {
    /// Coarse metro region derived from the free-text city/area column.
    Region {
        AustinMetro => "austin_metro",
        AustinChurchVbs => "austin_church_vbs",
        NorthSuburbs => "north_suburbs",
        SouthSuburbs => "south_suburbs",
        HillCountry => "hill_country",
    }
}

str_enum! {
    CampType {
        Day => "day",
        Overnight => "overnight",
        Both => "both",
    }
}

str_enum! {
    ScheduleType {
        FullDay => "full_day",
        HalfDayAm => "half_day_am",
        HalfDayPm => "half_day_pm",
        Flexible => "flexible",
    }
}

str_enum! {
    RegistrationStatus {
        Open => "open",
        OpensSoon => "opens_soon",
        Waitlist => "waitlist",
        Closed => "closed",
        Unknown => "unknown",
    }
}

// ---------------------------------------------------------------------------
// Structured output
// ---------------------------------------------------------------------------

/// Weekdays every imported camp runs on.
pub const WEEKDAYS: [&str; 5] = ["Mon", "Tue", "Wed", "Thu", "Fri"];

/// Duration recorded for every imported camp.
pub const DEFAULT_DURATION: &str = "1 week";

/// A normalised camp record, derived from exactly one non-duplicate
/// [`RawCampRow`].
///
/// `ages_min <= ages_max` and `price_min <= price_max` are expected but not
/// enforced; see [`crate::quality`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camp {
    /// Sequential id, 1-based, unique within a single run only.
    pub id: u32,
    pub name: String,
    /// URL-safe form of `name`. Not guaranteed unique.
    pub slug: String,
    pub category: Category,
    pub ages_min: u32,
    pub ages_max: u32,
    pub duration: String,
    pub days_of_week: Vec<String>,
    pub location_name: Option<String>,
    pub address: Option<String>,
    pub city: String,
    pub state: String,
    /// `None` together with `price_max == None` means "contact for pricing".
    pub price_min: Option<u32>,
    pub price_max: Option<u32>,
    pub price_note: String,
    pub camp_type: CampType,
    pub schedule_type: ScheduleType,
    pub region: Region,
    pub website: Option<String>,
    pub registration_status: RegistrationStatus,
    pub registration_opens_date: Option<NaiveDate>,
    pub fills_fast: bool,
    /// Raw `Discounts / Notes` passthrough.
    pub notes: Option<String>,
    /// Deduplicated, in first-seen order.
    pub tags: Vec<String>,
    pub is_active: bool,
}
