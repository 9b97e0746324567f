//! Normalizer: turns raw spreadsheet rows into structured [`Camp`] records.
//!
//! Each non-duplicate row is turned into a [`Draft`] independently of every
//! other row. Ids are handed out afterwards in a single sequential pass, so
//! the per-row work could be split across threads without changing the
//! output.

use tracing::debug;

use crate::classify::{classify_camp_type, classify_category, classify_region};
use crate::config::NormalizeConfig;
use crate::matchers::{parse_ages_traced, parse_opens_date, parse_prices_traced, parse_status_traced};
use crate::names::{clean_name, derive_city, format_website, is_duplicate, slugify};
use crate::tags::derive_tags;
use crate::types::{Camp, Column, RawCampRow, ScheduleType, DEFAULT_DURATION, WEEKDAYS};

/// A cell that matched none of its matcher's rules and got the field default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fallback {
    pub camp_id: u32,
    pub field: Column,
    pub text: String,
}

/// Everything a run produced: the records plus what was skipped or guessed.
#[derive(Debug, Clone, Default)]
pub struct NormalizeReport {
    pub camps: Vec<Camp>,
    /// Raw names of rows dropped as cross-reference duplicates.
    pub duplicates: Vec<String>,
    pub fallbacks: Vec<Fallback>,
}

/// A normalised row still waiting for its id.
#[derive(Debug, Clone)]
pub struct Draft {
    camp: Camp,
    fallbacks: Vec<(Column, String)>,
}

impl Draft {
    /// The record as it will be emitted, with `id` still 0.
    pub fn camp(&self) -> &Camp {
        &self.camp
    }

    /// Fields that fell back to their default, with the cell text.
    pub fn fallbacks(&self) -> &[(Column, String)] {
        &self.fallbacks
    }

    fn into_camp(self, id: u32) -> Camp {
        Camp { id, ..self.camp }
    }
}

/// Row → [`Camp`] pipeline for one planning year.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    config: NormalizeConfig,
}

impl Normalizer {
    pub fn new(config: NormalizeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NormalizeConfig {
        &self.config
    }

    /// Normalise `rows` in order, dropping duplicate-marked rows.
    pub fn normalize(&self, rows: &[RawCampRow]) -> Vec<Camp> {
        self.normalize_report(rows).camps
    }

    /// Like [`Normalizer::normalize`], also reporting skipped duplicates and
    /// fields that fell back to their default.
    pub fn normalize_report(&self, rows: &[RawCampRow]) -> NormalizeReport {
        let mut report = NormalizeReport::default();
        let mut drafts = Vec::with_capacity(rows.len());

        for row in rows {
            let name = row.name();
            if is_duplicate(name) {
                debug!(name, "skipping cross-reference row");
                report.duplicates.push(name.to_string());
                continue;
            }
            drafts.push(self.draft(row));
        }

        for (id, draft) in (1u32..).zip(drafts) {
            report
                .fallbacks
                .extend(draft.fallbacks.iter().map(|(field, text)| Fallback {
                    camp_id: id,
                    field: *field,
                    text: text.clone(),
                }));
            report.camps.push(draft.into_camp(id));
        }

        debug!(
            camps = report.camps.len(),
            duplicates = report.duplicates.len(),
            fallbacks = report.fallbacks.len(),
            "normalized rows"
        );
        report
    }

    /// Normalise a single row. Does not check for the duplicate marker; the
    /// caller decides whether the row belongs in the output.
    pub fn draft(&self, row: &RawCampRow) -> Draft {
        let raw_name = row.get(Column::CampName);
        let name = clean_name(raw_name.unwrap_or_default());
        let source_category = row.get(Column::Category);
        let city_area = present(row, Column::CityArea);
        let location = present(row, Column::Location);
        let status_text = row.get(Column::RegistrationStatus);
        let notes = present(row, Column::Notes);

        let category = classify_category(source_category);
        let ages = parse_ages_traced(row.get(Column::Ages));
        let prices = parse_prices_traced(row.get(Column::Price));
        let status = parse_status_traced(status_text);

        let mut fallbacks = Vec::new();
        for (field, fell_back) in [
            (Column::Ages, ages.is_fallback()),
            (Column::Price, prices.is_fallback()),
            (Column::RegistrationStatus, status.is_fallback()),
        ] {
            if fell_back {
                let text = row.get(field).unwrap_or_default().to_string();
                fallbacks.push((field, text));
            }
        }

        let ages = ages.into_value();
        let prices = prices.into_value();

        let camp = Camp {
            id: 0,
            slug: slugify(&name),
            name,
            category,
            ages_min: ages.min,
            ages_max: ages.max,
            duration: DEFAULT_DURATION.to_string(),
            days_of_week: WEEKDAYS.iter().map(|d| d.to_string()).collect(),
            location_name: location.map(str::to_string),
            address: location.map(str::to_string),
            city: derive_city(city_area, &self.config.default_city),
            state: self.config.state.clone(),
            price_min: prices.min,
            price_max: prices.max,
            price_note: prices.note,
            camp_type: classify_camp_type(category, notes),
            schedule_type: ScheduleType::FullDay,
            region: classify_region(city_area),
            website: format_website(present(row, Column::Website)),
            registration_status: status.into_value(),
            registration_opens_date: parse_opens_date(status_text, self.config.planning_year),
            fills_fast: false,
            notes: notes.map(str::to_string),
            tags: derive_tags(source_category, raw_name, notes),
            is_active: true,
        };

        Draft { camp, fallbacks }
    }
}

/// Cell text for optional free-text columns; an empty cell counts as absent.
fn present(row: &RawCampRow, column: Column) -> Option<&str> {
    row.get(column).filter(|text| !text.is_empty())
}

/// Normalise `rows` with default settings and the given planning year.
pub fn normalize(rows: &[RawCampRow], planning_year: i32) -> Vec<Camp> {
    Normalizer::new(NormalizeConfig {
        planning_year,
        ..NormalizeConfig::default()
    })
    .normalize(rows)
}
