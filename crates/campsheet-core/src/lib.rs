//! campsheet-core: summer camp spreadsheet normalization.
//!
//! This crate turns loosely formatted spreadsheet rows into structured camp
//! records, plus the shared types used by the row sources and the CLI.
//!
//! # Architecture
//!
//! ```text
//! RawCampRow ──► Normalizer ──► Camp ──► Export
//!                   │                      │
//!        matchers / classify / tags        └──► Quality audit
//! ```
//!
//! Every matcher is total: absent or unrecognised text maps to a defined
//! default, so normalization of a batch never fails.

pub mod classify;
pub mod config;
pub mod export;
pub mod matchers;
pub mod names;
pub mod normalizer;
pub mod quality;
pub mod rules;
pub mod tags;
pub mod types;

pub use export::{to_json, to_sql_seed, ExportError, Summary};
pub use normalizer::{normalize, Fallback, NormalizeReport, Normalizer};
pub use quality::{audit, Warning};
pub use types::{
    Camp, CampType, Category, Column, RawCampRow, Region, RegistrationStatus, ScheduleType,
};
