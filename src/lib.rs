//! campsheet: normalize free-text summer camp spreadsheets.
//!
//! The binary is a thin clap front end over [`commands`]; this crate exposes
//! them so that integration tests can drive a whole run without a process.
//!
//! # Architecture
//!
//! ```text
//! RowSource ──► Normalizer ──► Export (JSON / SQL)
//!                   │
//!                   └──► Quality audit / Summary
//! ```

pub mod commands;

pub use campsheet_core::config::{Config, OutputFormat};
