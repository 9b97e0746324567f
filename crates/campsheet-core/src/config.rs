//! Configuration types for campsheet.
//!
//! [`Config::load`] reads `~/.config/campsheet/config.toml` (or an explicit
//! path), layered on top of hardcoded defaults. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[normalize]
planning_year = 2026
default_city  = "Austin"
state         = "TX"

[source]
sheet = "2026 Camps"

[output]
format = "json"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/campsheet/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub normalize: NormalizeConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[normalize]` section of `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NormalizeConfig {
    /// Year registration dates in the sheet refer to ("Opens 2/28").
    #[serde(default = "default_planning_year")]
    pub planning_year: i32,
    /// City used when a row has no `City/Area`.
    #[serde(default = "default_city")]
    pub default_city: String,
    #[serde(default = "default_state")]
    pub state: String,
}

fn default_planning_year() -> i32 { 2026 }
fn default_city() -> String { "Austin".to_string() }
fn default_state() -> String { "TX".to_string() }

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            planning_year: default_planning_year(),
            default_city: default_city(),
            state: default_state(),
        }
    }
}

/// `[source]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// Sheet to read from a workbook JSON export.
    #[serde(default = "default_sheet")]
    pub sheet: String,
}

fn default_sheet() -> String { "2026 Camps".to_string() }

impl Default for SourceConfig {
    fn default() -> Self {
        Self { sheet: default_sheet() }
    }
}

/// `[output]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { format: OutputFormat::default() }
    }
}

/// What `campsheet convert` writes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Sql,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load `path`, or `~/.config/campsheet/config.toml` when `None`, layered
    /// on top of the built-in defaults. A missing file is not an error.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(config_path);

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("campsheet")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
