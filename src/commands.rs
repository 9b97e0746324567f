//! Subcommand bodies. Each takes the resolved [`Config`] and writes its
//! result to `out`; the binary decides where `out` points.

use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context};
use campsheet_core::config::{Config, OutputFormat};
use campsheet_core::quality::{audit, unrecognised};
use campsheet_core::{to_json, to_sql_seed, NormalizeReport, Normalizer, RawCampRow, Summary};
use campsheet_sources::open_source;
use tracing::{info, warn};

/// Read every row of `input` using the configured sheet.
pub fn load_rows(config: &Config, input: &Path) -> anyhow::Result<Vec<RawCampRow>> {
    let source = open_source(input, &config.source.sheet)?;
    source
        .read_rows()
        .with_context(|| format!("reading {}", input.display()))
}

/// Load and normalize `input`.
pub fn normalize_file(config: &Config, input: &Path) -> anyhow::Result<NormalizeReport> {
    let rows = load_rows(config, input)?;
    let report = Normalizer::new(config.normalize.clone()).normalize_report(&rows);
    info!(
        rows = rows.len(),
        camps = report.camps.len(),
        duplicates = report.duplicates.len(),
        "normalized {}",
        input.display()
    );
    Ok(report)
}

/// Render records in `format`.
pub fn render(report: &NormalizeReport, format: OutputFormat, planning_year: i32) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Json => to_json(&report.camps)?,
        OutputFormat::Sql => to_sql_seed(&report.camps, planning_year),
    })
}

/// `campsheet convert`: normalize `input` and write it out in `format`.
pub fn convert(
    config: &Config,
    input: &Path,
    format: OutputFormat,
    out: &mut dyn Write,
) -> anyhow::Result<NormalizeReport> {
    let report = normalize_file(config, input)?;
    let rendered = render(&report, format, config.normalize.planning_year)?;
    out.write_all(rendered.as_bytes())?;
    if format == OutputFormat::Json {
        writeln!(out)?;
    }
    out.flush()?;
    Ok(report)
}

/// `campsheet check`: print every data-quality warning, failing when a record
/// breaks its range invariants.
pub fn check(config: &Config, input: &Path, out: &mut dyn Write) -> anyhow::Result<()> {
    let report = normalize_file(config, input)?;
    let mut warnings = audit(&report.camps);
    warnings.extend(unrecognised(&report.fallbacks));
    warnings.sort_by_key(|w| w.camp_id());

    for warning in &warnings {
        writeln!(out, "{warning}")?;
    }
    let violations = warnings.iter().filter(|w| w.is_violation()).count();
    writeln!(
        out,
        "{} camps checked, {} warnings, {} violations",
        report.camps.len(),
        warnings.len(),
        violations
    )?;

    if violations > 0 {
        warn!(violations, "range invariants violated");
        bail!("{violations} record(s) violate range invariants");
    }
    Ok(())
}

/// `campsheet summary`: print the category and region breakdown.
pub fn summary(config: &Config, input: &Path, out: &mut dyn Write) -> anyhow::Result<Summary> {
    let report = normalize_file(config, input)?;
    let summary = Summary::of(&report.camps);
    write!(out, "{summary}")?;
    Ok(summary)
}
