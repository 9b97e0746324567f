use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use campsheet::commands;
use campsheet::{Config, OutputFormat};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "campsheet", about = "Normalize summer camp spreadsheets into structured records")]
struct Cli {
    /// Config file (default: ~/.config/campsheet/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Planning year registration dates refer to.
    #[arg(long, global = true)]
    year: Option<i32>,

    /// Sheet to read from a workbook JSON export.
    #[arg(long, global = true)]
    sheet: Option<String>,

    /// Log at debug level (RUST_LOG overrides).
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Normalize a sheet and write JSON or an SQL seed script.
    Convert {
        input: PathBuf,
        #[arg(long, value_enum)]
        format: Option<Format>,
        /// Write to FILE instead of stdout.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Report data-quality warnings; fails on inverted ranges.
    Check { input: PathBuf },
    /// Print camp counts by category and region.
    Summary { input: PathBuf },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Sql,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => OutputFormat::Json,
            Format::Sql => OutputFormat::Sql,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let mut config = Config::load(cli.config.as_deref()).context("loading config")?;
    if let Some(year) = cli.year {
        config.normalize.planning_year = year;
    }
    if let Some(sheet) = cli.sheet {
        config.source.sheet = sheet;
    }
    tracing::debug!(?config, "config resolved");

    let stdout = std::io::stdout();
    match cli.command {
        Command::Convert { input, format, output } => {
            let format = format.map(Into::into).unwrap_or(config.output.format);
            let report = match output {
                Some(path) => {
                    let file = std::fs::File::create(&path)
                        .with_context(|| format!("creating {}", path.display()))?;
                    let mut out = std::io::BufWriter::new(file);
                    commands::convert(&config, &input, format, &mut out)?
                }
                None => commands::convert(&config, &input, format, &mut stdout.lock())?,
            };
            eprintln!(
                "Converted {} camps (skipped {} duplicates)",
                report.camps.len(),
                report.duplicates.len()
            );
        }
        Command::Check { input } => {
            commands::check(&config, &input, &mut stdout.lock())?;
        }
        Command::Summary { input } => {
            let mut out = stdout.lock();
            commands::summary(&config, &input, &mut out)?;
            out.flush()?;
        }
    }
    Ok(())
}
