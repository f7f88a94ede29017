//! worktime-balance command line.
//!
//! Prints the yearly balance for an attendance export, optionally followed
//! by every record.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, error::ErrorKind};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use worktime_balance::calculation::produce_report;
use worktime_balance::config::ConfigLoader;
use worktime_balance::input::{read_attendance_csv, read_vacation_file};
use worktime_balance::report::{render_full, render_summary};

/// Environment variable naming a YAML calendar file.
const CALENDAR_ENV: &str = "WORKTIME_CALENDAR";

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    name = env!("CARGO_BIN_NAME"),
    about = "Monthly worked-time balance from a timesheet export"
)]
struct Args {
    /// Attendance CSV export
    #[arg(value_hint = clap::ValueHint::FilePath)]
    filename: PathBuf,

    /// Also print every record
    #[arg(short, long)]
    full: bool,

    /// Vacation list: one date or 'first - last' range per line
    #[arg(short = 'v', value_name = "PATH")]
    vacation: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let vacation = match read_vacation_file(&args.vacation) {
        Ok(dates) => dates,
        Err(err) => Args::command()
            .error(
                ErrorKind::ValueValidation,
                format!("invalid vacation file '{}': {}", args.vacation.display(), err),
            )
            .exit(),
    };

    let calendar = match std::env::var_os(CALENDAR_ENV) {
        Some(path) => ConfigLoader::load(&path)
            .with_context(|| format!("loading calendar from {}", CALENDAR_ENV))?,
        None => ConfigLoader::builtin(),
    };

    let rows = read_attendance_csv(&args.filename)?;
    let report = produce_report(&rows, &vacation, calendar.config())?;
    info!(year = report.year, records = report.records.len(), "Rendering report");

    let mut output = render_summary(&report);
    if args.full {
        output.push('\n');
        output.push_str(&render_full(&report));
    }

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
