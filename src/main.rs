//! Command-line interface for the trip report generator.
//!
//! Reads one or more trip logs and prints a mileage report for each.

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use log::{debug, LevelFilter};
use std::path::PathBuf;
use trip_report::{TripLimits, TripLog};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Summarize driver trip logs",
    long_about = "Reads trip logs made of `Driver <name>` and \
                  `Trip <name> <HH:MM> <HH:MM> <miles>` lines and prints total miles and \
                  average speed per driver, sorted by miles driven."
)]
struct Args {
    /// Trip log files to process, in order.
    ///
    /// Every path is checked before any report is printed, so a missing
    /// file stops the run with no output at all.
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,

    /// Discard trips slower than this average speed
    #[arg(long, value_name = "MPH", default_value_t = trip_report::config::DEFAULT_MIN_SPEED_MPH)]
    min_speed: f64,

    /// Discard trips faster than this average speed
    #[arg(long, value_name = "MPH", default_value_t = trip_report::config::DEFAULT_MAX_SPEED_MPH)]
    max_speed: f64,

    /// Log every skipped trip line
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .format_timestamp(None)
        .init();

    let limits = match TripLimits::new(args.min_speed, args.max_speed) {
        Ok(limits) => limits,
        Err(err) => Args::command()
            .error(ErrorKind::ArgumentConflict, err)
            .exit(),
    };

    if let Some(missing) = args.files.iter().find(|file| !file.is_file()) {
        Args::command()
            .error(
                ErrorKind::ValueValidation,
                format!("Invalid file: {}", missing.display()),
            )
            .exit();
    }

    for file in &args.files {
        let report = TripLog::from_file(file)?.with_limits(limits).report();
        debug!(
            "{}: {} driver(s), {} trip(s) kept, {} notice(s)",
            file.display(),
            report.driver_count,
            report.trip_count,
            report.notices.len()
        );

        for notice in &report.notices {
            eprint!("{}", notice);
        }
        print!("{}", report);
    }

    Ok(())
}
