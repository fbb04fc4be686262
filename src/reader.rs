//! High-level API for loading trip logs and producing reports.

use crate::config::TripLimits;
use crate::error::{Error, Result};
use crate::extract::{extract_drivers, TripExtraction, TripExtractor};
use crate::models::TripNotice;
use crate::report::ReportGenerator;
use log::info;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Printed in place of a report when a log declares no drivers.
pub const NO_DRIVERS_MESSAGE: &str = "No drivers recorded at this time.";

/// A trip log held in memory as trimmed lines.
///
/// # Examples
///
/// ```no_run
/// use trip_report::TripLog;
///
/// let report = TripLog::from_file("trips.txt")?.report();
/// print!("{}", report);
/// # Ok::<(), trip_report::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TripLog {
    lines: Vec<String>,
    extractor: TripExtractor,
}

impl TripLog {
    /// Load a trip log from a file.
    ///
    /// Trailing whitespace is stripped from every line. Bytes that are not
    /// valid UTF-8 are replaced, so the lines holding them are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileNotFound`] if the file does not exist, or
    /// [`Error::Io`] if it cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
            _ => Error::Io(err),
        })?;

        // Invalid UTF-8 only spoils the lines it appears on, which then
        // fail to match like any other malformed line.
        let contents = String::from_utf8_lossy(&bytes);

        let log = Self::from_lines(contents.lines());
        info!("Loaded {} line(s) from {}", log.lines.len(), path.display());

        Ok(log)
    }

    /// Build a trip log from lines already in memory.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            lines: lines
                .into_iter()
                .map(|line| line.as_ref().trim_end().to_string())
                .collect(),
            extractor: TripExtractor::default(),
        }
    }

    /// Override the speed limits used when validating trips.
    pub fn with_limits(mut self, limits: TripLimits) -> Self {
        self.extractor = TripExtractor::with_limits(limits);
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Driver names in declaration order.
    pub fn drivers(&self) -> Vec<String> {
        extract_drivers(&self.lines)
    }

    /// Validated trips plus any notices raised while extracting them.
    pub fn trips(&self) -> TripExtraction {
        self.extractor.extract(&self.lines)
    }

    /// Run the whole pipeline.
    pub fn report(&self) -> TripReport {
        let drivers = self.drivers();
        let TripExtraction { trips, notices } = self.trips();
        let body = ReportGenerator::new().generate(&drivers, &trips);

        TripReport {
            body,
            notices,
            driver_count: drivers.len(),
            trip_count: trips.len(),
        }
    }
}

/// The rendered report for one trip log.
#[derive(Debug, Clone, PartialEq)]
pub struct TripReport {
    /// Report text; empty when no drivers were declared
    pub body: String,
    pub notices: Vec<TripNotice>,
    pub driver_count: usize,
    pub trip_count: usize,
}

impl TripReport {
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// The report body, or [`NO_DRIVERS_MESSAGE`] followed by a newline.
    pub fn output(&self) -> String {
        if self.is_empty() {
            format!("{}\n", NO_DRIVERS_MESSAGE)
        } else {
            self.body.clone()
        }
    }
}

impl std::fmt::Display for TripReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.output())
    }
}
