//! Driver and trip extraction.
//!
//! Both extractors scan an ordered sequence of lines and keep what matches,
//! in encounter order. Nothing in here fails: a line that does not match, or
//! describes an implausible trip, is dropped. The only visible trace of a
//! dropped trip is a [`TripNotice`] for inverted time ranges, plus a
//! `debug!` record for every rejection.

use crate::config::TripLimits;
use crate::grammar::{parse_driver_line, parse_trip_line, TripLine};
use crate::models::{Trip, TripNotice};
use log::debug;
use thiserror::Error;

/// Extract driver names from `Driver <name>` lines.
///
/// Order and duplicates are preserved.
pub fn extract_drivers<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| parse_driver_line(line.as_ref()).map(|d| d.name.to_string()))
        .collect()
}

/// Extract trips with the default speed limits.
pub fn extract_trips<I, S>(lines: I) -> TripExtraction
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    TripExtractor::new().extract(lines)
}

/// Why a well-formed trip line was discarded.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Rejection {
    #[error("clock reading out of range")]
    ClockOutOfRange,

    #[error("start time follows end time")]
    InvertedTimeRange,

    #[error("non-positive duration ({0} min)")]
    NonPositiveDuration(i64),

    #[error("implausible average speed ({0:.2} mph)")]
    ImplausibleSpeed(f64),
}

/// Output of [`TripExtractor::extract`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripExtraction {
    /// Validated trips, in encounter order
    pub trips: Vec<Trip>,
    /// Advisories for trips dropped because start followed end
    pub notices: Vec<TripNotice>,
}

/// Extracts and validates trips.
///
/// # Examples
///
/// ```
/// use trip_report::TripExtractor;
///
/// let extraction = TripExtractor::new().extract([
///     "Trip Tim 09:05 12:45 77.3",
///     "Trip Tim 12:45 09:05 77.3",
/// ]);
///
/// assert_eq!(extraction.trips.len(), 1);
/// assert_eq!(extraction.notices.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TripExtractor {
    limits: TripLimits,
}

impl TripExtractor {
    /// Create an extractor with the default 5-100 mph bounds.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: TripLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &TripLimits {
        &self.limits
    }

    /// Scan `lines` and keep every trip that passes validation.
    pub fn extract<I, S>(&self, lines: I) -> TripExtraction
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut extraction = TripExtraction::default();

        for line in lines {
            let line = line.as_ref();
            let Some(parsed) = parse_trip_line(line) else {
                continue;
            };

            match self.validate(&parsed) {
                Ok(trip) => extraction.trips.push(trip),
                Err(rejection) => {
                    debug!("Skipping '{}': {}", line, rejection);
                    if rejection == Rejection::InvertedTimeRange {
                        extraction.notices.push(TripNotice {
                            line: line.to_string(),
                        });
                    }
                }
            }
        }

        extraction
    }

    /// Apply the validation steps in order, stopping at the first failure.
    pub fn validate(&self, line: &TripLine<'_>) -> Result<Trip, Rejection> {
        let (Some(start_time), Some(end_time)) = (line.start.to_time(), line.end.to_time())
        else {
            return Err(Rejection::ClockOutOfRange);
        };

        if start_time > end_time {
            return Err(Rejection::InvertedTimeRange);
        }

        let duration = i64::from(line.end.minutes_since_midnight())
            - i64::from(line.start.minutes_since_midnight());
        if duration <= 0 {
            return Err(Rejection::NonPositiveDuration(duration));
        }

        let average_speed = line.miles * 60.0 / duration as f64;
        if !self.limits.accepts(average_speed) {
            return Err(Rejection::ImplausibleSpeed(average_speed));
        }

        Ok(Trip::new(
            line.driver.to_string(),
            start_time,
            end_time,
            line.miles,
            average_speed,
        ))
    }
}
