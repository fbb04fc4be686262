use chrono::NaiveTime;
use serde::Serialize;
use std::fmt;

const NOTICE_RULE: &str = "--------------------------------------------";

/// A validated trip.
///
/// Trips are only built by [`TripExtractor`](crate::extract::TripExtractor),
/// so every instance has a positive duration and a plausible average speed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trip {
    driver: String,
    start_time: NaiveTime,
    end_time: NaiveTime,
    miles_driven: f64,
    average_speed: f64,
}

impl Trip {
    pub(crate) fn new(
        driver: String,
        start_time: NaiveTime,
        end_time: NaiveTime,
        miles_driven: f64,
        average_speed: f64,
    ) -> Self {
        Self {
            driver,
            start_time,
            end_time,
            miles_driven,
            average_speed,
        }
    }

    pub fn driver(&self) -> &str {
        &self.driver
    }

    pub fn start_time(&self) -> NaiveTime {
        self.start_time
    }

    pub fn end_time(&self) -> NaiveTime {
        self.end_time
    }

    pub fn miles_driven(&self) -> f64 {
        self.miles_driven
    }

    /// Average speed in mph over the whole trip.
    pub fn average_speed(&self) -> f64 {
        self.average_speed
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }
}

/// Per-driver aggregate used to build the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriverSummary {
    pub driver: String,
    pub total_miles: f64,
    /// Unweighted mean of the trips' average speeds, 0 without trips
    pub average_speed: f64,
    pub trip_count: usize,
}

impl fmt::Display for DriverSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.total_miles > 0.0 {
            write!(
                f,
                "{}: {} miles @ {}mph",
                self.driver,
                self.total_miles.round() as i64,
                self.average_speed.round() as i64
            )
        } else {
            write!(f, "{}: 0 miles", self.driver)
        }
    }
}

/// Advisory raised for a trip whose start time follows its end time.
///
/// The trip itself is discarded; the notice carries the offending line so
/// the caller can show it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TripNotice {
    pub line: String,
}

impl fmt::Display for TripNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Warning: Improper start / end time detected!")?;
        writeln!(f, "{}", NOTICE_RULE)?;
        writeln!(f, "{}", self.line)?;
        writeln!(f, "{}", NOTICE_RULE)
    }
}
