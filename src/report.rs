//! Per-driver aggregation and report formatting.

use crate::models::{DriverSummary, Trip};

/// Builds the mileage report from driver names and validated trips.
///
/// The generator holds no state; identical inputs always give identical
/// output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportGenerator;

impl ReportGenerator {
    pub fn new() -> Self {
        Self
    }

    /// One summary per driver name, sorted by total miles, descending.
    ///
    /// Duplicate names yield duplicate summaries. Ties keep the order the
    /// drivers were given in.
    pub fn summarize<S: AsRef<str>>(&self, drivers: &[S], trips: &[Trip]) -> Vec<DriverSummary> {
        let mut summaries: Vec<DriverSummary> = drivers
            .iter()
            .map(|driver| summarize_driver(driver.as_ref(), trips))
            .collect();

        summaries.sort_by(|a, b| b.total_miles.total_cmp(&a.total_miles));
        summaries
    }

    /// Render the report, one newline-terminated line per driver.
    ///
    /// Returns an empty string when `drivers` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use trip_report::{extract_trips, ReportGenerator};
    ///
    /// let trips = extract_trips(["Trip Dan 07:15 07:45 17.3"]).trips;
    /// let report = ReportGenerator::new().generate(&["Dan", "Alex"], &trips);
    ///
    /// assert_eq!(report, "Dan: 17 miles @ 35mph\nAlex: 0 miles\n");
    /// ```
    pub fn generate<S: AsRef<str>>(&self, drivers: &[S], trips: &[Trip]) -> String {
        self.summarize(drivers, trips)
            .iter()
            .map(|summary| format!("{}\n", summary))
            .collect()
    }
}

fn summarize_driver(driver: &str, trips: &[Trip]) -> DriverSummary {
    let (trip_count, total_miles, speed_sum) = trips
        .iter()
        .filter(|trip| trip.driver() == driver)
        .fold((0usize, 0.0, 0.0), |(count, miles, speed), trip| {
            (count + 1, miles + trip.miles_driven(), speed + trip.average_speed())
        });

    let average_speed = if trip_count > 0 {
        speed_sum / trip_count as f64
    } else {
        0.0
    };

    DriverSummary {
        driver: driver.to_string(),
        total_miles,
        average_speed,
        trip_count,
    }
}
