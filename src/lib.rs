//! # Trip Report
//!
//! A small library for turning driver trip logs into a per-driver mileage
//! report.
//!
//! ## Log Format
//!
//! One record per line. Lines that match neither shape are ignored.
//!
//! ```text
//! Driver Dan
//! Trip Dan 07:15 07:45 17.3
//! ```
//!
//! - **Driver**: `Driver` followed by a name of 1 to 64 ASCII letters
//! - **Trip**: driver name, start and end as `HH:MM`, and miles driven
//!   (up to three integer digits and one decimal digit)
//!
//! Trips are dropped when a clock reading is out of range, when they end
//! before they start, or when their average speed falls outside 5-100 mph.
//!
//! ## Quick Start
//!
//! ```no_run
//! use trip_report::TripLog;
//!
//! let log = TripLog::from_file("trips.txt")?;
//! let report = log.report();
//!
//! for notice in &report.notices {
//!     eprint!("{}", notice);
//! }
//! print!("{}", report);
//! # Ok::<(), trip_report::Error>(())
//! ```
//!
//! ## Lower-Level Pipeline
//!
//! Each stage is a pure function of its input and can be used on its own:
//!
//! ```
//! use trip_report::{extract_drivers, extract_trips, ReportGenerator};
//!
//! let lines = [
//!     "Driver Dan",
//!     "Driver Alex",
//!     "Trip Dan 07:15 07:45 17.3",
//!     "Trip Dan 06:12 06:32 21.8",
//!     "Trip Alex 12:01 13:16 42.0",
//! ];
//!
//! let drivers = extract_drivers(lines);
//! let trips = extract_trips(lines).trips;
//! let report = ReportGenerator::new().generate(&drivers, &trips);
//!
//! assert_eq!(report, "Alex: 42 miles @ 34mph\nDan: 39 miles @ 50mph\n");
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod reader;
pub mod report;

// Re-export commonly used types
pub use config::TripLimits;
pub use error::{Error, Result};
pub use extract::{extract_drivers, extract_trips, Rejection, TripExtraction, TripExtractor};
pub use reader::{TripLog, TripReport, NO_DRIVERS_MESSAGE};
pub use report::ReportGenerator;

pub use models::{DriverSummary, Trip, TripNotice};

// Internal modules (public but not part of the high-level API)
pub mod grammar;
pub mod models;
