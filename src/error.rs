//! Error types for the trip report library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for trip log operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading a trip log or configuring extraction.
///
/// Parsing itself never fails: lines that are malformed or describe an
/// implausible trip are filtered out, not reported as errors.
#[derive(Error, Debug)]
pub enum Error {
    /// The input file does not exist
    #[error("Invalid file: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O error occurred while reading
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Speed limits that cannot bound any trip
    #[error("Invalid speed limits: min {min} mph, max {max} mph")]
    InvalidLimits { min: f64, max: f64 },
}
