//! Extraction configuration types
//!
//! The only tunables are the plausibility bounds applied to a trip's
//! average speed. Everything else about the log format is fixed.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default lower bound for a plausible average speed, in mph
pub const DEFAULT_MIN_SPEED_MPH: f64 = 5.0;

/// Default upper bound for a plausible average speed, in mph
pub const DEFAULT_MAX_SPEED_MPH: f64 = 100.0;

/// Inclusive average-speed bounds a trip must fall within to be kept.
///
/// Only constructible through [`TripLimits::new`] (deserialization included),
/// so the bounds are always finite, non-negative and ordered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTripLimits")]
pub struct TripLimits {
    /// Trips slower than this are discarded
    min_speed_mph: f64,

    /// Trips faster than this are discarded
    max_speed_mph: f64,
}

/// Unchecked bounds as they appear in serialized form
#[derive(Deserialize)]
struct RawTripLimits {
    #[serde(default = "default_min_speed")]
    min_speed_mph: f64,

    #[serde(default = "default_max_speed")]
    max_speed_mph: f64,
}

impl TryFrom<RawTripLimits> for TripLimits {
    type Error = Error;

    fn try_from(raw: RawTripLimits) -> Result<Self> {
        Self::new(raw.min_speed_mph, raw.max_speed_mph)
    }
}

fn default_min_speed() -> f64 {
    DEFAULT_MIN_SPEED_MPH
}

fn default_max_speed() -> f64 {
    DEFAULT_MAX_SPEED_MPH
}

impl TripLimits {
    /// Create limits from explicit bounds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLimits`] if either bound is not finite, is
    /// negative, or if `min_speed_mph > max_speed_mph`.
    pub fn new(min_speed_mph: f64, max_speed_mph: f64) -> Result<Self> {
        let valid = min_speed_mph.is_finite()
            && max_speed_mph.is_finite()
            && min_speed_mph >= 0.0
            && min_speed_mph <= max_speed_mph;

        if !valid {
            return Err(Error::InvalidLimits {
                min: min_speed_mph,
                max: max_speed_mph,
            });
        }

        Ok(Self {
            min_speed_mph,
            max_speed_mph,
        })
    }

    pub fn min_speed_mph(&self) -> f64 {
        self.min_speed_mph
    }

    pub fn max_speed_mph(&self) -> f64 {
        self.max_speed_mph
    }

    /// Whether `speed` lies within the inclusive bounds.
    pub fn accepts(&self, speed: f64) -> bool {
        speed >= self.min_speed_mph && speed <= self.max_speed_mph
    }
}

impl Default for TripLimits {
    fn default() -> Self {
        Self {
            min_speed_mph: DEFAULT_MIN_SPEED_MPH,
            max_speed_mph: DEFAULT_MAX_SPEED_MPH,
        }
    }
}
