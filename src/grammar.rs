//! Line grammar for trip logs.
//!
//! A trip log contains two kinds of meaningful lines:
//!
//! ```text
//! Driver <name>
//! Trip <name> <HH:MM> <HH:MM> <miles>
//! ```
//!
//! Each parser either matches the whole line and returns its fields, or
//! returns `None`. Semantic checks (clock ranges, durations, speeds) belong
//! to the extractor, so hours like `27` still parse here.

use chrono::NaiveTime;

/// Maximum number of letters in a driver name.
pub const MAX_NAME_LEN: usize = 64;

const DRIVER_KEYWORD: &str = "Driver ";
const TRIP_KEYWORD: &str = "Trip ";

/// A matched `Driver <name>` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverLine<'a> {
    pub name: &'a str,
}

/// Raw `HH:MM` reading as written in the log, not yet range checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReading {
    pub hour: u32,
    pub minute: u32,
}

impl ClockReading {
    /// Convert to a time of day, or `None` if the hour exceeds 23 or the
    /// minute exceeds 59.
    pub fn to_time(self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0)
    }

    pub fn minutes_since_midnight(self) -> u32 {
        self.hour * 60 + self.minute
    }
}

/// A matched `Trip ...` line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripLine<'a> {
    pub driver: &'a str,
    pub start: ClockReading,
    pub end: ClockReading,
    pub miles: f64,
    /// The full line the fields were taken from
    pub raw: &'a str,
}

/// Parse a `Driver <name>` line.
pub fn parse_driver_line(line: &str) -> Option<DriverLine<'_>> {
    let mut scanner = Scanner::new(line);
    scanner.literal(DRIVER_KEYWORD)?;
    let name = scanner.name()?;
    scanner.finish()?;

    Some(DriverLine { name })
}

/// Parse a `Trip <name> <HH:MM> <HH:MM> <miles>` line.
pub fn parse_trip_line(line: &str) -> Option<TripLine<'_>> {
    let mut scanner = Scanner::new(line);
    scanner.literal(TRIP_KEYWORD)?;
    let driver = scanner.name()?;
    scanner.literal(" ")?;
    let start = scanner.clock()?;
    scanner.literal(" ")?;
    let end = scanner.clock()?;
    scanner.literal(" ")?;
    let miles = scanner.miles()?;
    scanner.finish()?;

    Some(TripLine {
        driver,
        start,
        end,
        miles,
        raw: line,
    })
}

/// Forward-only cursor over a line. It only ever advances over ASCII
/// bytes, so `pos` always sits on a char boundary.
struct Scanner<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(line: &'a str) -> Self {
        Self { line, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.line[self.pos..]
    }

    fn literal(&mut self, literal: &str) -> Option<()> {
        if self.rest().starts_with(literal) {
            self.pos += literal.len();
            Some(())
        } else {
            None
        }
    }

    /// Consume up to `max` leading bytes satisfying `pred`.
    fn take_while(&mut self, max: usize, pred: impl Fn(u8) -> bool) -> &'a str {
        let rest = self.rest();
        let len = rest
            .bytes()
            .take(max)
            .take_while(|&b| pred(b))
            .count();
        self.pos += len;
        &rest[..len]
    }

    fn digit(&mut self) -> Option<u32> {
        let digit = self.take_while(1, |b| b.is_ascii_digit());
        digit.bytes().next().map(|b| u32::from(b - b'0'))
    }

    fn name(&mut self) -> Option<&'a str> {
        let name = self.take_while(MAX_NAME_LEN, |b| b.is_ascii_alphabetic());
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }

    /// `HH:MM`, where the first hour digit is 0-2.
    fn clock(&mut self) -> Option<ClockReading> {
        let hour_tens = self.digit().filter(|&d| d <= 2)?;
        let hour_ones = self.digit()?;
        self.literal(":")?;
        let minute_tens = self.digit()?;
        let minute_ones = self.digit()?;

        Some(ClockReading {
            hour: hour_tens * 10 + hour_ones,
            minute: minute_tens * 10 + minute_ones,
        })
    }

    /// 1-3 integer digits, optionally followed by `.` and at most one digit.
    fn miles(&mut self) -> Option<f64> {
        let start = self.pos;
        let whole = self.take_while(3, |b| b.is_ascii_digit());
        if whole.is_empty() {
            return None;
        }
        if self.literal(".").is_some() {
            self.take_while(1, |b| b.is_ascii_digit());
        }

        self.line[start..self.pos].parse().ok()
    }

    fn finish(&self) -> Option<()> {
        if self.rest().is_empty() {
            Some(())
        } else {
            None
        }
    }
}
