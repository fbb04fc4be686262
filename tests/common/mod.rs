/// Test utilities for building trip log files
use std::fs;
use std::path::{Path, PathBuf};

/// Builder for creating trip log test files
#[derive(Default)]
pub struct TripLogBuilder {
    lines: Vec<String>,
}

#[allow(dead_code)]
impl TripLogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `Driver <name>` line
    pub fn driver(self, name: &str) -> Self {
        self.line(&format!("Driver {}", name))
    }

    /// Add a `Trip <name> <start> <end> <miles>` line
    pub fn trip(self, name: &str, start: &str, end: &str, miles: &str) -> Self {
        self.line(&format!("Trip {} {} {} {}", name, start, end, miles))
    }

    /// Add an arbitrary line
    pub fn line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Build the file contents, newline terminated
    pub fn build(&self) -> String {
        self.lines.iter().map(|line| format!("{}\n", line)).collect()
    }

    /// Write the log to `dir/name` and return its path
    pub fn write_to(&self, dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, self.build()).unwrap();
        path
    }
}

/// Four declared drivers (one without trips), a typo and two malformed trips
#[allow(dead_code)]
pub fn sample_log() -> TripLogBuilder {
    TripLogBuilder::new()
        .driver("Adam")
        .driver("Tim")
        .line("dRjfs Fake")
        .driver("Bob")
        .driver("Zero")
        .trip("Adam", "07:15", "07:55", "27.1")
        .trip("Tim", "09:05", "12:45", "77.3")
        .trip("Tim", "11:10", "17:45", "281.9")
        .line("Trip Abcd -7+11 07.45 1783")
        .trip("Bob", "04:15", "06:45", "95.7")
        .trip("Bob", "09:15", "11:45", "81.7")
        .line("Trip Ffff p0:00 0q:00 0.0")
}

/// Expected report for [`sample_log`]
#[allow(dead_code)]
pub const SAMPLE_REPORT: &str = "Tim: 359 miles @ 32mph\n\
                                 Bob: 177 miles @ 35mph\n\
                                 Adam: 27 miles @ 41mph\n\
                                 Zero: 0 miles\n";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_output_is_newline_terminated() {
        let contents = TripLogBuilder::new().driver("Dan").build();
        assert_eq!(contents, "Driver Dan\n");
    }

    #[test]
    fn test_trip_line_layout() {
        let builder = TripLogBuilder::new().trip("Dan", "07:15", "07:45", "17.3");
        assert_eq!(builder.lines(), ["Trip Dan 07:15 07:45 17.3"]);
    }
}
