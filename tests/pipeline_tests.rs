mod common;

use common::{sample_log, TripLogBuilder, SAMPLE_REPORT};
use tempfile::tempdir;
use trip_report::{
    extract_drivers, extract_trips, Error, ReportGenerator, TripLimits, TripLog,
    NO_DRIVERS_MESSAGE,
};

// ============================================================================
// FULL PIPELINE TESTS
// ============================================================================

#[test]
fn test_report_from_file() {
    let dir = tempdir().unwrap();
    let path = sample_log().write_to(dir.path(), "trips.txt");

    let report = TripLog::from_file(&path).unwrap().report();

    assert_eq!(report.body, SAMPLE_REPORT);
    assert_eq!(report.driver_count, 4);
    assert_eq!(report.trip_count, 5);
    assert!(report.notices.is_empty());
}

#[test]
fn test_trailing_whitespace_is_stripped() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("trips.txt");
    std::fs::write(&path, "Driver Dan  \r\nTrip Dan 07:15 07:45 17.3\t\r\n").unwrap();

    let log = TripLog::from_file(&path).unwrap();
    assert_eq!(log.lines(), ["Driver Dan", "Trip Dan 07:15 07:45 17.3"]);
    assert_eq!(log.report().body, "Dan: 17 miles @ 35mph\n");
}

#[test]
fn test_invalid_utf8_only_spoils_its_line() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("trips.txt");

    let mut contents = b"Driver Dan\nDriver Al\xffx\n".to_vec();
    contents.extend_from_slice(b"Trip Dan 07:15 07:45 17.3\nTrip Al\xfe 07:15 07:45 17.3\n");
    std::fs::write(&path, contents).unwrap();

    let report = TripLog::from_file(&path).unwrap().report();
    assert_eq!(report.body, "Dan: 17 miles @ 35mph\n");
    assert_eq!(report.trip_count, 1);
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.txt");

    match TripLog::from_file(&path) {
        Err(Error::FileNotFound(missing)) => assert_eq!(missing, path),
        other => panic!("expected FileNotFound, got {:?}", other),
    }
}

#[test]
fn test_no_drivers() {
    let log = TripLog::from_lines(["Trip Dan 07:15 07:45 17.3"]);
    let report = log.report();

    assert!(report.is_empty());
    assert_eq!(report.trip_count, 1);
    assert_eq!(report.to_string(), format!("{}\n", NO_DRIVERS_MESSAGE));
}

#[test]
fn test_empty_log() {
    let report = TripLog::from_lines(Vec::<String>::new()).report();
    assert!(report.is_empty());
    assert!(report.notices.is_empty());
}

#[test]
fn test_inverted_trip_is_reported_and_dropped() {
    let log = TripLog::from_lines(
        TripLogBuilder::new()
            .driver("Bob")
            .trip("Bob", "06:45", "04:15", "95.7")
            .trip("Bob", "09:15", "11:45", "81.7")
            .lines(),
    );
    let report = log.report();

    assert_eq!(report.body, "Bob: 82 miles @ 33mph\n");
    assert_eq!(report.notices.len(), 1);
    assert_eq!(report.notices[0].line, "Trip Bob 06:45 04:15 95.7");
}

#[test]
fn test_custom_limits_apply_to_report() {
    let log = TripLog::from_lines(
        TripLogBuilder::new()
            .driver("Lee")
            .trip("Lee", "00:00", "01:00", "150")
            .lines(),
    );

    assert_eq!(log.report().body, "Lee: 0 miles\n");

    let relaxed = log.with_limits(TripLimits::new(5.0, 200.0).unwrap());
    assert_eq!(relaxed.report().body, "Lee: 150 miles @ 150mph\n");
}

// ============================================================================
// STAGE-BY-STAGE TESTS
// ============================================================================

#[test]
fn test_driver_names_follow_keyword() {
    let builder = TripLogBuilder::new()
        .driver("Adam")
        .line("Driver")
        .line("Drivers Adam")
        .driver("mcKay")
        .line("DRIVER Tim");

    assert_eq!(extract_drivers(builder.lines()), vec!["Adam", "mcKay"]);
}

#[test]
fn test_trips_ignore_driver_declarations() {
    let trips = extract_trips(sample_log().lines()).trips;

    assert_eq!(trips.len(), 5);
    assert!(trips.iter().all(|trip| trip.duration_minutes() > 0));
    assert!(trips
        .iter()
        .all(|trip| (5.0..=100.0).contains(&trip.average_speed())));
}

#[test]
fn test_trip_for_undeclared_driver_is_kept_but_unreported() {
    let builder = TripLogBuilder::new()
        .driver("Ann")
        .trip("Ghost", "08:00", "09:00", "30");

    let extraction = extract_trips(builder.lines());
    assert_eq!(extraction.trips.len(), 1);

    let drivers = extract_drivers(builder.lines());
    let report = ReportGenerator::new().generate(&drivers, &extraction.trips);
    assert_eq!(report, "Ann: 0 miles\n");
}

#[test]
fn test_report_is_deterministic() {
    let lines = sample_log();
    let drivers = extract_drivers(lines.lines());
    let trips = extract_trips(lines.lines()).trips;
    let generator = ReportGenerator::new();

    let first = generator.generate(&drivers, &trips);
    let second = generator.generate(&drivers, &trips);

    assert_eq!(first, second);
    assert_eq!(first, SAMPLE_REPORT);
}

#[test]
fn test_records_serialize() {
    let trips = extract_trips(["Trip Dan 07:15 07:45 17.3"]).trips;
    let value = serde_json::to_value(&trips[0]).unwrap();

    assert_eq!(value["driver"], "Dan");
    assert_eq!(value["start_time"], "07:15:00");
    assert_eq!(value["end_time"], "07:45:00");
    assert_eq!(value["miles_driven"], 17.3);

    let summaries = ReportGenerator::new().summarize(&["Dan"], &trips);
    let value = serde_json::to_value(&summaries[0]).unwrap();
    assert_eq!(value["trip_count"], 1);
    assert_eq!(value["total_miles"], 17.3);
}
