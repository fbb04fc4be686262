//! Simple example of generating a mileage report from a trip log.

use trip_report::TripLog;

fn main() -> Result<(), trip_report::Error> {
    // Read the trip log
    let log = TripLog::from_file("trips.txt")?;

    println!("Read {} lines", log.lines().len());

    let report = log.report();

    // Inverted trips are reported separately from the summary
    for notice in &report.notices {
        eprint!("{}", notice);
    }

    print!("{}", report);

    Ok(())
}
