//! Walkthrough of the sinks used by the portal: leveled lines land in the
//! log file once one is configured, verbose progress stays on the console.

use logger::{
    debug, enable_debug, enable_verbose, error, info, init_file_logging, set_level, verbose, warn,
    Level,
};
use std::path::PathBuf;

fn main() {
    set_level(Level::Debug);
    enable_debug();
    enable_verbose();

    let log_file = PathBuf::from("/tmp/hssp_demo.log");
    if init_file_logging(&log_file) {
        println!("Logging to {}", log_file.display());
    } else {
        eprintln!("Could not open {}", log_file.display());
        return;
    }

    verbose!("Loading mock user records...");
    verbose!("Registering FAQ subscribers...");

    // A condensed replay of one portal session.
    info!("2026-08-25 09:14:02 - student1@hindeburg.ac.uk - LOGIN - - SUCCESS");
    debug!("timetable slot scan took 2 comparisons");
    warn!("no default notification sender configured");
    info!("2026-08-25 09:15:40 - student1@hindeburg.ac.uk - ADD_COURSE_TO_TIMETABLE - code=COM1001 - SUCCESS");
    error!("login rejected for guest account");

    verbose!("Building working-week view...");
    verbose!("Session replay finished.");

    println!("Leveled lines were appended to {}; none of the verbose output was.", log_file.display());
}
