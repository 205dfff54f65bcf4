//! Tests for verbose and file-logging features.

use logger::{enable_verbose, error, info, verbose, warn};
use logger::{set_level, Level};
use std::path::PathBuf;

#[cfg(feature = "file-logging")]
#[test]
fn file_sink_collects_leveled_lines_but_never_verbose() {
    use logger::init_file_logging;
    use std::fs;

    let log_path = PathBuf::from("/tmp/hssp_logger_sink.log");
    let _ = fs::remove_file(&log_path);

    set_level(Level::Info);
    assert!(init_file_logging(&log_path));

    info!("session opened for admin1");
    warn!("audit trail lookup was empty");
    error!("mock auth file could not be parsed");

    // Plain-text progress lines bypass the sink even when enabled.
    #[cfg(feature = "verbose")]
    {
        enable_verbose();
        verbose!("a console-only progress line");
    }

    let contents = fs::read_to_string(&log_path).expect("log file should exist");
    assert!(contents.contains("[INFO] session opened for admin1"));
    assert!(contents.contains("[WARN] audit trail lookup was empty"));
    assert!(contents.contains("[ERROR] mock auth file could not be parsed"));
    assert!(!contents.contains("progress line"));

    // Re-initialising appends instead of truncating.
    assert!(init_file_logging(&log_path));
    info!("second session opened");
    let contents = fs::read_to_string(&log_path).expect("log file should exist");
    assert!(contents.contains("session opened for admin1"));
    assert!(contents.contains("[INFO] second session opened"));

    let _ = fs::remove_file(&log_path);
}
