//! Integration tests for the `logger` crate

use logger::{debug, error, info, warn};
use logger::{set_level, set_level_from_str, Level};

#[test]
fn recognised_level_names_parse() {
    for name in ["error", "err", "warn", "warning", "info", "debug", "DEBUG", "Info"] {
        assert!(set_level_from_str(name), "'{name}' should parse");
    }
}

#[test]
fn unknown_level_names_do_not_parse() {
    for name in ["trace", "quiet", "all", ""] {
        assert!(!set_level_from_str(name), "'{name}' should be rejected");
    }
}

#[test]
fn every_macro_emits_without_panicking() {
    set_level(Level::Debug);
    info!("session opened for {}", "student1");
    warn!("config file missing, falling back to defaults");
    error!("authentication backend unreachable");
    debug!("menu selection: {}", 3);
}

#[cfg(feature = "log-debug")]
#[test]
fn debug_flag_gates_debug_output() {
    use logger::{disable_debug, enable_debug, is_debug_enabled};

    set_level(Level::Debug);
    disable_debug();
    assert!(!is_debug_enabled());
    debug!("suppressed while the flag is off");

    enable_debug();
    assert!(is_debug_enabled());
    debug!("emitted once the flag is back on");
}
