//! Feature-gated logging for the self service portal.
//!
//! The portal menus are themselves stdout, so tagged log lines are routed to
//! the log file whenever one is initialized; the console stays readable and
//! the file keeps the full record, including the audit trail emitted at info
//! level.
//!
//! Features:
//! - `log-info` compiles in `info!` (on by default).
//! - `log-debug` compiles in `debug!` plus a runtime on/off flag.
//! - `verbose` compiles in `verbose!`, an untagged console printer that
//!   never goes to the file.
//! - `file-logging` compiles in the file sink.
//!
//! `warn!` and `error!` are always compiled in.

use std::fmt::Arguments;
#[cfg(feature = "log-debug")]
use std::sync::atomic::AtomicBool;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::LazyLock;

#[cfg(feature = "file-logging")]
use std::{
    fs::{File, OpenOptions},
    io::Write,
    sync::Mutex,
};

/// Logging levels, ordered from most to least severe.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Level {
    /// Always compiled in. Emits to stderr.
    Error = 1,
    /// Always compiled in. Emits to stderr.
    Warn = 2,
    /// Requires the `log-info` feature.
    Info = 3,
    /// Requires the `log-debug` feature and the runtime debug flag.
    Debug = 4,
}

impl Level {
    /// Tag prepended to every emitted line
    const fn tag(self) -> &'static str {
        match self {
            Self::Error => "[ERROR]",
            Self::Warn => "[WARN]",
            Self::Info => "[INFO]",
            Self::Debug => "[DEBUG]",
        }
    }

    /// Errors and warnings go to stderr, the rest to stdout
    const fn to_stderr(self) -> bool {
        matches!(self, Self::Error | Self::Warn)
    }

    /// Whether this level was compiled in at all
    const fn compiled_in(self) -> bool {
        match self {
            Self::Error | Self::Warn => true,
            Self::Info => cfg!(feature = "log-info"),
            Self::Debug => cfg!(feature = "log-debug"),
        }
    }

    /// Case-insensitive parse, accepting the common short spellings
    #[must_use]
    pub fn parse(level: &str) -> Option<Self> {
        match level.to_ascii_lowercase().as_str() {
            "error" | "err" => Some(Self::Error),
            "warn" | "warning" => Some(Self::Warn),
            "info" => Some(Self::Info),
            "debug" => Some(Self::Debug),
            _ => None,
        }
    }
}

/// The most verbose level the build's features allow
const fn default_level() -> u8 {
    if cfg!(feature = "log-debug") {
        Level::Debug as u8
    } else if cfg!(feature = "log-info") {
        Level::Info as u8
    } else {
        Level::Warn as u8
    }
}

static LOG_LEVEL: LazyLock<AtomicU8> = LazyLock::new(|| AtomicU8::new(default_level()));
#[cfg(feature = "log-debug")]
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(true);
#[cfg(feature = "verbose")]
static VERBOSE_ENABLED: AtomicBool = AtomicBool::new(false);
#[cfg(feature = "file-logging")]
static LOG_FILE: LazyLock<Mutex<Option<File>>> = LazyLock::new(|| Mutex::new(None));

/// Set the global log level.
pub fn set_level(level: Level) {
    LOG_LEVEL.store(level as u8, Ordering::SeqCst);
}

/// Parse and set the level from a string. Returns false for unknown names.
#[must_use]
pub fn set_level_from_str(level: &str) -> bool {
    match Level::parse(level) {
        Some(level) => {
            set_level(level);
            true
        }
        None => false,
    }
}

/// Turn the runtime debug flag on (no-op when `log-debug` is disabled).
#[cfg(feature = "log-debug")]
pub fn enable_debug() {
    DEBUG_ENABLED.store(true, Ordering::SeqCst);
}
/// Turn the runtime debug flag on (no-op when `log-debug` is disabled).
#[cfg(not(feature = "log-debug"))]
pub fn enable_debug() {}

/// Turn the runtime debug flag off (no-op when `log-debug` is disabled).
#[cfg(feature = "log-debug")]
pub fn disable_debug() {
    DEBUG_ENABLED.store(false, Ordering::SeqCst);
}
/// Turn the runtime debug flag off (no-op when `log-debug` is disabled).
#[cfg(not(feature = "log-debug"))]
pub fn disable_debug() {}

/// Whether `debug!` currently emits (always false without `log-debug`).
#[cfg(feature = "log-debug")]
pub fn is_debug_enabled() -> bool {
    DEBUG_ENABLED.load(Ordering::SeqCst)
}

/// Whether `debug!` currently emits (always false without `log-debug`).
#[cfg(not(feature = "log-debug"))]
pub fn is_debug_enabled() -> bool {
    false
}

/// Turn verbose output on (no-op when `verbose` is disabled).
#[cfg(feature = "verbose")]
pub fn enable_verbose() {
    VERBOSE_ENABLED.store(true, Ordering::SeqCst);
}
/// Turn verbose output on (no-op when `verbose` is disabled).
#[cfg(not(feature = "verbose"))]
pub fn enable_verbose() {}

/// Turn verbose output off (no-op when `verbose` is disabled).
#[cfg(feature = "verbose")]
pub fn disable_verbose() {
    VERBOSE_ENABLED.store(false, Ordering::SeqCst);
}
/// Turn verbose output off (no-op when `verbose` is disabled).
#[cfg(not(feature = "verbose"))]
pub fn disable_verbose() {}

/// Whether `verbose!` currently emits (always false without `verbose`).
#[cfg(feature = "verbose")]
pub fn is_verbose_enabled() -> bool {
    VERBOSE_ENABLED.load(Ordering::SeqCst)
}

/// Whether `verbose!` currently emits (always false without `verbose`).
#[cfg(not(feature = "verbose"))]
pub fn is_verbose_enabled() -> bool {
    false
}

/// Open the log file in append mode and start routing tagged output to it.
/// Returns true on success.
///
/// # Panics
///
/// Panics if the `LOG_FILE` mutex is poisoned.
#[cfg(feature = "file-logging")]
#[must_use]
pub fn init_file_logging(path: &std::path::Path) -> bool {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .is_ok_and(|file| {
            let mut log_file = LOG_FILE.lock().unwrap();
            *log_file = Some(file);
            true
        })
}

/// Open the log file in append mode and start routing tagged output to it.
/// Returns true on success.
#[cfg(not(feature = "file-logging"))]
pub fn init_file_logging(_path: &std::path::Path) -> bool {
    false
}

#[cfg(feature = "file-logging")]
fn write_to_file(message: &str) {
    if let Ok(mut log_file) = LOG_FILE.lock() {
        if let Some(ref mut file) = *log_file {
            let _ = writeln!(file, "{message}");
            let _ = file.flush();
        }
    }
}

#[cfg(feature = "file-logging")]
fn is_file_logging_active() -> bool {
    LOG_FILE.lock().map(|lf| lf.is_some()).unwrap_or(false)
}

/// Route one line to the active sink: the log file when one is initialized,
/// otherwise the console stream for the level.
fn emit(level: Level, msg: &str) {
    #[cfg(feature = "file-logging")]
    {
        if is_file_logging_active() {
            write_to_file(&format!("{} {msg}", level.tag()));
            return;
        }
    }

    if level.to_stderr() {
        eprintln!("{} {msg}", level.tag());
    } else {
        println!("{} {msg}", level.tag());
    }
}

/// Whether a message at `level` should currently be emitted
fn should_log(level: Level) -> bool {
    if !level.compiled_in() {
        return false;
    }
    if level == Level::Debug && !is_debug_enabled() {
        return false;
    }
    (level as u8) <= LOG_LEVEL.load(Ordering::SeqCst)
}

/// Dispatch behind the public macros. Not meant to be called directly.
pub fn log_impl(level: Level, args: Arguments) {
    if should_log(level) {
        emit(level, &args.to_string());
    }
}

#[macro_export]
/// Logs an error-level message (always enabled). Emits to stderr.
macro_rules! error {
    ($($arg:tt)*) => { $crate::log_impl($crate::Level::Error, format_args!($($arg)*)) };
}

#[macro_export]
/// Logs a warning-level message (always enabled). Emits to stderr.
macro_rules! warn {
    ($($arg:tt)*) => { $crate::log_impl($crate::Level::Warn, format_args!($($arg)*)) };
}

#[macro_export]
/// Logs an info-level message (requires `log-info` feature).
macro_rules! info {
    ($($arg:tt)*) => { $crate::log_impl($crate::Level::Info, format_args!($($arg)*)) };
}

#[macro_export]
/// Logs a debug-level message (requires `log-debug` feature and runtime enablement).
macro_rules! debug {
    ($($arg:tt)*) => { $crate::log_impl($crate::Level::Debug, format_args!($($arg)*)) };
}

#[macro_export]
/// Prints a verbose message (requires `verbose` feature and runtime enablement).
/// This is a plain printer with no tags and never goes to the log file.
macro_rules! verbose {
    ($($arg:tt)*) => {
        #[cfg(feature = "verbose")]
        {
            if $crate::is_verbose_enabled() {
                println!($($arg)*);
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_aliases() {
        assert_eq!(Level::parse("ERR"), Some(Level::Error));
        assert_eq!(Level::parse("warning"), Some(Level::Warn));
        assert_eq!(Level::parse("trace"), None);
    }

    #[test]
    fn tags_match_levels() {
        assert_eq!(Level::Error.tag(), "[ERROR]");
        assert_eq!(Level::Debug.tag(), "[DEBUG]");
        assert!(Level::Warn.to_stderr());
        assert!(!Level::Info.to_stderr());
    }

    #[test]
    fn macros_do_not_panic() {
        crate::info!("info {}", 1);
        crate::warn!("warn {}", 2);
        crate::error!("error {}", 3);
    }

    #[cfg(feature = "log-debug")]
    #[test]
    fn debug_flag_gates_should_log() {
        set_level(Level::Debug);
        disable_debug();
        assert!(!should_log(Level::Debug));
        enable_debug();
        assert!(should_log(Level::Debug));
    }
}
