//! CLI argument definitions for the Hindeburg Self Service Portal

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use hindeburg_ssp::config::ConfigOverrides;
use logger::Level;

/// Log level as accepted on the command line.
///
/// Renders as a lowercase string for config storage and converts into
/// `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Errors only
    Error,
    /// Errors and warnings
    Warn,
    /// Adds informational messages
    Info,
    /// Everything, including debug traces
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Print one configuration value, or all of them when KEY is omitted
    Get {
        /// Optional configuration key to display (e.g., `level`, `file`, `admin_email`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Store a configuration value
    Set {
        /// Key to store under
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to store
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Put one key back to its built-in default
    Unset {
        /// Key to restore
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Discard the config file and start from the built-in defaults (asks first)
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Inspect or edit the stored configuration; bare `config` prints everything
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "hssp",
    about = "Hindeburg Self Service Portal command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Runtime log level for this invocation; the configured level applies when omitted
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Show progress output on the console for this invocation
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Shorthand for debug level plus the runtime debug flag
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Mirror leveled log lines into the given file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // Stored-config overrides; each one replaces the corresponding
    // config-file field for this invocation.
    /// Replace the configured logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Replace the configured log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Replace the configured verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Replace the admin-staff inbox that receives new inquiries
    #[arg(long = "config-admin-email", value_name = "EMAIL")]
    pub config_admin_email: Option<String>,

    /// Replace the admin-staff inbox (short form)
    #[arg(long = "admin-email", value_name = "EMAIL")]
    pub admin_email: Option<String>,

    /// Replace the sender address used for portal notifications
    #[arg(long = "config-sender", value_name = "EMAIL")]
    pub config_sender: Option<String>,

    /// Replace the notification sender address (short form)
    #[arg(long = "sender", value_name = "EMAIL")]
    pub sender: Option<String>,

    /// What to run; the interactive portal starts when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Collect the override flags into a `ConfigOverrides` for
    /// [`Config::apply_overrides`](hindeburg_ssp::config::Config::apply_overrides).
    ///
    /// Short-form flags (`--admin-email`) win over their long-form
    /// counterparts (`--config-admin-email`) when both are given. `None`
    /// means the flag was not passed and the config value stands.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string().to_lowercase()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            admin_email: self
                .admin_email
                .clone()
                .or_else(|| self.config_admin_email.clone()),
            sender: self.sender.clone().or_else(|| self.config_sender.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli() -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            config_admin_email: None,
            admin_email: None,
            config_sender: None,
            sender: None,
            command: None,
        }
    }

    #[test]
    fn test_level_arg_maps_to_name_and_level() {
        let expected = [
            (LogLevelArg::Error, "error", Level::Error),
            (LogLevelArg::Warn, "warn", Level::Warn),
            (LogLevelArg::Info, "info", Level::Info),
            (LogLevelArg::Debug, "debug", Level::Debug),
        ];
        for (arg, name, level) in expected {
            assert_eq!(arg.to_string(), name);
            assert_eq!(Level::from(arg), level);
        }
    }

    #[test]
    fn test_no_flags_produce_no_overrides() {
        let overrides = bare_cli().to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.admin_email.is_none());
        assert!(overrides.sender.is_none());
    }

    #[test]
    fn test_each_override_flag_lands_in_its_field() {
        let cli = Cli {
            config_level: Some(LogLevelArg::Debug),
            config_log_file: Some(PathBuf::from("/tmp/hssp.log")),
            config_verbose: Some(true),
            admin_email: Some("inquiries@hindeburg.ac.nz".to_string()),
            sender: Some("noreply@hindeburg.ac.nz".to_string()),
            ..bare_cli()
        };

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/hssp.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(
            overrides.admin_email,
            Some("inquiries@hindeburg.ac.nz".to_string())
        );
        assert_eq!(overrides.sender, Some("noreply@hindeburg.ac.nz".to_string()));
    }

    #[test]
    fn test_short_address_flags_beat_config_prefixed_ones() {
        let cli = Cli {
            config_admin_email: Some("long@hindeburg.ac.nz".to_string()),
            admin_email: Some("short@hindeburg.ac.nz".to_string()),
            config_sender: Some("long-sender@hindeburg.ac.nz".to_string()),
            sender: Some("short-sender@hindeburg.ac.nz".to_string()),
            ..bare_cli()
        };

        let overrides = cli.to_config_overrides();
        assert_eq!(
            overrides.admin_email,
            Some("short@hindeburg.ac.nz".to_string())
        );
        assert_eq!(
            overrides.sender,
            Some("short-sender@hindeburg.ac.nz".to_string())
        );
    }

    #[test]
    fn test_config_prefixed_flags_apply_on_their_own() {
        let cli = Cli {
            config_admin_email: Some("long@hindeburg.ac.nz".to_string()),
            config_sender: Some("long-sender@hindeburg.ac.nz".to_string()),
            ..bare_cli()
        };

        let overrides = cli.to_config_overrides();
        assert_eq!(
            overrides.admin_email,
            Some("long@hindeburg.ac.nz".to_string())
        );
        assert_eq!(
            overrides.sender,
            Some("long-sender@hindeburg.ac.nz".to_string())
        );
    }
}
