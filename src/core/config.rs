//! Configuration module for the Hindeburg Self Service Portal
//!
//! Settings live in a TOML file under the platform config directory and are
//! seeded from compiled-in defaults on first run. Debug and release builds
//! keep separate files so a development run never clobbers a real setup.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// The `[logging]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// One of `error`, `warn`, `info`, `debug`
    #[serde(default)]
    pub level: String,
    /// Where leveled lines are mirrored; empty disables the file sink
    #[serde(default)]
    pub file: String,
    /// Show progress output on the console
    #[serde(default)]
    pub verbose: bool,
}

/// The `[notifications]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationsConfig {
    /// Shared admin-staff inbox that receives new inquiries
    #[serde(default)]
    pub admin_email: String,
    /// Sender address used for outgoing portal notifications
    #[serde(default)]
    pub sender: String,
}

/// The whole portal configuration as stored on disk
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Notification settings
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

/// Per-invocation replacements collected from the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Replacement logging level
    pub level: Option<String>,
    /// Replacement log file path
    pub file: Option<String>,
    /// Replacement verbose flag
    pub verbose: Option<bool>,
    /// Replacement admin-staff inbox address
    pub admin_email: Option<String>,
    /// Replacement notification sender address
    pub sender: Option<String>,
}

/// A config key addressable from the command line.
///
/// Keys are flat rather than dotted: the file has few enough settings that
/// `level` reads better than `logging.level` on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigKey {
    Level,
    File,
    Verbose,
    AdminEmail,
    Sender,
}

impl ConfigKey {
    /// Accepts both snake_case and kebab-case spellings
    fn parse(key: &str) -> Result<Self, String> {
        match key {
            "level" => Ok(Self::Level),
            "file" => Ok(Self::File),
            "verbose" => Ok(Self::Verbose),
            "admin_email" | "admin-email" => Ok(Self::AdminEmail),
            "sender" => Ok(Self::Sender),
            _ => Err(format!("Unknown config key: '{key}'")),
        }
    }
}

impl Config {
    /// Directory holding the portal's config and log files.
    ///
    /// `~/.config/hssp` on Linux, the platform equivalent elsewhere. Falls
    /// back to the working directory when no config dir can be determined.
    #[must_use]
    pub fn get_hssp_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("hssp")
    }

    /// Full path of the active config file (`dconfig.toml` in debug builds)
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_hssp_dir().join(CONFIG_FILE_NAME)
    }

    /// Fill empty fields from the defaults, returning whether anything changed.
    ///
    /// Lets an upgrade introduce new settings into an existing config file
    /// without touching values the user has customised. Booleans are left
    /// alone since `false` is indistinguishable from "not set".
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        fn fill(target: &mut String, fallback: &str) -> bool {
            if target.is_empty() && !fallback.is_empty() {
                *target = fallback.to_string();
                return true;
            }
            false
        }

        let mut changed = fill(&mut self.logging.level, &defaults.logging.level);
        changed |= fill(&mut self.logging.file, &defaults.logging.file);
        changed |= fill(
            &mut self.notifications.admin_email,
            &defaults.notifications.admin_email,
        );
        changed |= fill(&mut self.notifications.sender, &defaults.notifications.sender);
        changed
    }

    /// Apply CLI-provided overrides for this run only.
    ///
    /// Overrides never touch the config file; persisting a value goes
    /// through `config set` instead.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(admin_email) = &overrides.admin_email {
            self.notifications.admin_email.clone_from(admin_email);
        }
        if let Some(sender) = &overrides.sender {
            self.notifications.sender.clone_from(sender);
        }
    }

    /// Replace `$HSSP` in a value with the actual config directory path
    fn expand_variables(value: &str) -> String {
        if value.contains("$HSSP") {
            let hssp_dir = Self::get_hssp_dir();
            value.replace("$HSSP", hssp_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Parse a TOML string, expanding `$HSSP` in the log file path.
    ///
    /// Missing fields take their serde defaults (empty strings, `false`).
    ///
    /// # Errors
    /// Returns an error if the TOML cannot be parsed or does not match the
    /// expected schema.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;
        config.logging.file = Self::expand_variables(&config.logging.file);
        Ok(config)
    }

    /// The compiled-in defaults for this build profile
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML, which
    /// would be caught by any test run since the data is baked into the
    /// binary.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("embedded default configuration must parse")
    }

    /// Load the config file, seeding or upgrading it as needed.
    ///
    /// First run writes the defaults to disk. Later runs merge any fields a
    /// newer version introduced and save the result. An unreadable or
    /// unparsable file falls back to the defaults without overwriting it.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if !config_file.exists() {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        let Ok(content) = fs::read_to_string(&config_file) else {
            return defaults;
        };
        let Ok(mut config) = Self::from_toml(&content) else {
            return defaults;
        };

        if config.merge_defaults(&defaults) {
            let _ = config.save();
        }
        config
    }

    /// Write the current configuration to the config file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be created or the
    /// file cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Look up a value by key, rendered as a string.
    ///
    /// Known keys: `level`, `file`, `verbose`, `admin_email`, `sender`.
    /// Returns `None` for anything else.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match ConfigKey::parse(key).ok()? {
            ConfigKey::Level => self.logging.level.clone(),
            ConfigKey::File => self.logging.file.clone(),
            ConfigKey::Verbose => self.logging.verbose.to_string(),
            ConfigKey::AdminEmail => self.notifications.admin_email.clone(),
            ConfigKey::Sender => self.notifications.sender.clone(),
        };
        Some(value)
    }

    /// Update a value in memory from its string form. Call
    /// [`save()`](Config::save) afterwards to persist the change.
    ///
    /// # Errors
    /// Returns an error for an unknown key or a value that does not parse
    /// as the field's type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match ConfigKey::parse(key)? {
            ConfigKey::Level => self.logging.level = value.to_string(),
            ConfigKey::File => self.logging.file = value.to_string(),
            ConfigKey::Verbose => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            ConfigKey::AdminEmail => self.notifications.admin_email = value.to_string(),
            ConfigKey::Sender => self.notifications.sender = value.to_string(),
        }
        Ok(())
    }

    /// Restore a single value to its default, in memory.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match ConfigKey::parse(key)? {
            ConfigKey::Level => self.logging.level.clone_from(&defaults.logging.level),
            ConfigKey::File => self.logging.file.clone_from(&defaults.logging.file),
            ConfigKey::Verbose => self.logging.verbose = defaults.logging.verbose,
            ConfigKey::AdminEmail => self
                .notifications
                .admin_email
                .clone_from(&defaults.notifications.admin_email),
            ConfigKey::Sender => self
                .notifications
                .sender
                .clone_from(&defaults.notifications.sender),
        }
        Ok(())
    }

    /// Delete the config file so the next [`load()`](Config::load) starts
    /// from defaults. Succeeds if the file is already gone.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[notifications]")?;
        writeln!(f, "  admin_email = \"{}\"", self.notifications.admin_email)?;
        writeln!(f, "  sender = \"{}\"", self.notifications.sender)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_parse_accepts_both_spellings() {
        assert_eq!(ConfigKey::parse("admin_email"), Ok(ConfigKey::AdminEmail));
        assert_eq!(ConfigKey::parse("admin-email"), Ok(ConfigKey::AdminEmail));
        assert!(ConfigKey::parse("admin email").is_err());
    }

    #[test]
    fn test_expand_variables_leaves_plain_paths_alone() {
        assert_eq!(Config::expand_variables("/var/log/portal.log"), "/var/log/portal.log");
    }
}
