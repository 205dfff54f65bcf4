//! Integration tests for the portal configuration layer

use hindeburg_ssp::config::{Config, ConfigOverrides};
use std::fs;
use tempfile::TempDir;

fn parsed(toml_str: &str) -> Config {
    Config::from_toml(toml_str).expect("valid TOML")
}

#[test]
fn test_defaults_cover_the_notification_addresses() {
    let config = Config::from_defaults();

    assert!(!config.logging.level.is_empty());
    assert!(!config.notifications.admin_email.is_empty());
    assert!(!config.notifications.sender.is_empty());
}

#[test]
fn test_full_file_round_trips_through_toml() {
    let config = parsed(
        r#"
[logging]
level = "info"
file = "/var/log/hssp/portal.log"
verbose = true

[notifications]
admin_email = "inquiries@hindeburg.ac.nz"
sender = "noreply@hindeburg.ac.nz"
"#,
    );

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/var/log/hssp/portal.log");
    assert!(config.logging.verbose);
    assert_eq!(config.notifications.admin_email, "inquiries@hindeburg.ac.nz");
    assert_eq!(config.notifications.sender, "noreply@hindeburg.ac.nz");

    // What save() writes must parse back to the same settings
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("config.toml");
    let serialized = toml::to_string_pretty(&config).expect("serializable");
    fs::write(&path, serialized).expect("writable");

    let reloaded = parsed(&fs::read_to_string(&path).expect("readable"));
    assert_eq!(reloaded.logging.level, "info");
    assert_eq!(reloaded.notifications.sender, "noreply@hindeburg.ac.nz");
}

#[test]
fn test_missing_fields_take_serde_defaults() {
    let config = parsed(
        r#"
[logging]
level = "error"
"#,
    );

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert_eq!(config.notifications.admin_email, "");
    assert_eq!(config.notifications.sender, "");
}

#[test]
fn test_log_file_path_expands_hssp_variable() {
    let config = parsed(
        r#"
[logging]
file = "$HSSP/portal.log"
"#,
    );

    assert!(config.logging.file.contains("hssp"));
    assert!(config.logging.file.ends_with("portal.log"));
    assert!(!config.logging.file.contains("$HSSP"));
}

#[test]
fn test_config_paths_point_into_the_hssp_dir() {
    let dir = Config::get_hssp_dir();
    assert!(dir.to_string_lossy().contains("hssp"));

    let file = Config::get_config_file_path();
    assert!(file.starts_with(&dir));

    let name = file.file_name().expect("file name").to_string_lossy();
    assert!(name == "config.toml" || name == "dconfig.toml");
}

#[test]
fn test_get_and_set_share_one_key_space() {
    let mut config = Config::from_defaults();

    for key in ["level", "file", "verbose", "admin_email", "sender"] {
        let value = config.get(key);
        assert!(value.is_some(), "get should know '{key}'");
        assert!(
            config.set(key, &value.expect("checked above")).is_ok(),
            "set should know '{key}'"
        );
    }

    assert!(config.get("out_dir").is_none());
    assert!(config.set("out_dir", "/tmp").is_err());
}

#[test]
fn test_kebab_case_key_spelling_is_accepted() {
    let mut config = Config::from_defaults();

    config
        .set("admin-email", "its@hindeburg.ac.nz")
        .expect("kebab spelling");
    assert_eq!(config.get("admin_email").unwrap(), "its@hindeburg.ac.nz");
    assert_eq!(config.get("admin-email").unwrap(), "its@hindeburg.ac.nz");
}

#[test]
fn test_verbose_must_be_a_boolean() {
    let mut config = Config::from_defaults();

    config.set("verbose", "true").expect("valid boolean");
    assert!(config.logging.verbose);

    let err = config.set("verbose", "maybe").unwrap_err();
    assert!(err.contains("maybe"));
    assert!(config.logging.verbose, "failed set must not change the value");
}

#[test]
fn test_unset_restores_the_default_value() {
    let defaults = Config::from_defaults();
    let mut config = Config::from_defaults();

    config.set("level", "error").expect("known key");
    assert_eq!(config.logging.level, "error");

    config.unset("level", &defaults).expect("known key");
    assert_eq!(config.logging.level, defaults.logging.level);

    assert!(config.unset("out_dir", &defaults).is_err());
}

#[test]
fn test_overrides_replace_only_given_fields() {
    let defaults = Config::from_defaults();
    let mut config = Config::from_defaults();

    config.apply_overrides(&ConfigOverrides {
        level: Some("error".to_string()),
        verbose: Some(true),
        admin_email: Some("override@hindeburg.ac.nz".to_string()),
        ..ConfigOverrides::default()
    });

    assert_eq!(config.logging.level, "error");
    assert!(config.logging.verbose);
    assert_eq!(config.notifications.admin_email, "override@hindeburg.ac.nz");

    // Fields without an override keep their configured values
    assert_eq!(config.logging.file, defaults.logging.file);
    assert_eq!(config.notifications.sender, defaults.notifications.sender);
}

#[test]
fn test_display_prints_toml_like_sections() {
    let rendered = Config::from_defaults().to_string();

    assert!(rendered.contains("[logging]"));
    assert!(rendered.contains("[notifications]"));
    for field in ["level", "file", "verbose", "admin_email", "sender"] {
        assert!(rendered.contains(field), "display should show '{field}'");
    }
}

#[test]
fn test_merge_defaults_fills_only_empty_fields() {
    let defaults = Config::from_defaults();
    let mut config = parsed(
        r#"
[logging]
level = "error"
file = "/srv/hssp/audit.log"

[notifications]
admin_email = ""
sender = ""
"#,
    );

    assert!(config.merge_defaults(&defaults));

    // Empty fields picked up the defaults, customised ones survived
    assert_eq!(config.notifications.admin_email, defaults.notifications.admin_email);
    assert_eq!(config.notifications.sender, defaults.notifications.sender);
    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/srv/hssp/audit.log");

    // A second merge has nothing left to do
    assert!(!config.merge_defaults(&defaults));
}
