//! Config command handler

use crate::args::ConfigSubcommand;
use hindeburg_ssp::config::Config;
use hindeburg_ssp::external::email::is_valid_email;
use std::io::{self, Write};

/// Dispatch a config subcommand and exit non-zero when it fails.
///
/// Without a subcommand the whole configuration is printed, the same as
/// `config get` with no key.
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    let outcome = match subcommand {
        None | Some(ConfigSubcommand::Get { key: None }) => {
            println!("\n=== Configuration ===\n");
            print!("{config}");
            Ok(())
        }
        Some(ConfigSubcommand::Get { key: Some(key) }) => show_value(config, &key),
        Some(ConfigSubcommand::Set { key, value }) => store_value(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => restore_default(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => delete_config_file(),
    };

    if let Err(message) = outcome {
        eprintln!("{message}");
        std::process::exit(1);
    }
}

fn show_value(config: &Config, key: &str) -> Result<(), String> {
    let value = config
        .get(key)
        .ok_or_else(|| format!("Unknown config key: '{key}'"))?;
    println!("{value}");
    Ok(())
}

fn store_value(config: &mut Config, key: &str, value: &str) -> Result<(), String> {
    config.set(key, value)?;
    save(config)?;

    // The notification addresses are free-form strings in the file, so a
    // typo only surfaces much later when an email bounces. Flag it here.
    if matches!(key, "admin_email" | "sender") && !is_valid_email(value) {
        eprintln!("Warning: '{value}' does not look like an email address");
    }

    println!("✓ Set {key} = {value}");
    Ok(())
}

fn restore_default(config: &mut Config, defaults: &Config, key: &str) -> Result<(), String> {
    config.unset(key, defaults)?;
    save(config)?;
    println!("✓ Reset {key} to default");
    Ok(())
}

fn save(config: &Config) -> Result<(), String> {
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))
}

fn delete_config_file() -> Result<(), String> {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    print!("Are you sure you want to reset config to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();
    let response = response.trim();

    if response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes") {
        Config::reset().map_err(|e| format!("Failed to remove config file: {e}"))?;
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
    Ok(())
}
