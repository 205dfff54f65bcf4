//! Command-line interface entry point for the Hindeburg Self Service Portal

mod args;
mod commands;
mod console;
mod menus;

use args::{Cli, Command};
use clap::Parser;
use console::Console;
use hindeburg_ssp::config::Config;
use hindeburg_ssp::core::context::{SharedContext, ADMIN_STAFF_EMAIL, NOREPLY_EMAIL};
use hindeburg_ssp::external::{MockAuthenticationService, MockEmailService};
use logger::{enable_debug, enable_verbose, info, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();

    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // Runtime level: --log-level beats the config file, warn is the floor
    let mut level = args
        .log_level
        .map(Into::into)
        .or_else(|| Level::parse(&config.logging.level))
        .unwrap_or(Level::Warn);
    if args.debug_flag {
        level = Level::Debug;
    }
    if level == Level::Debug {
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // --log-file beats logging.file from the config
    let config_log_path = (!config.logging.file.is_empty())
        .then(|| std::path::PathBuf::from(&config.logging.file));

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let shown = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ Log file ready: {shown}");
            } else {
                info!("Log file ready: {shown}");
            }
        } else {
            eprintln!("✗ Could not open log file: {shown}");
        }
    }

    // Handle subcommands; no subcommand starts the interactive portal
    match args.command {
        Some(Command::Config { subcommand }) => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        None => run_portal(&config),
    }
}

/// Run the interactive portal session until the user exits
fn run_portal(config: &Config) {
    let auth = match MockAuthenticationService::new() {
        Ok(service) => service,
        Err(e) => {
            eprintln!("✗ Failed to initialize authentication service: {e}");
            std::process::exit(1);
        }
    };
    let email = MockEmailService;

    let admin_email = if config.notifications.admin_email.is_empty() {
        ADMIN_STAFF_EMAIL.to_string()
    } else {
        config.notifications.admin_email.clone()
    };
    let sender = if config.notifications.sender.is_empty() {
        NOREPLY_EMAIL.to_string()
    } else {
        config.notifications.sender.clone()
    };

    let mut ctx = SharedContext::new(admin_email, sender);
    let console = Console::new();

    console.display_info(&format!(
        "Hindeburg Self Service Portal v{}",
        env!("CARGO_PKG_VERSION")
    ));
    menus::main_menu(&mut ctx, &console, &auth, &email);
}
