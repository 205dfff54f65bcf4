//! CLI command handlers for the Hindeburg Self Service Portal.
//!
//! Each subcommand is implemented in its own submodule.

pub mod config;
