//! Core module: domain state and operations behind the menus

pub mod audit;
pub mod catalog;
pub mod config;
pub mod context;
pub mod faq;
pub mod models;

/// Returns the current version of the `hindeburg-ssp` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
