//! Shared library for the Hindeburg Self Service Portal
//! Contains the domain core and the external service stubs used by the CLI

pub mod core;
pub mod external;

pub use self::core::config;
