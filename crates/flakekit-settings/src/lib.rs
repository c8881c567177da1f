//! FlakeKit Settings Crate
//!
//! Loads and saves generator configuration as JSON or TOML, and resolves the
//! default configuration location.

pub mod config;
pub mod error;

pub use config::{Config, OutputSettings, CONFIG_FILE_NAME};
pub use error::{SettingsError, SettingsResult};
