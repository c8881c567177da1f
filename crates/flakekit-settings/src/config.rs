//! Configuration file management
//!
//! A [`Config`] holds the generator parameters and output settings. Files are
//! read and written as JSON or TOML, chosen by extension. Missing sections and
//! fields fall back to their defaults.

use crate::error::{SettingsError, SettingsResult};
use flakekit_camtools::{SnowflakeParameters, DEFAULT_OUTPUT_FILE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name of the configuration inside the platform config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

const APP_DIR_NAME: &str = "flakekit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            Some(other) => Err(SettingsError::UnsupportedFormat(format!(
                "'.{}' (config file must be .json or .toml)",
                other
            ))),
            None => Err(SettingsError::UnsupportedFormat(format!(
                "{} has no extension (config file must be .json or .toml)",
                path.display()
            ))),
        }
    }
}

/// Output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Where the G-code program is written
    pub path: PathBuf,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Generator parameters
    pub snowflake: SnowflakeParameters,
    /// Output settings
    pub output: OutputSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("cannot read {}: {}", path.display(), e))
        })?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    ///
    /// Missing parent directories are created.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => self.to_toml_string()?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                SettingsError::ConfigDirectory(format!("{}: {}", parent.display(), e))
            })?;
        }

        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("cannot write {}: {}", path.display(), e))
        })?;

        info!(path = %path.display(), "Saved configuration");
        Ok(())
    }

    /// Serialize as pretty TOML
    pub fn to_toml_string(&self) -> SettingsResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        self.snowflake.validate()?;

        if self.output.path.as_os_str().is_empty() {
            return Err(SettingsError::LoadError(
                "output path must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// `<platform config dir>/flakekit/config.toml`
    pub fn default_config_path() -> SettingsResult<PathBuf> {
        let base = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("no configuration directory on this platform".into())
        })?;
        Ok(base.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load `path` if given; otherwise the default config file if it exists,
    /// falling back to built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }

        match Self::default_config_path() {
            Ok(default_path) if default_path.is_file() => Self::load_from_file(&default_path),
            Ok(default_path) => {
                debug!(path = %default_path.display(), "No config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => {
                debug!(error = %e, "Using defaults");
                Ok(Self::default())
            }
        }
    }
}
