//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::utils::errors::{NaviosError, Result};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub engine: EngineConfig,
    pub i18n: I18nConfig,
    pub logging: LoggingConfig,
    pub defaults: DefaultsConfig,
}

/// Temporal engine configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EngineConfig {
    /// IANA name of the zone that "local midnight" refers to
    pub timezone: String,
    pub archive_grace_hours: u32,
    pub archive_limit_max: usize,
    pub default_archive_limit: usize,
}

/// Internationalization configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct I18nConfig {
    pub default_language: String,
    pub supported_languages: Vec<String>,
    pub translations_dir: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for the daily rolling log file; stdout only when unset
    pub file_path: Option<String>,
    pub json: bool,
}

/// Fallback values for events posted without an area or a map position
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DefaultsConfig {
    pub area_label: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    ///
    /// Built-in defaults are layered under `navios.toml` (optional), which is
    /// layered under `NAVIOS__SECTION__KEY` environment variables.
    pub fn new() -> Result<Self> {
        Self::load_from("navios")
    }

    /// Load settings using a specific configuration file stem
    pub fn load_from(file_stem: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(config::File::with_name(file_stem).required(false))
            .add_source(
                config::Environment::with_prefix("NAVIOS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<()> {
        super::validation::validate_settings(self)
    }
}

impl EngineConfig {
    /// Parse the configured time zone
    pub fn tz(&self) -> Result<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| NaviosError::UnknownTimezone(self.timezone.clone()))
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            timezone: "Asia/Tokyo".to_string(),
            archive_grace_hours: 24,
            archive_limit_max: 12,
            default_archive_limit: 6,
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_language: "ja".to_string(),
            supported_languages: vec!["ja".to_string(), "en".to_string()],
            translations_dir: "translations".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_path: None,
            json: false,
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            area_label: "上越".to_string(),
            latitude: 37.1479,
            longitude: 138.2360,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            i18n: I18nConfig::default(),
            logging: LoggingConfig::default(),
            defaults: DefaultsConfig::default(),
        }
    }
}
