//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{NaviosError, Result};
use super::Settings;

/// Longest archive grace window accepted, one year
pub const MAX_ARCHIVE_GRACE_HOURS: u32 = 24 * 365;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_engine_config(&settings.engine)?;
    validate_i18n_config(&settings.i18n)?;
    validate_logging_config(&settings.logging)?;
    validate_defaults_config(&settings.defaults)?;

    Ok(())
}

/// Validate temporal engine configuration
fn validate_engine_config(config: &super::EngineConfig) -> Result<()> {
    config.tz()?;

    if config.archive_grace_hours == 0 || config.archive_grace_hours > MAX_ARCHIVE_GRACE_HOURS {
        return Err(NaviosError::Config(
            format!(
                "Archive grace window must be between 1 and {} hours",
                MAX_ARCHIVE_GRACE_HOURS
            )
        ));
    }

    if config.archive_limit_max == 0 {
        return Err(NaviosError::Config(
            "Archive limit maximum must be greater than 0".to_string()
        ));
    }

    if config.default_archive_limit == 0 || config.default_archive_limit > config.archive_limit_max {
        return Err(NaviosError::Config(
            format!(
                "Default archive limit must be between 1 and {}",
                config.archive_limit_max
            )
        ));
    }

    Ok(())
}

/// Validate internationalization configuration
fn validate_i18n_config(config: &super::I18nConfig) -> Result<()> {
    if config.default_language.is_empty() {
        return Err(NaviosError::Config(
            "Default language is required".to_string()
        ));
    }

    if config.supported_languages.is_empty() {
        return Err(NaviosError::Config(
            "At least one supported language is required".to_string()
        ));
    }

    if !config.supported_languages.contains(&config.default_language) {
        return Err(NaviosError::Config(
            "Default language must be in supported languages list".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(NaviosError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(NaviosError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    if matches!(config.file_path.as_deref(), Some("")) {
        return Err(NaviosError::Config(
            "Log file path must not be empty when set".to_string()
        ));
    }

    Ok(())
}

/// Validate map fallback values
fn validate_defaults_config(config: &super::DefaultsConfig) -> Result<()> {
    if config.area_label.trim().is_empty() {
        return Err(NaviosError::Config(
            "Default area label is required".to_string()
        ));
    }

    if !(-90.0..=90.0).contains(&config.latitude) || !(-180.0..=180.0).contains(&config.longitude) {
        return Err(NaviosError::Config(
            format!(
                "Default coordinates out of range: ({}, {})",
                config.latitude, config.longitude
            )
        ));
    }

    Ok(())
}
