//! Configuration validation module
//!
//! This module provides validation functions for engine configuration
//! to ensure all required settings are properly configured.

use regex::Regex;
use crate::locale::DEFAULT_LOCALE_PATTERN;
use crate::utils::errors::{LinguistError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_i18n_config(&settings.i18n)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate translation engine configuration
fn validate_i18n_config(config: &super::I18nConfig) -> Result<()> {
    if config.default_locale.is_empty() {
        return Err(LinguistError::Config(
            "Default locale is required".to_string()
        ));
    }

    let pattern = Regex::new(DEFAULT_LOCALE_PATTERN)
        .map_err(|e| LinguistError::Config(format!("Locale pattern failed to compile: {e}")))?;
    if !pattern.is_match(&config.default_locale) {
        return Err(LinguistError::Config(
            format!("Default locale is not a valid locale tag: {}", config.default_locale)
        ));
    }

    if config.open.is_empty() || config.close.is_empty() {
        return Err(LinguistError::Config(
            "Interpolation delimiters must not be empty".to_string()
        ));
    }

    if config.pluralization_divider.is_empty() {
        return Err(LinguistError::Config(
            "Pluralization divider must not be empty".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(LinguistError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(LinguistError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
