//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for applications embedding the Linguist engine.

use tracing::{info, warn, debug};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "linguist.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(())
}

/// Log a translation lookup that had to walk the fallback chain
pub fn log_fallback_hit(key: &str, requested: &str, resolved: &str) {
    debug!(
        key = key,
        requested_locale = requested,
        resolved_locale = resolved,
        "Translation resolved via fallback chain"
    );
}

/// Log a translation key that could not be resolved in any locale
pub fn log_missing_key(key: &str, locale: &str) {
    warn!(
        key = key,
        locale = locale,
        "Translation key not found in any locale"
    );
}

/// Log a rejected reserved path segment
pub fn log_reserved_segment(path: &str, segment: &str) {
    warn!(
        path = path,
        segment = segment,
        "Rejected reserved path segment on write"
    );
}
