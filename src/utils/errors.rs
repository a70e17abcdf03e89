//! Error handling for Linguist
//!
//! This module defines the main error types used throughout the library
//! and provides a unified error handling strategy. Normal translation
//! misses are not errors: lookups degrade to deterministic fallback
//! values and only genuinely invalid input surfaces here.

use thiserror::Error;

/// Main error type for Linguist operations
#[derive(Error, Debug)]
pub enum LinguistError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid locale: {0}")]
    InvalidLocale(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for Linguist operations
pub type Result<T> = std::result::Result<T, LinguistError>;

impl LinguistError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            LinguistError::Config(_) => false,
            LinguistError::InvalidLocale(_) => true,
            LinguistError::InvalidInput(_) => true,
            LinguistError::Serialization(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            LinguistError::Config(_) => ErrorSeverity::Critical,
            LinguistError::InvalidLocale(_) => ErrorSeverity::Warning,
            LinguistError::InvalidInput(_) => ErrorSeverity::Info,
            LinguistError::Serialization(_) => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
