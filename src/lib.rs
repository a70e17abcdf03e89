//! Linguist translation engine
//!
//! A translation resolution and message formatting engine. This library
//! resolves dotted translation keys against an in-memory locale tree with
//! ancestor fallback chains, applies pluggable message formatting with
//! pluralization and variable interpolation, and supports runtime
//! reconfiguration of delimiters, pluralization rules, and the formatter.

#![allow(non_snake_case)]

pub mod config;
pub mod formatters;
pub mod locale;
pub mod store;
pub mod translator;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{LinguistError, Result};

// Re-export main components for easy access
pub use formatters::{
    DefaultMessageFormatter, FormatterOptions, MessageFormatter, PluralizationRule,
    PluralizationRules, TranslationParams,
};
pub use store::{TranslationNode, TranslationStore};
pub use translator::{I18n, I18nOptions, I18nOptionsPatch};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
