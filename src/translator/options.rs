//! Engine options and the runtime update policy
//!
//! Options live in one value owned by the engine and are handed by
//! reference into every format call. Runtime updates go through
//! [`I18nOptionsPatch`], a shallow merge: a field present in the patch
//! replaces the current value wholesale, an absent field is untouched.

use std::fmt;
use std::sync::Arc;
use regex::Regex;
use crate::config::I18nConfig;
use crate::formatters::{
    DefaultMessageFormatter, FormatterOptions, MessageFormatter, PluralizationRule,
    PluralizationRules,
};
use crate::locale::{self, DEFAULT_LOCALE_PATTERN};
use crate::utils::errors::{LinguistError, Result};

/// Complete engine configuration value
#[derive(Clone)]
pub struct I18nOptions {
    /// Locale of last resort appended to every fallback chain
    pub default_locale: String,
    /// Return `""` for missing keys instead of the key itself
    pub hide_missing: bool,
    /// Pattern a locale tag must match to be accepted by `set_locale`
    pub locale_pattern: Regex,
    /// Options shared with the active formatter
    pub formatter: FormatterOptions,
    /// The active formatting strategy
    pub message_formatter: Arc<dyn MessageFormatter>,
}

impl Default for I18nOptions {
    fn default() -> Self {
        Self {
            default_locale: "en-US".to_string(),
            hide_missing: false,
            locale_pattern: Regex::new(DEFAULT_LOCALE_PATTERN)
                .expect("default locale pattern compiles"),
            formatter: FormatterOptions::default(),
            message_formatter: Arc::new(DefaultMessageFormatter),
        }
    }
}

impl fmt::Debug for I18nOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("I18nOptions")
            .field("default_locale", &self.default_locale)
            .field("hide_missing", &self.hide_missing)
            .field("locale_pattern", &self.locale_pattern.as_str())
            .field("formatter", &self.formatter)
            .field("message_formatter", &"<dyn MessageFormatter>")
            .finish()
    }
}

impl I18nOptions {
    /// Build options from loaded configuration
    pub fn from_config(config: &I18nConfig) -> Result<Self> {
        let mut options = Self::default();
        let normalized = locale::normalize(&config.default_locale, &options.locale_pattern)
            .ok_or_else(|| LinguistError::InvalidLocale(config.default_locale.clone()))?;
        options.default_locale = normalized;
        options.hide_missing = config.hide_missing;
        options.formatter.open = config.open.clone();
        options.formatter.close = config.close.clone();
        options.formatter.pluralization_divider = config.pluralization_divider.clone();
        Ok(options)
    }

    /// Shallow-merge a runtime update into this options value
    ///
    /// `pluralization_rules` is replaced as an entire map when supplied, so
    /// passing an empty map resets every registered rule.
    pub fn merge(&mut self, patch: I18nOptionsPatch) {
        if let Some(default_locale) = patch.default_locale {
            self.default_locale = default_locale;
        }
        if let Some(hide_missing) = patch.hide_missing {
            self.hide_missing = hide_missing;
        }
        if let Some(locale_pattern) = patch.locale_pattern {
            self.locale_pattern = locale_pattern;
        }
        if let Some(open) = patch.open {
            self.formatter.open = open;
        }
        if let Some(close) = patch.close {
            self.formatter.close = close;
        }
        if let Some(divider) = patch.pluralization_divider {
            self.formatter.pluralization_divider = divider;
        }
        if let Some(rules) = patch.pluralization_rules {
            self.formatter.pluralization_rules = rules;
        }
        if let Some(formatter) = patch.message_formatter {
            self.message_formatter = formatter;
        }
    }
}

/// Partial options update
///
/// Every field defaults to "leave unchanged". Build one with the chained
/// setters and hand it to [`crate::translator::I18n::set_options`].
#[derive(Default)]
pub struct I18nOptionsPatch {
    pub default_locale: Option<String>,
    pub hide_missing: Option<bool>,
    pub locale_pattern: Option<Regex>,
    pub open: Option<String>,
    pub close: Option<String>,
    pub pluralization_divider: Option<String>,
    pub pluralization_rules: Option<PluralizationRules>,
    pub message_formatter: Option<Arc<dyn MessageFormatter>>,
}

impl I18nOptionsPatch {
    /// Create an empty patch
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the default locale
    pub fn default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = Some(locale.into());
        self
    }

    /// Replace the missing-key policy
    pub fn hide_missing(mut self, hide: bool) -> Self {
        self.hide_missing = Some(hide);
        self
    }

    /// Replace the locale pattern
    pub fn locale_pattern(mut self, pattern: Regex) -> Self {
        self.locale_pattern = Some(pattern);
        self
    }

    /// Replace the opening delimiter
    pub fn open(mut self, open: impl Into<String>) -> Self {
        self.open = Some(open.into());
        self
    }

    /// Replace the closing delimiter
    pub fn close(mut self, close: impl Into<String>) -> Self {
        self.close = Some(close.into());
        self
    }

    /// Replace the pluralization divider
    pub fn pluralization_divider(mut self, divider: impl Into<String>) -> Self {
        self.pluralization_divider = Some(divider.into());
        self
    }

    /// Replace the entire pluralization rule map
    pub fn pluralization_rules(mut self, rules: PluralizationRules) -> Self {
        self.pluralization_rules = Some(rules);
        self
    }

    /// Add one rule to the map this patch will install
    ///
    /// Note the map still replaces the previous one wholesale: rules not
    /// re-added here are gone after the merge.
    pub fn rule(mut self, locale: impl Into<String>, rule: impl Fn(i64) -> usize + Send + Sync + 'static) -> Self {
        self.pluralization_rules
            .get_or_insert_with(Default::default)
            .insert(locale.into(), Arc::new(rule) as PluralizationRule);
        self
    }

    /// Replace the active formatter
    pub fn message_formatter(mut self, formatter: impl MessageFormatter + 'static) -> Self {
        self.message_formatter = Some(Arc::new(formatter));
        self
    }
}

impl fmt::Debug for I18nOptionsPatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("I18nOptionsPatch")
            .field("default_locale", &self.default_locale)
            .field("hide_missing", &self.hide_missing)
            .field("locale_pattern", &self.locale_pattern.as_ref().map(Regex::as_str))
            .field("open", &self.open)
            .field("close", &self.close)
            .field("pluralization_divider", &self.pluralization_divider)
            .field(
                "pluralization_rules",
                &self.pluralization_rules.as_ref().map(|rules| rules.len()),
            )
            .field("message_formatter", &self.message_formatter.as_ref().map(|_| "<set>"))
            .finish()
    }
}
