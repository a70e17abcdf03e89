//! The translation engine
//!
//! `I18n` ties the store, the options value, the active locale, and the
//! ancestor-chain cache together. It is the single owning context for all
//! mutable state: readers see either the previous or the new options value
//! in full, never a mix, because updates go through `&mut self`.

pub mod options;

pub use options::{I18nOptions, I18nOptionsPatch};

use std::collections::BTreeSet;
use serde_json::Value;
use tracing::debug;

use crate::config::I18nConfig;
use crate::formatters::TranslationParams;
use crate::locale::{self, AncestryCache};
use crate::store::{TranslationNode, TranslationStore};
use crate::utils::errors::{LinguistError, Result};
use crate::utils::logging;

/// Translation resolution engine
///
/// Resolves dotted keys against the store across a locale fallback chain
/// and formats the winning template through the active formatter.
pub struct I18n {
    store: TranslationStore,
    options: I18nOptions,
    locale: String,
    ancestry: AncestryCache,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new()
    }
}

impl I18n {
    /// Create an engine with default options
    pub fn new() -> Self {
        Self::with_options(I18nOptions::default())
    }

    /// Create an engine with explicit options
    pub fn with_options(options: I18nOptions) -> Self {
        let locale = options.default_locale.clone();
        Self {
            store: TranslationStore::new(),
            options,
            locale,
            ancestry: AncestryCache::new(),
        }
    }

    /// Create an engine from loaded configuration
    pub fn from_config(config: &I18nConfig) -> Result<Self> {
        Ok(Self::with_options(I18nOptions::from_config(config)?))
    }

    // ------------------------------------------------------------------
    // Locale handling
    // ------------------------------------------------------------------

    /// The active locale
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Switch the active locale
    ///
    /// The tag is validated and canonicalized against the configured
    /// locale pattern; a tag that does not match is rejected.
    pub fn set_locale(&mut self, locale: &str) -> Result<()> {
        let normalized = self
            .normalize(locale)
            .ok_or_else(|| LinguistError::InvalidLocale(locale.to_string()))?;
        debug!(locale = %normalized, "Active locale changed");
        self.locale = normalized;
        Ok(())
    }

    /// Canonicalize a locale tag, if it matches the configured pattern
    pub fn normalize(&self, locale: &str) -> Option<String> {
        locale::normalize(locale, &self.options.locale_pattern)
    }

    /// The fallback chain for a locale: its ancestors, then the default
    /// locale's ancestors, deduplicated
    pub fn fallback_chain(&self, locale: &str) -> Vec<String> {
        let mut chain: Vec<String> = self.ancestry.resolve(locale).as_ref().clone();
        for ancestor in self.ancestry.resolve(&self.options.default_locale).iter() {
            if !chain.contains(ancestor) {
                chain.push(ancestor.clone());
            }
        }
        chain
    }

    // ------------------------------------------------------------------
    // Store access
    // ------------------------------------------------------------------

    /// Write a single message template under `locale`.`path`
    ///
    /// Reserved path segments make the write a silent no-op, matching the
    /// store contract.
    pub fn add_translation(
        &mut self,
        locale: &str,
        path: &str,
        message: impl Into<String>,
    ) {
        self.store.set_message(&format!("{locale}.{path}"), message);
    }

    /// Merge a JSON subtree of translations for a locale
    ///
    /// This is the loader boundary: an external loader hands over a parsed
    /// `(locale, subtree)` payload and every leaf is written through the
    /// path-based set operation.
    pub fn add_translations(&mut self, locale: &str, subtree: &Value) -> Result<()> {
        if !subtree.is_object() {
            return Err(LinguistError::InvalidInput(
                "translation subtree must be a JSON object".to_string(),
            ));
        }
        self.store.merge(locale, subtree)
    }

    /// Merge a JSON subtree under a namespace path of a locale
    ///
    /// Loader form taking the full `(locale, namespace, subtree)` triple.
    pub fn add_translations_in(
        &mut self,
        locale: &str,
        namespace: &str,
        subtree: &Value,
    ) -> Result<()> {
        if namespace.is_empty() {
            return self.add_translations(locale, subtree);
        }
        if !subtree.is_object() {
            return Err(LinguistError::InvalidInput(
                "translation subtree must be a JSON object".to_string(),
            ));
        }
        self.store.merge(&format!("{locale}.{namespace}"), subtree)
    }

    /// Parse a JSON payload and merge it for a locale
    pub fn add_translations_json(&mut self, locale: &str, json: &str) -> Result<()> {
        let subtree: Value = serde_json::from_str(json)?;
        self.add_translations(locale, &subtree)
    }

    /// Resolve a key to its raw template across the fallback chain
    ///
    /// The first locale that holds the key wins, even when the stored
    /// template is an empty string. `None` means no locale in the chain
    /// knows the key.
    pub fn lookup(&self, locale: &str, key: &str) -> Option<&str> {
        for candidate in self.fallback_chain(locale) {
            if let Some(template) = self.store.get_message(&format!("{candidate}.{key}")) {
                if candidate != locale {
                    logging::log_fallback_hit(key, locale, &candidate);
                }
                return Some(template);
            }
        }
        None
    }

    /// Whether the active locale's chain resolves a key
    pub fn has(&self, key: &str) -> bool {
        self.lookup(&self.locale, key).is_some()
    }

    /// Whether a specific locale's chain resolves a key
    pub fn has_in(&self, locale: &str, key: &str) -> bool {
        self.lookup(locale, key).is_some()
    }

    /// Locales present in the store, sorted
    pub fn locales(&self) -> Vec<String> {
        self.store.locales()
    }

    /// Flattened dotted keys available to a locale
    ///
    /// With `exactly_this` only the locale's own subtree is listed;
    /// otherwise keys reachable through the fallback chain are merged in.
    pub fn keys_for_locale(&self, locale: &str, exactly_this: bool) -> Vec<String> {
        let mut keys = BTreeSet::new();
        let candidates = if exactly_this {
            vec![locale.to_string()]
        } else {
            self.fallback_chain(locale)
        };
        for candidate in candidates {
            if let Some(node) = self.store.get(&candidate) {
                node.collect_keys("", &mut keys);
            }
        }
        keys.into_iter().collect()
    }

    /// The subtree under `locale`.`key`, or the locale's root for an
    /// empty key
    pub fn subtree(&self, locale: &str, key: &str) -> Option<&TranslationNode> {
        if key.is_empty() {
            self.store.get(locale)
        } else {
            self.store.get(&format!("{locale}.{key}"))
        }
    }

    // ------------------------------------------------------------------
    // Translation
    // ------------------------------------------------------------------

    /// Resolve and format a key under the active locale
    ///
    /// The reserved `_locale` parameter overrides the locale for this call
    /// and `_namespace` is prefixed to the key.
    pub fn translate(&self, key: &str, params: &TranslationParams) -> String {
        let locale = params.locale_override().unwrap_or(&self.locale);
        self.resolve(locale, key, params)
    }

    /// Short alias for [`translate`](Self::translate)
    pub fn t(&self, key: &str, params: &TranslationParams) -> String {
        self.translate(key, params)
    }

    /// Resolve and format a key under an explicit locale
    pub fn translate_in(&self, locale: &str, key: &str, params: &TranslationParams) -> String {
        self.resolve(locale, key, params)
    }

    fn resolve(&self, locale: &str, key: &str, params: &TranslationParams) -> String {
        let full_key = match params.namespace() {
            Some(namespace) if !namespace.is_empty() => format!("{namespace}.{key}"),
            _ => key.to_string(),
        };

        match self.lookup(locale, &full_key) {
            Some(template) => self.options.message_formatter.format(
                template,
                params,
                locale,
                &self.options.formatter,
            ),
            None => {
                logging::log_missing_key(&full_key, locale);
                if self.options.hide_missing {
                    String::new()
                } else {
                    // The key itself becomes the template, so the
                    // formatter always receives a non-empty string.
                    self.options.message_formatter.format(
                        &full_key,
                        params,
                        locale,
                        &self.options.formatter,
                    )
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Options
    // ------------------------------------------------------------------

    /// The current options value
    pub fn options(&self) -> &I18nOptions {
        &self.options
    }

    /// Apply a runtime options update (shallow merge, see
    /// [`I18nOptions::merge`])
    pub fn set_options(&mut self, patch: I18nOptionsPatch) {
        self.options.merge(patch);
    }
}
