//! Locale identifiers, ancestor chains, and normalization
//!
//! A locale tag such as `fr-FR` falls back to its ancestors (`fr`) when a
//! translation is missing. The chain is a pure function of the tag string,
//! so it is memoized per distinct tag for the lifetime of the engine.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use regex::Regex;

/// Pattern accepted by [`normalize`]: a 2-3 letter language code with an
/// optional 2-letter region separated by `-` or `_`.
pub const DEFAULT_LOCALE_PATTERN: &str = r"^([a-zA-Z]{2,3})(?:[-_]([a-zA-Z]{2}))?$";

/// Produce a locale and its ancestors, most specific first
///
/// Each step drops the last `-`-delimited segment, ending at the bare
/// language code: `zh-Hant-TW` → `["zh-Hant-TW", "zh-Hant", "zh"]`.
pub fn ancestors(locale: &str) -> Vec<String> {
    let mut chain = vec![locale.to_string()];
    let mut current = locale;
    while let Some(idx) = current.rfind('-') {
        current = &current[..idx];
        chain.push(current.to_string());
    }
    chain
}

/// Canonicalize a locale tag against a pattern
///
/// The language part is lowercased and the region part uppercased:
/// `EN_us` → `en-US`. Tags that do not match the pattern yield `None`.
pub fn normalize(locale: &str, pattern: &Regex) -> Option<String> {
    let captures = pattern.captures(locale)?;
    let language = captures.get(1)?.as_str().to_lowercase();
    match captures.get(2) {
        Some(region) => Some(format!("{}-{}", language, region.as_str().to_uppercase())),
        None => Some(language),
    }
}

/// Memoized ancestor chains
///
/// Chains are referentially stable for a given tag, so entries are only
/// ever inserted. A poisoned lock falls back to recomputation.
#[derive(Debug, Default)]
pub struct AncestryCache {
    inner: RwLock<HashMap<String, Arc<Vec<String>>>>,
}

impl AncestryCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the ancestor chain for a locale, memoizing the result
    pub fn resolve(&self, locale: &str) -> Arc<Vec<String>> {
        if let Ok(cache) = self.inner.read() {
            if let Some(chain) = cache.get(locale) {
                return Arc::clone(chain);
            }
        }

        let chain = Arc::new(ancestors(locale));
        if let Ok(mut cache) = self.inner.write() {
            cache
                .entry(locale.to_string())
                .or_insert_with(|| Arc::clone(&chain));
        }
        chain
    }

    /// Number of memoized tags
    pub fn len(&self) -> usize {
        self.inner.read().map(|cache| cache.len()).unwrap_or(0)
    }

    /// Whether the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_pattern() -> Regex {
        Regex::new(DEFAULT_LOCALE_PATTERN).expect("valid pattern")
    }

    #[test]
    fn test_ancestors_regional_variant() {
        assert_eq!(ancestors("fr-FR"), vec!["fr-FR", "fr"]);
        assert_eq!(ancestors("zh-Hant-TW"), vec!["zh-Hant-TW", "zh-Hant", "zh"]);
    }

    #[test]
    fn test_ancestors_bare_language() {
        assert_eq!(ancestors("el"), vec!["el"]);
    }

    #[test]
    fn test_ancestors_shape() {
        for locale in ["en-US", "de-CH", "pt", "zh-Hant-TW"] {
            let chain = ancestors(locale);
            assert!(!chain.is_empty());
            assert_eq!(chain.first().map(String::as_str), Some(locale));
            assert!(!chain.last().expect("non-empty").contains('-'));
            for pair in chain.windows(2) {
                assert!(pair[1].len() < pair[0].len());
            }
        }
    }

    #[test]
    fn test_normalize_casing() {
        let pattern = default_pattern();
        assert_eq!(normalize("EN_us", &pattern), Some("en-US".to_string()));
        assert_eq!(normalize("fr-fr", &pattern), Some("fr-FR".to_string()));
        assert_eq!(normalize("DE", &pattern), Some("de".to_string()));
    }

    #[test]
    fn test_normalize_rejects_malformed_tags() {
        let pattern = default_pattern();
        assert_eq!(normalize("not a locale", &pattern), None);
        assert_eq!(normalize("en-USA", &pattern), None);
        assert_eq!(normalize("", &pattern), None);
    }

    #[test]
    fn test_ancestry_cache_memoizes() {
        let cache = AncestryCache::new();
        assert!(cache.is_empty());

        let first = cache.resolve("es-MX");
        let second = cache.resolve("es-MX");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
        assert_eq!(*first, vec!["es-MX".to_string(), "es".to_string()]);
    }
}
