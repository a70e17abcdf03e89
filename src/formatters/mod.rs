//! Message formatting contract
//!
//! A formatter turns a raw message template plus parameters into the final
//! display string. Exactly one formatter is active at a time; it is a
//! swappable strategy, not a middleware chain. The options value is read on
//! every call so runtime reconfiguration is visible immediately.

pub mod default;

pub use default::DefaultMessageFormatter;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use serde_json::Value;

/// Parameter name that triggers pluralization when numeric
pub const COUNT_PARAM: &str = "_count";

/// Parameter name overriding the active locale for one call
pub const LOCALE_PARAM: &str = "_locale";

/// Parameter name prefixed to the translation key with a dot
pub const NAMESPACE_PARAM: &str = "_namespace";

/// Per-locale function selecting a plural form index from a count
pub type PluralizationRule = Arc<dyn Fn(i64) -> usize + Send + Sync>;

/// Pluralization rules keyed by locale identifier
pub type PluralizationRules = HashMap<String, PluralizationRule>;

/// Pluggable formatting strategy
///
/// Implementations receive the resolved template, the caller's parameters,
/// the locale the call is formatting for, and the current options value.
pub trait MessageFormatter: Send + Sync {
    /// Format a message template into the final display string
    fn format(
        &self,
        message: &str,
        params: &TranslationParams,
        locale: &str,
        options: &FormatterOptions,
    ) -> String;
}

/// Options shared by all formatters
///
/// Never cached inside a formatter instance: the engine hands the current
/// value into every format call.
#[derive(Clone)]
pub struct FormatterOptions {
    /// Opening delimiter for interpolation markers
    pub open: String,
    /// Closing delimiter for interpolation markers
    pub close: String,
    /// Literal substring separating plural forms within one template
    pub pluralization_divider: String,
    /// Per-locale count-to-index functions
    pub pluralization_rules: PluralizationRules,
}

impl Default for FormatterOptions {
    fn default() -> Self {
        Self {
            open: "{$".to_string(),
            close: "}".to_string(),
            pluralization_divider: " | ".to_string(),
            pluralization_rules: HashMap::new(),
        }
    }
}

impl fmt::Debug for FormatterOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rule_locales: Vec<&str> = self
            .pluralization_rules
            .keys()
            .map(String::as_str)
            .collect();
        rule_locales.sort_unstable();
        f.debug_struct("FormatterOptions")
            .field("open", &self.open)
            .field("close", &self.close)
            .field("pluralization_divider", &self.pluralization_divider)
            .field("pluralization_rules", &rule_locales)
            .finish()
    }
}

/// Interpolation parameters for one translation call
///
/// Keys map to arbitrary JSON values. Insertion order is preserved and is
/// the order markers are replaced in, which keeps overlapping markers
/// deterministic. Positional parameters use the keys `"0"`, `"1"`, … and
/// the reserved `_count` key drives pluralization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationParams {
    entries: Vec<(String, Value)>,
}

impl TranslationParams {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a parameter set from positional values, keyed `"0"`, `"1"`, …
    pub fn from_positional<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let mut params = Self::new();
        for (index, value) in values.into_iter().enumerate() {
            params.insert(index.to_string(), value);
        }
        params
    }

    /// Insert a parameter, keeping the original position on duplicate keys
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Chained insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Chained insert of the `_count` parameter
    pub fn with_count(self, count: i64) -> Self {
        self.with(COUNT_PARAM, count)
    }

    /// Look up a parameter by name
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Whether a parameter name is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterate parameters in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The numeric `_count` value, if present and actually numeric
    ///
    /// A `_count` of any other JSON type does not request pluralization.
    pub fn count(&self) -> Option<i64> {
        let value = self.get(COUNT_PARAM)?;
        value
            .as_i64()
            .or_else(|| value.as_f64().map(|count| count as i64))
    }

    /// The `_locale` override, if present
    pub fn locale_override(&self) -> Option<&str> {
        self.get(LOCALE_PARAM).and_then(Value::as_str)
    }

    /// The `_namespace` prefix, if present
    pub fn namespace(&self) -> Option<&str> {
        self.get(NAMESPACE_PARAM).and_then(Value::as_str)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for TranslationParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}
