//! Default message formatter
//!
//! Implements pipe-delimited pluralization and delimiter-based variable
//! interpolation: `no items | one item | {$_count} items` with
//! `_count = 2` becomes `2 items`.

use serde_json::Value;
use super::{FormatterOptions, MessageFormatter, TranslationParams};

/// Formatter implementing the engine's native template syntax
///
/// Pluralization runs first when a numeric `_count` parameter is present,
/// then every parameter marker is interpolated, including `_count`
/// markers left inside the selected plural form.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMessageFormatter;

impl MessageFormatter for DefaultMessageFormatter {
    fn format(
        &self,
        message: &str,
        params: &TranslationParams,
        locale: &str,
        options: &FormatterOptions,
    ) -> String {
        let mut result = message.to_string();
        if let Some(count) = params.count() {
            result = pluralize(&result, locale, count, options);
        }
        interpolate(&result, params, options)
    }
}

/// Select a plural form by splitting on the pluralization divider
///
/// The index comes from the locale's registered rule, or the raw count
/// itself when no rule is registered. Out-of-range indices clamp to the
/// last form; that clamping is contract, not an error path.
fn pluralize(message: &str, locale: &str, count: i64, options: &FormatterOptions) -> String {
    let index = match options.pluralization_rules.get(locale) {
        Some(rule) => rule(count),
        None => count.max(0) as usize,
    };

    let forms: Vec<&str> = message.split(options.pluralization_divider.as_str()).collect();
    forms[index.min(forms.len() - 1)].to_string()
}

/// Replace every `open + key + close` marker with the parameter's value
///
/// Parameters are applied in insertion order, which makes textually
/// overlapping markers resolve deterministically.
fn interpolate(message: &str, params: &TranslationParams, options: &FormatterOptions) -> String {
    let mut result = message.to_string();
    for (key, value) in params.iter() {
        let marker = format!("{}{}{}", options.open, key, options.close);
        result = result.replace(&marker, &display_string(value));
    }
    result
}

/// Coerce a parameter value to its display form
fn display_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;
    use super::*;
    use crate::formatters::{PluralizationRules, COUNT_PARAM};

    fn format(message: &str, params: &TranslationParams, locale: &str) -> String {
        DefaultMessageFormatter.format(message, params, locale, &FormatterOptions::default())
    }

    #[test]
    fn test_interpolates_named_parameters() {
        let params = TranslationParams::new().with("name", "World");
        assert_eq!(format("Hello {$name}", &params, "en"), "Hello World");
    }

    #[test]
    fn test_interpolates_positional_parameters() {
        let params = TranslationParams::from_positional(["a", "b", "c"]);
        assert_eq!(
            format("First: {$0}, Third: {$2}", &params, "en"),
            "First: a, Third: c"
        );
    }

    #[test]
    fn test_replaces_every_occurrence() {
        let params = TranslationParams::new().with("x", "A");
        assert_eq!(format("{$x} and {$x}", &params, "en"), "A and A");
    }

    #[test]
    fn test_insertion_order_determinism() {
        let params = TranslationParams::new().with("a", "1").with("b", "2");
        assert_eq!(format("{$a}{$b}", &params, "en"), "12");
    }

    #[test]
    fn test_unmatched_markers_left_alone() {
        let params = TranslationParams::new().with("name", "World");
        assert_eq!(format("No markers here", &params, "en"), "No markers here");
        assert_eq!(format("Hi {$other}", &params, "en"), "Hi {$other}");
    }

    #[test]
    fn test_pluralization_raw_count_indexing() {
        let message = "no items | one item | {$_count} items";
        assert_eq!(
            format(message, &TranslationParams::new().with_count(0), "en"),
            "no items"
        );
        assert_eq!(
            format(message, &TranslationParams::new().with_count(1), "en"),
            "one item"
        );
        assert_eq!(
            format(message, &TranslationParams::new().with_count(2), "en"),
            "2 items"
        );
    }

    #[test]
    fn test_pluralization_clamps_to_last_form() {
        let params = TranslationParams::new().with_count(5);
        assert_eq!(format("a | b", &params, "en"), "b");

        let params = TranslationParams::new().with_count(10);
        assert_eq!(
            format("no items | one item | {$_count} items", &params, "en"),
            "10 items"
        );
    }

    #[test]
    fn test_negative_count_selects_first_form() {
        let params = TranslationParams::new().with_count(-3);
        assert_eq!(format("none | some", &params, "en"), "none");
    }

    #[test]
    fn test_string_count_does_not_pluralize() {
        let params = TranslationParams::new().with(COUNT_PARAM, "5");
        assert_eq!(
            format("X has {$_count} items", &params, "en"),
            "X has 5 items"
        );
    }

    #[test]
    fn test_locale_rule_selects_form() {
        let mut rules: PluralizationRules = HashMap::new();
        rules.insert(
            "pl-PL".to_string(),
            Arc::new(|count: i64| {
                let tens = count % 100;
                let units = tens % 10;
                if tens > 10 && tens < 20 {
                    return 2;
                }
                if units == 0 {
                    return 2;
                }
                if tens == 1 && units == 1 {
                    return 0;
                }
                if units > 1 && units < 5 {
                    return 1;
                }
                2
            }),
        );
        let options = FormatterOptions {
            pluralization_rules: rules,
            ..Default::default()
        };

        let message = "{$_count} telefon | {$_count} telefony | {$_count} telefonów";
        let cases = [(1, "1 telefon"), (2, "2 telefony"), (5, "5 telefonów"), (22, "22 telefony")];
        for (count, expected) in cases {
            let params = TranslationParams::new().with_count(count);
            assert_eq!(
                DefaultMessageFormatter.format(message, &params, "pl-PL", &options),
                expected
            );
        }
    }

    #[test]
    fn test_missing_rule_falls_back_to_raw_count() {
        let params = TranslationParams::new().with_count(2);
        assert_eq!(format("none | one | many", &params, "xx"), "many");
    }

    #[test]
    fn test_custom_delimiters() {
        let options = FormatterOptions {
            open: "{{".to_string(),
            close: "}}".to_string(),
            ..Default::default()
        };
        let params = TranslationParams::new().with("name", "World");
        assert_eq!(
            DefaultMessageFormatter.format("Hello {{name}}", &params, "en", &options),
            "Hello World"
        );
    }

    #[test]
    fn test_custom_divider() {
        let options = FormatterOptions {
            pluralization_divider: " ||| ".to_string(),
            ..Default::default()
        };
        let params = TranslationParams::new().with_count(1);
        assert_eq!(
            DefaultMessageFormatter.format("zero ||| one", &params, "en", &options),
            "one"
        );
        // The default divider is now just text, not a form separator
        assert_eq!(
            DefaultMessageFormatter.format("a | b", &params, "en", &options),
            "a | b"
        );
    }

    #[test]
    fn test_numeric_value_coercion() {
        let params = TranslationParams::new().with("n", 7).with("flag", true);
        assert_eq!(format("{$n}/{$flag}", &params, "en"), "7/true");
    }
}
