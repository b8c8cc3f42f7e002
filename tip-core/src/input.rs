//! Keystroke-level input filtering for the calculator's text fields.
//!
//! Every field in the UI is re-sanitized on each edit: the raw field text is
//! passed through [`sanitize`] and the cleaned result is written back, so the
//! visible text always satisfies that field's [`FieldRules`]. Invalid
//! characters are discarded silently; this layer never reports an error.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static NON_DECIMAL_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9.]").expect("literal pattern compiles"));
static NON_DIGIT_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9]").expect("literal pattern compiles"));

/// Shape constraints for one numeric text field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRules {
    /// Whether a decimal separator is permitted at all.
    pub allow_decimal: bool,
    /// Maximum digits before the separator; longer runs are truncated.
    pub max_integer_digits: usize,
    /// Maximum digits after the separator; longer runs are truncated.
    pub max_decimal_digits: usize,
}

/// Rules for the bill amount field: dollars and cents.
pub const BILL: FieldRules = FieldRules {
    allow_decimal: true,
    max_integer_digits: 7,
    max_decimal_digits: 2,
};

/// Rules for the custom tip percent field. Three integer digits cap entry at
/// 999.99; values over 100 are accepted.
pub const CUSTOM_TIP: FieldRules = FieldRules {
    allow_decimal: true,
    max_integer_digits: 3,
    max_decimal_digits: 2,
};

/// Rules for the people count field: whole numbers only.
pub const PEOPLE: FieldRules = FieldRules {
    allow_decimal: false,
    max_integer_digits: 6,
    max_decimal_digits: 0,
};

/// Filters raw field text down to a valid numeric string.
///
/// Characters outside the permitted set are dropped. When decimals are
/// allowed, the first `.` is the separator and any later dots are merged into
/// the fractional run. Both digit runs are truncated, never rounded, to the
/// field's bounds, and a separator with nothing after it is dropped.
///
/// The output is always either empty or parseable as a non-negative number.
pub fn sanitize(
    raw: &str,
    rules: &FieldRules,
) -> String {
    if !rules.allow_decimal {
        let digits = NON_DIGIT_CHARS.replace_all(raw, "");
        return clamp_digits(&digits, rules.max_integer_digits);
    }

    let stripped = NON_DECIMAL_CHARS.replace_all(raw, "");
    let (integer_run, fraction_run) = match stripped.split_once('.') {
        Some((integer, rest)) => (integer.to_string(), rest.replace('.', "")),
        None => (stripped.into_owned(), String::new()),
    };

    let integer = clamp_digits(&integer_run, rules.max_integer_digits);
    let fraction = clamp_digits(&fraction_run, rules.max_decimal_digits);

    if fraction.is_empty() {
        integer
    } else {
        format!("{integer}.{fraction}")
    }
}

/// Truncates a digit run to at most `max` characters.
fn clamp_digits(
    digits: &str,
    max: usize,
) -> String {
    digits.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn sanitize_strips_disallowed_characters() {
        assert_eq!(sanitize("12a.b50", &BILL), "12.50");
        assert_eq!(sanitize("$1,234.56", &BILL), "1234.56");
        assert_eq!(sanitize("-42", &BILL), "42");
    }

    #[test]
    fn sanitize_keeps_only_first_decimal_point() {
        assert_eq!(sanitize("1.2.3", &BILL), "1.23");
        assert_eq!(sanitize("1..5", &BILL), "1.5");
        assert_eq!(sanitize("...", &BILL), "");
    }

    #[test]
    fn sanitize_truncates_integer_run() {
        assert_eq!(sanitize("123456789", &BILL), "1234567");
        assert_eq!(sanitize("1234.5", &CUSTOM_TIP), "123.5");
    }

    #[test]
    fn sanitize_truncates_fraction_run() {
        assert_eq!(sanitize("1.999", &BILL), "1.99");
        assert_eq!(sanitize("0.12345", &CUSTOM_TIP), "0.12");
    }

    #[test]
    fn sanitize_drops_trailing_separator() {
        assert_eq!(sanitize("12.", &BILL), "12");
        assert_eq!(sanitize(".", &BILL), "");
    }

    #[test]
    fn sanitize_keeps_leading_separator_with_fraction() {
        assert_eq!(sanitize(".5", &BILL), ".5");
    }

    #[test]
    fn sanitize_integer_only_field_drops_separator_and_fraction() {
        assert_eq!(sanitize("4.7", &PEOPLE), "47");
        assert_eq!(sanitize("12people", &PEOPLE), "12");
        assert_eq!(sanitize("1234567", &PEOPLE), "123456");
    }

    #[test]
    fn sanitize_empty_and_garbage_input_yield_empty() {
        assert_eq!(sanitize("", &BILL), "");
        assert_eq!(sanitize("abc!@#", &BILL), "");
        assert_eq!(sanitize("abc", &PEOPLE), "");
    }

    #[test]
    fn sanitize_output_always_respects_bounds() {
        let rules = FieldRules {
            allow_decimal: true,
            max_integer_digits: 3,
            max_decimal_digits: 1,
        };
        for raw in ["9876.54321", "....9999", "00000", "a1b2c3d4.e5f6"] {
            let clean = sanitize(raw, &rules);
            let (integer, fraction) = clean.split_once('.').unwrap_or((clean.as_str(), ""));
            assert!(integer.len() <= 3, "integer run too long in {clean:?}");
            assert!(fraction.len() <= 1, "fraction run too long in {clean:?}");
            assert!(clean.matches('.').count() <= 1);
        }
    }
}
