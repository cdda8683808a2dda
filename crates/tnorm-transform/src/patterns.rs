//! Compiled literal patterns shared by the normalizer and the classifiers.

use std::sync::LazyLock;

use regex::Regex;

use crate::options::BooleanCase;

/// Null markers: `NA`, `N/A`, `n.a.`, `NaN`, `NaT`, `None`, `null.` and friends.
static NULL_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:N[./]*A[./]*[NT]?[./]*|none\.?|null\.?)$").expect("Invalid null regex")
});

static EMPTY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*$").expect("Invalid empty regex"));

static TRUE_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^true$").expect("Invalid true regex"));

static FALSE_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^false$").expect("Invalid false regex"));

/// Eight digits, optionally hyphenated as `YYYY-MM-DD`.
static DATE_SHAPED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-?\d{2}-?\d{2}$").expect("Invalid date regex"));

pub fn is_null_marker(text: &str) -> bool {
    NULL_MARKER.is_match(text)
}

pub fn is_empty(text: &str) -> bool {
    EMPTY.is_match(text)
}

pub fn is_true_literal(text: &str) -> bool {
    TRUE_LITERAL.is_match(text)
}

pub fn is_false_literal(text: &str) -> bool {
    FALSE_LITERAL.is_match(text)
}

/// Case-insensitive `True` or `False`.
pub fn is_boolean_literal(text: &str) -> bool {
    is_true_literal(text) || is_false_literal(text)
}

/// Reads a `True`/`False` literal under the given case rule.
///
/// Shared by the sentinel normalizer and the boolean classifier so both
/// stages agree on what counts as a boolean.
pub fn parse_boolean_literal(text: &str, case: BooleanCase) -> Option<bool> {
    match case {
        BooleanCase::Sensitive => match text {
            "True" => Some(true),
            "False" => Some(false),
            _ => None,
        },
        BooleanCase::Insensitive if is_true_literal(text) => Some(true),
        BooleanCase::Insensitive if is_false_literal(text) => Some(false),
        BooleanCase::Insensitive => None,
    }
}

pub fn is_date_shaped(text: &str) -> bool {
    DATE_SHAPED.is_match(text)
}
