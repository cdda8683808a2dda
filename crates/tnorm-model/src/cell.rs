//! Cell values.
//!
//! A [`Cell`] is either a raw input value (text, number, boolean or missing)
//! or the canonical output of a classifier. Both share one enum so that a
//! table can be fed back through the pipeline unchanged.

use std::borrow::Cow;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single table value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Cell {
    /// Missing value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Numeric value (64-bit float).
    Number(f64),
    /// Calendar date.
    Date(NaiveDate),
    /// Free text.
    Text(String),
}

impl Cell {
    /// Creates a text cell.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Returns true for [`Cell::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true for null cells and empty or whitespace-only text.
    ///
    /// Classifiers treat blank cells as "no value" and never probe them.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Renders the value as the text the classifiers match against.
    ///
    /// Booleans render as `True`/`False`, numbers without trailing zeros and
    /// dates as `YYYY-MM-DD`. Null renders as the empty string.
    pub fn text_form(&self) -> Cow<'_, str> {
        match self {
            Self::Null => Cow::Borrowed(""),
            Self::Bool(true) => Cow::Borrowed("True"),
            Self::Bool(false) => Cow::Borrowed("False"),
            Self::Number(v) => Cow::Owned(format_numeric(*v)),
            Self::Date(d) => Cow::Owned(d.format("%Y-%m-%d").to_string()),
            Self::Text(s) => Cow::Borrowed(s),
        }
    }

    /// Short lowercase name of the variant, used in logs and errors.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::Date(_) => "date",
            Self::Text(_) => "text",
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text_form())
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Integers beyond ±2^53 are rounded to the nearest `f64`; cells hold a
/// single numeric representation.
impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<NaiveDate> for Cell {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Renders a number as the text form the classifiers match against.
///
/// This is the shortest decimal that parses back to the same `f64`, so
/// integral values carry no fractional part and a compact date stored as a
/// number (`20230629.0`) still reads as `20230629`. Negative zero renders as
/// `0`. Non-finite values keep Rust's spelling: `NaN` is a null marker and
/// `inf` parses as a number.
///
/// ```
/// use tnorm_model::format_numeric;
///
/// assert_eq!(format_numeric(20230629.0), "20230629");
/// assert_eq!(format_numeric(3.8), "3.8");
/// assert_eq!(format_numeric(-0.0), "0");
/// ```
pub fn format_numeric(v: f64) -> String {
    if v == 0.0 {
        "0".to_string()
    } else {
        v.to_string()
    }
}
