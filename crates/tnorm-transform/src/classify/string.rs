//! Generic text classification.
//!
//! Any value is accepted as text unless it is a boolean literal or date
//! shaped, so columns eligible for the boolean or date classifiers are not
//! swallowed as free text.

use tnorm_model::{Cell, Column};

use super::{CellRule, ColumnKind, Rejection};
use crate::options::NullRendering;
use crate::patterns::{is_boolean_literal, is_date_shaped};

/// Returns true if the cell converts to a float the permissive way:
/// numbers and booleans always do, text when it parses.
pub fn parses_as_float(cell: &Cell) -> bool {
    match cell {
        Cell::Number(_) | Cell::Bool(_) => true,
        Cell::Text(s) => s.trim().parse::<f64>().is_ok(),
        Cell::Null | Cell::Date(_) => false,
    }
}

/// Rule for [`crate::StringClassifier`]. Blank cells become `" "`.
///
/// Before probing, every column runs through a float probe. Its outcome is
/// logged; it only withholds the column when `float_probe_excludes` is set.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringRule {
    null_rendering: NullRendering,
    float_probe_excludes: bool,
}

impl StringRule {
    pub fn new(null_rendering: NullRendering, float_probe_excludes: bool) -> Self {
        Self {
            null_rendering,
            float_probe_excludes,
        }
    }
}

impl CellRule for StringRule {
    const KIND: ColumnKind = ColumnKind::String;

    fn convert(&self, cell: &Cell) -> Result<Cell, Rejection> {
        let text = cell.text_form();
        if is_boolean_literal(&text) {
            return Err(Rejection::BooleanLiteral);
        }
        if is_date_shaped(&text) {
            return Err(Rejection::DateShaped);
        }
        Ok(Cell::Text(text.into_owned()))
    }

    fn null_cell(&self) -> Cell {
        match self.null_rendering {
            NullRendering::Sentinel => Cell::text(" "),
            NullRendering::Missing => Cell::Null,
        }
    }

    fn admits(&self, column: &Column) -> bool {
        let all_float = column.non_blank().all(|(_, cell)| parses_as_float(cell));
        tracing::debug!(column = %column.name, all_float, "string float probe");
        !(self.float_probe_excludes && all_float)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_text_and_numbers() {
        let rule = StringRule::default();
        assert_eq!(rule.convert(&Cell::text("abc")), Ok(Cell::text("abc")));
        assert_eq!(rule.convert(&Cell::Number(1234.0)), Ok(Cell::text("1234")));
        assert_eq!(rule.convert(&Cell::text("234")), Ok(Cell::text("234")));
    }

    #[test]
    fn test_rejects_boolean_and_date_shapes() {
        let rule = StringRule::default();
        assert_eq!(rule.convert(&Cell::text("TRUE")), Err(Rejection::BooleanLiteral));
        assert_eq!(rule.convert(&Cell::Bool(true)), Err(Rejection::BooleanLiteral));
        assert_eq!(rule.convert(&Cell::text("20230630")), Err(Rejection::DateShaped));
    }

    #[test]
    fn test_float_probe_is_advisory_by_default() {
        let column = Column::new("n", vec!["1".into(), Cell::Number(2.5)]);
        assert!(StringRule::default().admits(&column));
        assert!(!StringRule::new(NullRendering::Sentinel, true).admits(&column));
    }

    #[test]
    fn test_float_probe_fails_on_text() {
        let column = Column::new("c", vec!["1".into(), "abc".into()]);
        assert!(StringRule::new(NullRendering::Sentinel, true).admits(&column));
    }

    #[test]
    fn test_parses_as_float() {
        assert!(parses_as_float(&Cell::text(" 3.8 ")));
        assert!(parses_as_float(&Cell::Bool(false)));
        assert!(!parses_as_float(&Cell::text("cde")));
    }
}
