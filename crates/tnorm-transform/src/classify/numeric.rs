//! Numeric classification.
//!
//! A value is numeric when its text form parses as a float and is neither a
//! boolean literal nor date shaped. Without the exclusions, booleans and
//! compact dates such as `20230101` would parse as numbers.

use tnorm_model::Cell;

use super::{CellRule, ColumnKind, Rejection};
use crate::options::NullRendering;
use crate::patterns::{is_boolean_literal, is_date_shaped};

/// Parses a cell as a number under the numeric acceptance rule.
///
/// Surrounding whitespace is ignored. `inf` and `NaN` spellings are
/// accepted as they are by `f64::from_str`.
pub fn parse_number(cell: &Cell) -> Result<f64, Rejection> {
    let text = cell.text_form();
    if is_boolean_literal(&text) {
        return Err(Rejection::BooleanLiteral);
    }
    if is_date_shaped(&text) {
        return Err(Rejection::DateShaped);
    }
    match cell {
        Cell::Number(v) => Ok(*v),
        _ => text.trim().parse::<f64>().map_err(|_| Rejection::NotNumeric),
    }
}

/// Rule for [`crate::NumericClassifier`]. Blank cells become `""`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericRule {
    null_rendering: NullRendering,
}

impl NumericRule {
    pub fn new(null_rendering: NullRendering) -> Self {
        Self { null_rendering }
    }
}

impl CellRule for NumericRule {
    const KIND: ColumnKind = ColumnKind::Numeric;

    fn convert(&self, cell: &Cell) -> Result<Cell, Rejection> {
        parse_number(cell).map(Cell::Number)
    }

    fn null_cell(&self) -> Cell {
        match self.null_rendering {
            NullRendering::Sentinel => Cell::text(""),
            NullRendering::Missing => Cell::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text() {
        assert_eq!(parse_number(&Cell::text("123")), Ok(123.0));
        assert_eq!(parse_number(&Cell::text(" -45.67 ")), Ok(-45.67));
        assert_eq!(parse_number(&Cell::text("1.5E-3")), Ok(0.0015));
    }

    #[test]
    fn test_parse_number_cell() {
        assert_eq!(parse_number(&Cell::Number(2.5)), Ok(2.5));
    }

    #[test]
    fn test_rejects_boolean_literals() {
        assert_eq!(parse_number(&Cell::text("true")), Err(Rejection::BooleanLiteral));
        assert_eq!(parse_number(&Cell::Bool(false)), Err(Rejection::BooleanLiteral));
    }

    #[test]
    fn test_rejects_date_shapes() {
        assert_eq!(parse_number(&Cell::text("20230101")), Err(Rejection::DateShaped));
        assert_eq!(parse_number(&Cell::text("2023-01-01")), Err(Rejection::DateShaped));
        assert_eq!(parse_number(&Cell::Number(20230101.0)), Err(Rejection::DateShaped));
    }

    #[test]
    fn test_rejects_text() {
        assert_eq!(parse_number(&Cell::text("abc")), Err(Rejection::NotNumeric));
        assert_eq!(parse_number(&Cell::text("1,234")), Err(Rejection::NotNumeric));
    }

    #[test]
    fn test_null_cell() {
        assert_eq!(NumericRule::default().null_cell(), Cell::text(""));
        assert_eq!(NumericRule::new(NullRendering::Missing).null_cell(), Cell::Null);
    }
}
