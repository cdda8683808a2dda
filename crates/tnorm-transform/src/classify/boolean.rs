//! Boolean classification.
//!
//! A value is boolean when its text form is `True` or `False`. Whether
//! `true`/`TRUE` also count is set by [`BooleanCase`]; the default is
//! case-insensitive. The pipeline hands the same case rule to the sentinel
//! normalizer, so a literal it leaves as text is one this rule refuses.

use tnorm_model::Cell;

use super::{CellRule, ColumnKind, Rejection};
use crate::options::{BooleanCase, NullRendering};
use crate::patterns::parse_boolean_literal;

/// Rule for [`crate::BooleanClassifier`]. Blank cells become `""`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanRule {
    null_rendering: NullRendering,
    case: BooleanCase,
}

impl BooleanRule {
    pub fn new(null_rendering: NullRendering, case: BooleanCase) -> Self {
        Self {
            null_rendering,
            case,
        }
    }
}

impl CellRule for BooleanRule {
    const KIND: ColumnKind = ColumnKind::Boolean;

    fn convert(&self, cell: &Cell) -> Result<Cell, Rejection> {
        parse_boolean_literal(&cell.text_form(), self.case)
            .map(Cell::Bool)
            .ok_or(Rejection::NotBoolean)
    }

    fn null_cell(&self) -> Cell {
        match self.null_rendering {
            NullRendering::Sentinel => Cell::text(""),
            NullRendering::Missing => Cell::Null,
        }
    }
}
