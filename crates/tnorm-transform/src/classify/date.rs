//! Date classification.
//!
//! Two layouts are recognised, tried in order: `YYYY-MM-DD`, then the
//! compact `YYYYMMDD`. Both normalize to the same calendar date.

use chrono::NaiveDate;
use tnorm_model::Cell;

use super::{CellRule, ColumnKind, Rejection};
use crate::options::{DateRendering, NullRendering};

/// Accepted input layouts, in the order they are tried.
pub const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y%m%d"];

/// Parses text against [`DATE_FORMATS`]; the first layout that fits wins.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
}

/// Rule for [`crate::DateClassifier`]. Blank cells become `" "`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateRule {
    null_rendering: NullRendering,
    date_rendering: DateRendering,
}

impl DateRule {
    pub fn new(null_rendering: NullRendering, date_rendering: DateRendering) -> Self {
        Self {
            null_rendering,
            date_rendering,
        }
    }
}

impl CellRule for DateRule {
    const KIND: ColumnKind = ColumnKind::Date;

    fn convert(&self, cell: &Cell) -> Result<Cell, Rejection> {
        let date = parse_date(&cell.text_form()).ok_or(Rejection::NotDate)?;
        Ok(match self.date_rendering {
            DateRendering::IsoText => Cell::Text(date.format("%Y-%m-%d").to_string()),
            DateRendering::Value => Cell::Date(date),
        })
    }

    fn null_cell(&self) -> Cell {
        match self.null_rendering {
            NullRendering::Sentinel => Cell::text(" "),
            NullRendering::Missing => Cell::Null,
        }
    }
}
