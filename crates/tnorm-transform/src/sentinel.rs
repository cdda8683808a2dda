//! Null, empty and boolean sentinel normalization.
//!
//! Runs before any classifier and on every column, whoever owns it. Each
//! cell's text form is matched once against four rules, first match wins:
//!
//! 1. null marker (`NA`, `N/A`, `n.a.`, `NaN`, `None`, `null`, ...) → `Null`
//! 2. empty or whitespace-only → `Null`
//! 3. `True` → `Bool(true)`
//! 4. `False` → `Bool(false)`
//!
//! Literals 3 and 4 match in any case under [`BooleanCase::Insensitive`] and
//! only as spelled under [`BooleanCase::Sensitive`]. Anything else passes
//! through untouched, or as text in [`SentinelMode::ForceText`].

use std::collections::BTreeSet;

use tnorm_model::{Cell, Table};

use crate::error::{Result, TransformError};
use crate::options::{BooleanCase, SentinelMode};
use crate::patterns::{is_empty, is_null_marker, parse_boolean_literal};

const STAGE: &str = "sentinel";

/// Normalizes a single cell. Idempotent.
pub fn normalize_cell(cell: &Cell, mode: SentinelMode, case: BooleanCase) -> Cell {
    if cell.is_null() {
        return Cell::Null;
    }
    let text = cell.text_form();
    let normalized = if is_null_marker(&text) || is_empty(&text) {
        Cell::Null
    } else if let Some(value) = parse_boolean_literal(&text, case) {
        Cell::Bool(value)
    } else {
        cell.clone()
    };

    match (mode, normalized) {
        (SentinelMode::ForceText, Cell::Null) => Cell::Null,
        (SentinelMode::ForceText, other) => Cell::Text(other.text_form().into_owned()),
        (SentinelMode::Basic, other) => other,
    }
}

/// First pipeline stage: maps sentinel markers to canonical null/boolean cells.
#[derive(Debug, Clone, Default)]
pub struct SentinelNormalizer {
    mode: SentinelMode,
    case: BooleanCase,
    fitted: Option<BTreeSet<String>>,
}

impl SentinelNormalizer {
    pub fn new(mode: SentinelMode) -> Self {
        Self {
            mode,
            case: BooleanCase::default(),
            fitted: None,
        }
    }

    /// Restores a normalizer that was fitted elsewhere.
    pub fn from_fitted(mode: SentinelMode, columns: BTreeSet<String>) -> Self {
        Self {
            mode,
            case: BooleanCase::default(),
            fitted: Some(columns),
        }
    }

    /// Sets which spellings of `True`/`False` become boolean cells.
    #[must_use]
    pub fn with_boolean_case(mut self, case: BooleanCase) -> Self {
        self.case = case;
        self
    }

    pub fn mode(&self) -> SentinelMode {
        self.mode
    }

    pub fn boolean_case(&self) -> BooleanCase {
        self.case
    }

    pub fn fitted_columns(&self) -> Option<&BTreeSet<String>> {
        self.fitted.as_ref()
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    /// Records the columns to normalize.
    ///
    /// [`normalize_cell`] is total, so probing can never disqualify a column
    /// and every column of `table` is admitted. The exclusion path kept by
    /// the classifiers has no counterpart here.
    pub fn fit(&mut self, table: &Table) -> &BTreeSet<String> {
        let columns: BTreeSet<String> = table.columns().iter().map(|c| c.name.clone()).collect();
        tracing::debug!(stage = STAGE, columns = columns.len(), "normalizer fitted");
        self.fitted.insert(columns)
    }

    /// Normalizes the fitted columns of `table` into a new table.
    pub fn transform(&self, table: &Table) -> Result<Table> {
        let fitted = self
            .fitted
            .as_ref()
            .ok_or(TransformError::UnfittedState { stage: STAGE })?;

        let mut output = table.clone();
        for name in fitted {
            let column = table
                .column(name)
                .ok_or_else(|| TransformError::MissingColumn {
                    stage: STAGE,
                    column: name.clone(),
                })?;
            let cells = column
                .cells
                .iter()
                .map(|cell| normalize_cell(cell, self.mode, self.case))
                .collect();
            output.replace_cells(name, cells)?;
        }
        Ok(output)
    }

    pub fn fit_transform(&mut self, table: &Table) -> Result<Table> {
        self.fit(table);
        self.transform(table)
    }

    /// Normalizes every column of `table` without consulting fit state.
    pub fn normalize_table(&self, table: &Table) -> Table {
        table.map_cells(|cell| normalize_cell(cell, self.mode, self.case))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basic(cell: impl Into<Cell>) -> Cell {
        normalize_cell(&cell.into(), SentinelMode::Basic, BooleanCase::Insensitive)
    }

    #[test]
    fn test_null_markers_become_null() {
        for marker in ["N/A", "n.a.", "NA", "None", "null", "NULL", "nan", "NaT"] {
            assert_eq!(basic(marker), Cell::Null, "{marker}");
        }
        assert_eq!(basic(f64::NAN), Cell::Null);
    }

    #[test]
    fn test_blank_becomes_null() {
        assert_eq!(basic(""), Cell::Null);
        assert_eq!(basic(" "), Cell::Null);
        assert_eq!(basic("\t"), Cell::Null);
        assert_eq!(basic(Cell::Null), Cell::Null);
    }

    #[test]
    fn test_boolean_literals() {
        assert_eq!(basic("True"), Cell::Bool(true));
        assert_eq!(basic("true"), Cell::Bool(true));
        assert_eq!(basic("False"), Cell::Bool(false));
        assert_eq!(basic("false"), Cell::Bool(false));
        assert_eq!(basic(true), Cell::Bool(true));
    }

    #[test]
    fn test_other_values_unchanged() {
        assert_eq!(basic("123"), Cell::text("123"));
        assert_eq!(basic(2.5), Cell::Number(2.5));
        assert_eq!(basic("abc"), Cell::text("abc"));
    }

    #[test]
    fn test_sensitive_case_keeps_lowercase_text() {
        let sensitive = |cell: Cell| normalize_cell(&cell, SentinelMode::Basic, BooleanCase::Sensitive);
        assert_eq!(sensitive(Cell::text("True")), Cell::Bool(true));
        assert_eq!(sensitive(Cell::text("true")), Cell::text("true"));
        assert_eq!(sensitive(Cell::text("FALSE")), Cell::text("FALSE"));
        assert_eq!(sensitive(Cell::Bool(false)), Cell::Bool(false));
        assert_eq!(sensitive(Cell::text("null")), Cell::Null);
    }

    #[test]
    fn test_force_text_casts_survivors() {
        let force =
            |cell: Cell| normalize_cell(&cell, SentinelMode::ForceText, BooleanCase::Insensitive);
        assert_eq!(force(Cell::Number(2.5)), Cell::text("2.5"));
        assert_eq!(force(Cell::text("true")), Cell::text("True"));
        assert_eq!(force(Cell::text("NA")), Cell::Null);
    }

    #[test]
    fn test_fit_admits_every_column() {
        let table = Table::default()
            .with_column("a", vec!["NA".into()])
            .and_then(|t| t.with_column("b", vec![1.0.into()]))
            .unwrap();
        let mut normalizer = SentinelNormalizer::default();
        assert_eq!(normalizer.fit(&table).len(), 2);
    }

    #[test]
    fn test_transform_requires_fit() {
        let table = Table::default().with_column("a", vec!["NA".into()]).unwrap();
        assert!(matches!(
            SentinelNormalizer::default().transform(&table),
            Err(TransformError::UnfittedState { stage: "sentinel" })
        ));
    }

    #[test]
    fn test_transform_is_idempotent() {
        let table = Table::default()
            .with_column("a", vec!["NA".into(), " ".into(), "x".into(), "TRUE".into()])
            .unwrap();
        let mut normalizer = SentinelNormalizer::default();
        let once = normalizer.fit_transform(&table).unwrap();
        let twice = normalizer.transform(&once).unwrap();
        assert_eq!(once, twice);
        assert_eq!(
            once.column("a").unwrap().cells,
            vec![Cell::Null, Cell::Null, "x".into(), Cell::Bool(true)]
        );
    }
}
