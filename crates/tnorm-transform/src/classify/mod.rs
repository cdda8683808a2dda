//! Column classifiers.
//!
//! Each classifier pairs a [`CellRule`] (how one value is accepted and
//! converted) with fit state (which columns it claimed). Fitting folds the
//! rule over every non-blank value of a candidate column; the first
//! rejection disqualifies the column. Transforming re-applies the rule to
//! the claimed columns only, and any rejection there aborts the call.
//!
//! Precedence between classifiers is [`ColumnKind::ALL`]:
//! numeric, date, string, boolean.

mod boolean;
mod date;
mod numeric;
mod string;

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tnorm_model::{Cell, Column, Table};

use crate::error::{Result, TransformError};

pub use boolean::BooleanRule;
pub use date::{DATE_FORMATS, DateRule, parse_date};
pub use numeric::{NumericRule, parse_number};
pub use string::{StringRule, parses_as_float};

/// Canonical type a classifier assigns to a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Numeric,
    Date,
    String,
    Boolean,
}

impl ColumnKind {
    /// All kinds in classification precedence order.
    pub const ALL: [ColumnKind; 4] = [
        ColumnKind::Numeric,
        ColumnKind::Date,
        ColumnKind::String,
        ColumnKind::Boolean,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Date => "date",
            Self::String => "string",
            Self::Boolean => "boolean",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a single value was refused by a classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("value is a boolean literal")]
    BooleanLiteral,
    #[error("value is date shaped")]
    DateShaped,
    #[error("value is not numeric")]
    NotNumeric,
    #[error("value matches neither YYYY-MM-DD nor YYYYMMDD")]
    NotDate,
    #[error("value is not True or False")]
    NotBoolean,
}

/// Acceptance and conversion rule for one canonical type.
pub trait CellRule {
    /// The kind of column this rule claims.
    const KIND: ColumnKind;

    /// Converts a non-blank cell, or explains why it is refused.
    fn convert(&self, cell: &Cell) -> std::result::Result<Cell, Rejection>;

    /// Cell written in place of blank values in a claimed column.
    fn null_cell(&self) -> Cell;

    /// Pre-probe hook. Returning false withholds the column from probing.
    fn admits(&self, _column: &Column) -> bool {
        true
    }
}

/// A [`CellRule`] together with the set of columns it claimed at fit time.
#[derive(Debug, Clone, Default)]
pub struct Classifier<R> {
    rule: R,
    fitted: Option<BTreeSet<String>>,
}

pub type NumericClassifier = Classifier<NumericRule>;
pub type DateClassifier = Classifier<DateRule>;
pub type StringClassifier = Classifier<StringRule>;
pub type BooleanClassifier = Classifier<BooleanRule>;

impl<R: CellRule> Classifier<R> {
    pub fn new(rule: R) -> Self {
        Self { rule, fitted: None }
    }

    /// Restores a classifier that was fitted elsewhere.
    pub fn from_fitted(rule: R, columns: BTreeSet<String>) -> Self {
        Self {
            rule,
            fitted: Some(columns),
        }
    }

    pub fn rule(&self) -> &R {
        &self.rule
    }

    pub fn kind(&self) -> ColumnKind {
        R::KIND
    }

    /// Columns claimed by the last fit, or `None` before any fit.
    pub fn fitted_columns(&self) -> Option<&BTreeSet<String>> {
        self.fitted.as_ref()
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    /// Probes every column of `table`.
    pub fn fit(&mut self, table: &Table) -> &BTreeSet<String> {
        let names: Vec<String> = table.columns().iter().map(|c| c.name.clone()).collect();
        self.fit_columns(table, &names)
    }

    /// Probes only the `candidates` columns of `table`, replacing any
    /// previous fit. Candidates absent from the table are ignored.
    pub fn fit_columns(&mut self, table: &Table, candidates: &[String]) -> &BTreeSet<String> {
        let stage = R::KIND.as_str();
        let mut claimed = BTreeSet::new();

        for name in candidates {
            let Some(column) = table.column(name) else {
                continue;
            };
            if !self.rule.admits(column) {
                tracing::debug!(stage, column = %name, "column withheld from probing");
                continue;
            }
            match self.probe(column) {
                Ok(()) => {
                    tracing::debug!(stage, column = %name, "claimed column");
                    claimed.insert(name.clone());
                }
                Err((row, reason)) => {
                    tracing::debug!(stage, column = %name, row, %reason, "rejected column");
                }
            }
        }

        tracing::debug!(
            stage,
            candidates = candidates.len(),
            claimed = claimed.len(),
            "classifier fitted"
        );
        self.fitted.insert(claimed)
    }

    /// Checks that every non-blank value of `column` is accepted.
    ///
    /// Returns the first rejected row and its reason.
    pub fn probe(&self, column: &Column) -> std::result::Result<(), (usize, Rejection)> {
        column.non_blank().try_for_each(|(row, cell)| {
            self.rule
                .convert(cell)
                .map(drop)
                .map_err(|reason| (row, reason))
        })
    }

    /// Rewrites the claimed columns of `table` into canonical cells.
    ///
    /// Unclaimed columns are copied unchanged. The input is never modified.
    pub fn transform(&self, table: &Table) -> Result<Table> {
        let stage = R::KIND.as_str();
        let fitted = self
            .fitted
            .as_ref()
            .ok_or(TransformError::UnfittedState { stage })?;

        let mut output = table.clone();
        for name in fitted {
            let column = table
                .column(name)
                .ok_or_else(|| TransformError::MissingColumn {
                    stage,
                    column: name.clone(),
                })?;
            let cells = self.convert_column(column)?;
            output.replace_cells(name, cells)?;
        }
        Ok(output)
    }

    pub fn fit_transform(&mut self, table: &Table) -> Result<Table> {
        self.fit(table);
        self.transform(table)
    }

    fn convert_column(&self, column: &Column) -> Result<Vec<Cell>> {
        column
            .cells
            .iter()
            .enumerate()
            .map(|(row, cell)| {
                if cell.is_blank() {
                    return Ok(self.rule.null_cell());
                }
                self.rule.convert(cell).map_err(|source| {
                    tracing::warn!(
                        stage = R::KIND.as_str(),
                        column = %column.name,
                        row,
                        %source,
                        "conversion failed, aborting transform"
                    );
                    TransformError::ConversionFailure {
                        stage: R::KIND.as_str(),
                        column: column.name.clone(),
                        row,
                        value: cell.text_form().into_owned(),
                        source,
                    }
                })
            })
            .collect()
    }
}

/// Object-safe view of a classifier, used to drive the four stages in order.
pub trait ColumnClassifier {
    fn kind(&self) -> ColumnKind;
    fn fit_columns(&mut self, table: &Table, candidates: &[String]) -> BTreeSet<String>;
    fn transform(&self, table: &Table) -> Result<Table>;
    fn fitted_columns(&self) -> Option<&BTreeSet<String>>;
}

impl<R: CellRule> ColumnClassifier for Classifier<R> {
    fn kind(&self) -> ColumnKind {
        R::KIND
    }

    fn fit_columns(&mut self, table: &Table, candidates: &[String]) -> BTreeSet<String> {
        Classifier::fit_columns(self, table, candidates).clone()
    }

    fn transform(&self, table: &Table) -> Result<Table> {
        Classifier::transform(self, table)
    }

    fn fitted_columns(&self) -> Option<&BTreeSet<String>> {
        Classifier::fitted_columns(self)
    }
}
