//! Fit/transform orchestration.
//!
//! [`TypePipeline`] runs the sentinel normalizer and then the four
//! classifiers in fixed precedence (numeric, date, string, boolean).
//!
//! # Lifecycle
//!
//! - **Unfitted**: `transform` fails with [`TransformError::UnfittedState`].
//! - **Fitted**: after `fit`, `transform` may be called any number of times
//!   on tables with the same columns. Calling `fit` again replaces the state.
//!
//! # Ownership
//!
//! In [`OwnershipMode::Exclusive`] every classifier probes the normalized
//! table, but only over the columns no earlier classifier claimed, so each
//! column has at most one owner. In [`OwnershipMode::Independent`] each
//! classifier probes every column of the previous stage's output, the way a
//! chained fit/transform pipeline behaves; a column may then be rewritten by
//! more than one stage.

use tnorm_model::Table;

use crate::classify::{
    BooleanClassifier, BooleanRule, ColumnClassifier, DateClassifier, DateRule, NumericClassifier,
    NumericRule, StringClassifier, StringRule,
};
use crate::error::{Result, TransformError};
use crate::options::{OwnershipMode, PipelineOptions};
use crate::sentinel::SentinelNormalizer;
use crate::state::FittedState;

/// The normalizer plus the four classifiers, configured from one set of options.
struct Stages {
    sentinel: SentinelNormalizer,
    numeric: NumericClassifier,
    date: DateClassifier,
    string: StringClassifier,
    boolean: BooleanClassifier,
}

impl Stages {
    fn new(options: &PipelineOptions) -> Self {
        let (numeric, date, string, boolean) = rules(options);
        Self {
            sentinel: SentinelNormalizer::new(options.sentinel_mode)
                .with_boolean_case(options.boolean_case),
            numeric: NumericClassifier::new(numeric),
            date: DateClassifier::new(date),
            string: StringClassifier::new(string),
            boolean: BooleanClassifier::new(boolean),
        }
    }

    fn from_state(state: &FittedState) -> Self {
        let options = &state.options;
        let (numeric, date, string, boolean) = rules(options);
        Self {
            sentinel: SentinelNormalizer::from_fitted(
                options.sentinel_mode,
                state.normalized.clone(),
            )
            .with_boolean_case(options.boolean_case),
            numeric: NumericClassifier::from_fitted(numeric, state.numeric.clone()),
            date: DateClassifier::from_fitted(date, state.date.clone()),
            string: StringClassifier::from_fitted(string, state.string.clone()),
            boolean: BooleanClassifier::from_fitted(boolean, state.boolean.clone()),
        }
    }

    fn classifiers(&self) -> [&dyn ColumnClassifier; 4] {
        [&self.numeric, &self.date, &self.string, &self.boolean]
    }

    fn classifiers_mut(&mut self) -> [&mut dyn ColumnClassifier; 4] {
        [
            &mut self.numeric,
            &mut self.date,
            &mut self.string,
            &mut self.boolean,
        ]
    }
}

fn rules(options: &PipelineOptions) -> (NumericRule, DateRule, StringRule, BooleanRule) {
    (
        NumericRule::new(options.null_rendering),
        DateRule::new(options.null_rendering, options.date_rendering),
        StringRule::new(options.null_rendering, options.float_probe_excludes_strings),
        BooleanRule::new(options.null_rendering, options.boolean_case),
    )
}

/// Infers one canonical type per column and rewrites cells accordingly.
///
/// # Example
///
/// ```
/// use tnorm_model::{Cell, Table};
/// use tnorm_transform::{ColumnKind, TypePipeline};
///
/// let table = Table::default()
///     .with_column("Numerical", vec!["123".into(), "NA".into(), 2.5.into()])
///     .unwrap();
///
/// let mut pipeline = TypePipeline::default();
/// let state = pipeline.fit(&table).unwrap();
/// assert_eq!(state.owner("Numerical"), Some(ColumnKind::Numeric));
///
/// let output = pipeline.transform(&table).unwrap();
/// assert_eq!(
///     output.column("Numerical").unwrap().cells,
///     vec![Cell::Number(123.0), Cell::text(""), Cell::Number(2.5)]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct TypePipeline {
    options: PipelineOptions,
    state: Option<FittedState>,
}

impl TypePipeline {
    pub fn new(options: PipelineOptions) -> Self {
        Self {
            options,
            state: None,
        }
    }

    /// Rebuilds a fitted pipeline from a stored state.
    pub fn from_state(state: FittedState) -> Self {
        Self {
            options: state.options,
            state: Some(state),
        }
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    pub fn state(&self) -> Option<&FittedState> {
        self.state.as_ref()
    }

    pub fn is_fitted(&self) -> bool {
        self.state.is_some()
    }

    /// Decides the owner of every column of `table`.
    ///
    /// Probe failures only exclude columns and never surface here. In
    /// independent mode each stage's output feeds the next stage's probe; that
    /// rewrite only touches values the stage has just accepted, and any error
    /// from it is returned as is. On error the previous state is kept.
    pub fn fit(&mut self, table: &Table) -> Result<&FittedState> {
        tracing::info!(
            columns = table.width(),
            rows = table.height(),
            ownership = ?self.options.ownership_mode,
            sentinel = ?self.options.sentinel_mode,
            "fitting type pipeline"
        );

        let mut stages = Stages::new(&self.options);
        let mut state = FittedState {
            options: self.options,
            columns: table.columns().iter().map(|c| c.name.clone()).collect(),
            normalized: stages.sentinel.fit(table).clone(),
            ..FittedState::default()
        };
        let normalized = stages.sentinel.normalize_table(table);

        match self.options.ownership_mode {
            OwnershipMode::Exclusive => {
                let mut unclaimed = state.columns.clone();
                for classifier in stages.classifiers_mut() {
                    let claimed = classifier.fit_columns(&normalized, &unclaimed);
                    unclaimed.retain(|name| !claimed.contains(name));
                    *state.claimed_mut(classifier.kind()) = claimed;
                }
            }
            OwnershipMode::Independent => {
                let mut current = normalized;
                for classifier in stages.classifiers_mut() {
                    let claimed = classifier.fit_columns(&current, &state.columns);
                    *state.claimed_mut(classifier.kind()) = claimed;
                    current = classifier.transform(&current)?;
                }
            }
        }

        tracing::info!(
            numeric = state.numeric.len(),
            date = state.date.len(),
            string = state.string.len(),
            boolean = state.boolean.len(),
            unclaimed = state.unclaimed().len(),
            "type pipeline fitted"
        );
        Ok(&*self.state.insert(state))
    }

    /// Applies the fitted rewrites to `table`, producing a new table.
    ///
    /// The sentinel normalizer runs first on every fitted column, then each
    /// classifier on the columns it claimed. Any conversion failure aborts
    /// the whole call.
    pub fn transform(&self, table: &Table) -> Result<Table> {
        let state = self
            .state
            .as_ref()
            .ok_or(TransformError::UnfittedState { stage: "pipeline" })?;
        let stages = Stages::from_state(state);

        let mut output = stages.sentinel.transform(table)?;
        for classifier in stages.classifiers() {
            output = classifier.transform(&output)?;
        }
        Ok(output)
    }

    pub fn fit_transform(&mut self, table: &Table) -> Result<Table> {
        self.fit(table)?;
        self.transform(table)
    }
}
