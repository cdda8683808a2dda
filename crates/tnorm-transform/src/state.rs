//! Immutable result of a pipeline fit.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::classify::ColumnKind;
use crate::error::Result;
use crate::options::PipelineOptions;

/// Columns seen at fit time and which classifier claimed each of them.
///
/// Created by [`crate::TypePipeline::fit`] and never updated afterwards;
/// re-fitting builds a new state. Serializable so a fit can be stored and
/// restored with [`crate::TypePipeline::from_state`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FittedState {
    /// Options the pipeline was fitted with.
    pub options: PipelineOptions,
    /// Column names in table order.
    pub columns: Vec<String>,
    /// Columns admitted by the sentinel normalizer.
    pub normalized: BTreeSet<String>,
    pub numeric: BTreeSet<String>,
    pub date: BTreeSet<String>,
    pub string: BTreeSet<String>,
    pub boolean: BTreeSet<String>,
}

impl FittedState {
    /// Columns claimed by one classifier.
    pub fn claimed(&self, kind: ColumnKind) -> &BTreeSet<String> {
        match kind {
            ColumnKind::Numeric => &self.numeric,
            ColumnKind::Date => &self.date,
            ColumnKind::String => &self.string,
            ColumnKind::Boolean => &self.boolean,
        }
    }

    pub(crate) fn claimed_mut(&mut self, kind: ColumnKind) -> &mut BTreeSet<String> {
        match kind {
            ColumnKind::Numeric => &mut self.numeric,
            ColumnKind::Date => &mut self.date,
            ColumnKind::String => &mut self.string,
            ColumnKind::Boolean => &mut self.boolean,
        }
    }

    /// Every classifier that claimed `column`, in precedence order.
    ///
    /// At most one in exclusive ownership mode.
    pub fn owners(&self, column: &str) -> Vec<ColumnKind> {
        ColumnKind::ALL
            .into_iter()
            .filter(|kind| self.claimed(*kind).contains(column))
            .collect()
    }

    /// The highest-precedence classifier that claimed `column`.
    pub fn owner(&self, column: &str) -> Option<ColumnKind> {
        ColumnKind::ALL
            .into_iter()
            .find(|kind| self.claimed(*kind).contains(column))
    }

    /// Columns no classifier claimed. They keep their normalized cells.
    pub fn unclaimed(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|name| self.owner(name).is_none())
            .map(String::as_str)
            .collect()
    }

    /// One `column: kind` line per column, in table order.
    pub fn summary(&self) -> String {
        self.columns
            .iter()
            .map(|name| {
                let owners = self.owners(name);
                let kinds = if owners.is_empty() {
                    "unclaimed".to_string()
                } else {
                    owners
                        .into_iter()
                        .map(ColumnKind::as_str)
                        .collect::<Vec<_>>()
                        .join(", ")
                };
                format!("{name}: {kinds}\n")
            })
            .collect()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
