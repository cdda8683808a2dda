//! Column type inference and value normalization.
//!
//! Raw tabular data arrives with loosely typed cells. This crate decides one
//! canonical type per column (numeric, date, string or boolean) and rewrites
//! every value of that column into it, with a two-phase contract: `fit`
//! inspects a table and records which columns each stage claims, `transform`
//! applies exactly those rewrites to a table with the same columns.
//!
//! # Overview
//!
//! - **Sentinel normalization**: null markers, blanks and `True`/`False`
//!   literals become canonical cells on every column
//! - **Classification**: four classifiers probe columns in precedence order
//!   and claim those whose every non-blank value they accept
//! - **Pipeline**: [`TypePipeline`] chains the stages and owns the
//!   [`FittedState`]
//!
//! # Example
//!
//! ```
//! use tnorm_model::{Cell, Table};
//! use tnorm_transform::{ColumnKind, PipelineOptions, TypePipeline};
//!
//! let table = Table::default()
//!     .with_column("flag", vec!["True".into(), "N/A".into(), "false".into()])
//!     .and_then(|t| t.with_column("day", vec!["20230630".into(), " ".into(), "2023-07-01".into()]))
//!     .unwrap();
//!
//! let mut pipeline = TypePipeline::new(PipelineOptions::default());
//! let output = pipeline.fit_transform(&table).unwrap();
//!
//! let state = pipeline.state().unwrap();
//! assert_eq!(state.owner("flag"), Some(ColumnKind::Boolean));
//! assert_eq!(state.owner("day"), Some(ColumnKind::Date));
//! assert_eq!(
//!     output.column("day").unwrap().cells,
//!     vec![Cell::text("2023-06-30"), Cell::text(" "), Cell::text("2023-07-01")]
//! );
//! ```
//!
//! # Design Principles
//!
//! - **All or nothing**: one rejected value excludes a column at fit time
//! - **Fail fast**: one rejected value aborts a transform
//! - **No mutation**: every transform returns a new table

pub mod classify;
mod error;
mod options;
pub mod patterns;
mod pipeline;
mod sentinel;
mod state;

// Classifiers
pub use classify::{
    BooleanClassifier, BooleanRule, CellRule, Classifier, ColumnClassifier, ColumnKind,
    DateClassifier, DateRule, NumericClassifier, NumericRule, Rejection, StringClassifier,
    StringRule,
};

// Error type
pub use error::{Result, TransformError};

// Configuration
pub use options::{
    BooleanCase, DateRendering, NullRendering, OwnershipMode, PipelineOptions, SentinelMode,
};

// Stages
pub use pipeline::TypePipeline;
pub use sentinel::{SentinelNormalizer, normalize_cell};
pub use state::FittedState;
