//! Error types for fitting and transforming tables.
//!
//! Probe failures during `fit` never surface here: they only decide whether
//! a column is claimed. Errors are raised by `transform` alone.

use thiserror::Error;
use tnorm_model::ModelError;

use crate::classify::Rejection;

/// Errors returned by the normalizer, the classifiers and the pipeline.
#[derive(Debug, Error)]
pub enum TransformError {
    /// `transform` was called before a successful `fit`.
    #[error("{stage} has not been fitted; call fit before transform")]
    UnfittedState { stage: &'static str },

    /// A value in a claimed column could not be converted.
    #[error("{stage} failed to convert column '{column}' row {row} ('{value}'): {source}")]
    ConversionFailure {
        stage: &'static str,
        column: String,
        row: usize,
        value: String,
        #[source]
        source: Rejection,
    },

    /// A column seen at fit time is absent from the table being transformed.
    #[error("{stage} was fitted on column '{column}' which is missing from the input")]
    MissingColumn { stage: &'static str, column: String },

    /// Options or fitted state could not be (de)serialized.
    #[error("invalid pipeline configuration: {0}")]
    Options(#[from] serde_json::Error),

    /// Table construction failed.
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Result type for transformation operations.
pub type Result<T> = std::result::Result<T, TransformError>;
