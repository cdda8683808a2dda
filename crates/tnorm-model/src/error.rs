//! Error types for table construction and conversion.

use thiserror::Error;

/// Errors raised while building or converting a [`crate::Table`].
#[derive(Debug, Error)]
pub enum ModelError {
    /// A column with the same name is already present.
    #[error("duplicate column '{name}'")]
    DuplicateColumn { name: String },

    /// A column does not have the same number of rows as the table.
    #[error("column '{name}' has {got} rows, expected {expected}")]
    LengthMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    /// Failed Polars operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for ModelError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
