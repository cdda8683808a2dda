//! Data model for column type normalization.
//!
//! A [`Table`] is an ordered set of named columns, each a sequence of
//! [`Cell`] values with one cell per row. Inputs arrive as loosely typed raw
//! cells (text, number, boolean, missing); the normalization pipeline in
//! `tnorm-transform` rewrites each column into one canonical variant.
//!
//! # Module Organization
//!
//! - [`cell`]: the `Cell` value type and numeric formatting
//! - [`table`]: `Column` and `Table` with shape validation
//! - [`frame`]: Polars `DataFrame` interop
//! - [`error`]: model errors

pub mod cell;
pub mod error;
pub mod frame;
pub mod table;

pub use cell::{Cell, format_numeric};
pub use error::{ModelError, Result};
pub use frame::any_to_cell;
pub use table::{Column, Table};
