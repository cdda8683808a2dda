//! Conversion between [`Table`] and Polars `DataFrame`.
//!
//! Loading is lossy in one direction only: every Polars value becomes a raw
//! cell (text, number, boolean or null). Writing picks one dtype per column
//! from the cells it holds.

use polars::prelude::*;

use crate::cell::Cell;
use crate::error::Result;
use crate::table::{Column as TableColumn, Table};

/// Converts a Polars `AnyValue` to a raw cell.
///
/// Integers and floats become [`Cell::Number`], strings [`Cell::Text`] and
/// booleans [`Cell::Bool`]. Any other dtype falls back to its display form.
///
/// 64-bit integers beyond ±2^53 lose precision in the conversion to `f64`;
/// such identifiers should be loaded as strings.
pub fn any_to_cell(value: AnyValue<'_>) -> Cell {
    match value {
        AnyValue::Null => Cell::Null,
        AnyValue::Boolean(b) => Cell::Bool(b),
        AnyValue::Int8(v) => Cell::Number(f64::from(v)),
        AnyValue::Int16(v) => Cell::Number(f64::from(v)),
        AnyValue::Int32(v) => Cell::Number(f64::from(v)),
        AnyValue::Int64(v) => Cell::Number(v as f64),
        AnyValue::UInt8(v) => Cell::Number(f64::from(v)),
        AnyValue::UInt16(v) => Cell::Number(f64::from(v)),
        AnyValue::UInt32(v) => Cell::Number(f64::from(v)),
        AnyValue::UInt64(v) => Cell::Number(v as f64),
        AnyValue::Float32(v) => Cell::Number(f64::from(v)),
        AnyValue::Float64(v) => Cell::Number(v),
        AnyValue::String(s) => Cell::Text(s.to_string()),
        AnyValue::StringOwned(s) => Cell::Text(s.to_string()),
        other => {
            let s = other.to_string();
            if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
                Cell::Text(s[1..s.len() - 1].to_string())
            } else {
                Cell::Text(s)
            }
        }
    }
}

impl Table {
    /// Reads every column of a `DataFrame` into raw cells.
    pub fn from_dataframe(df: &DataFrame) -> Result<Self> {
        let mut columns = Vec::with_capacity(df.width());
        for column in df.get_columns() {
            let mut cells = Vec::with_capacity(df.height());
            for idx in 0..column.len() {
                cells.push(any_to_cell(column.get(idx)?));
            }
            columns.push(TableColumn::new(column.name().as_str(), cells));
        }
        Table::new(columns)
    }

    /// Writes the table as a `DataFrame`.
    ///
    /// Columns holding only numbers (and nulls) become `Float64`, columns
    /// holding only booleans become `Boolean`; everything else is written as
    /// `String` using [`Cell::text_form`]. Null cells become Polars nulls.
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let columns: Vec<Column> = self.columns().iter().map(column_to_polars).collect();
        Ok(DataFrame::new(columns)?)
    }
}

fn column_to_polars(column: &TableColumn) -> Column {
    let name: PlSmallStr = column.name.as_str().into();
    let has_values = column.cells.iter().any(|c| !c.is_null());

    if has_values
        && column
            .cells
            .iter()
            .all(|c| matches!(c, Cell::Null | Cell::Number(_)))
    {
        let values: Vec<Option<f64>> = column.cells.iter().map(Cell::as_f64).collect();
        return Series::new(name, values).into();
    }

    if has_values
        && column
            .cells
            .iter()
            .all(|c| matches!(c, Cell::Null | Cell::Bool(_)))
    {
        let values: Vec<Option<bool>> = column.cells.iter().map(Cell::as_bool).collect();
        return Series::new(name, values).into();
    }

    let values: Vec<Option<String>> = column
        .cells
        .iter()
        .map(|c| (!c.is_null()).then(|| c.text_form().into_owned()))
        .collect();
    Series::new(name, values).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_to_cell() {
        assert_eq!(any_to_cell(AnyValue::Null), Cell::Null);
        assert_eq!(any_to_cell(AnyValue::Int32(42)), Cell::Number(42.0));
        assert_eq!(any_to_cell(AnyValue::Float64(2.5)), Cell::Number(2.5));
        assert_eq!(any_to_cell(AnyValue::String("NA")), Cell::text("NA"));
        assert_eq!(any_to_cell(AnyValue::Boolean(true)), Cell::Bool(true));
    }

    #[test]
    fn test_any_to_cell_wide_integers_round() {
        let above = (1_u64 << 53) + 1;
        assert_eq!(
            any_to_cell(AnyValue::UInt64(above)),
            Cell::Number(9_007_199_254_740_992.0)
        );
    }
}
