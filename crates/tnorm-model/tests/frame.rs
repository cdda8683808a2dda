//! Tests for DataFrame interop.

use polars::prelude::*;
use tnorm_model::{Cell, Table};

#[test]
fn test_from_dataframe_reads_raw_cells() {
    let df = DataFrame::new(vec![
        Series::new("Numerical".into(), vec![Some("123"), None, Some("NA")]).into(),
        Series::new("Score".into(), vec![Some(2.5), Some(3.8), None]).into(),
    ])
    .unwrap();

    let table = Table::from_dataframe(&df).unwrap();

    assert_eq!(table.column_names(), vec!["Numerical", "Score"]);
    assert_eq!(
        table.column("Numerical").unwrap().cells,
        vec![Cell::text("123"), Cell::Null, Cell::text("NA")]
    );
    assert_eq!(
        table.column("Score").unwrap().cells,
        vec![Cell::Number(2.5), Cell::Number(3.8), Cell::Null]
    );
}

#[test]
fn test_to_dataframe_picks_dtype_per_column() {
    let table = Table::default()
        .with_column("n", vec![Cell::Number(1.0), Cell::Null])
        .and_then(|t| t.with_column("b", vec![Cell::Bool(true), Cell::Bool(false)]))
        .and_then(|t| t.with_column("s", vec![Cell::text("abc"), Cell::Number(12.0)]))
        .unwrap();

    let df = table.to_dataframe().unwrap();

    assert_eq!(df.column("n").unwrap().dtype(), &DataType::Float64);
    assert_eq!(df.column("b").unwrap().dtype(), &DataType::Boolean);
    assert_eq!(df.column("s").unwrap().dtype(), &DataType::String);

    let n = df.column("n").unwrap().f64().unwrap();
    assert_eq!(n.get(0), Some(1.0));
    assert_eq!(n.get(1), None);

    let s = df.column("s").unwrap().str().unwrap();
    assert_eq!(s.get(1), Some("12"));
}
