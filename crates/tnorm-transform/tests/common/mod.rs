//! Shared fixtures for integration tests.

#![allow(dead_code)]

use tnorm_model::{Cell, Table};
use tracing_subscriber::EnvFilter;

/// Routes pipeline logs to the test harness. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// A ten-row table mixing sentinels, numbers, booleans, free text and dates.
pub fn mixed_table() -> Table {
    Table::default()
        .with_column(
            "Numerical",
            vec![
                "123".into(),
                " ".into(),
                "".into(),
                "NA".into(),
                "N.A.".into(),
                "None".into(),
                "20".into(),
                2.5.into(),
                3.8.into(),
                Cell::Null,
            ],
        )
        .and_then(|t| {
            t.with_column(
                "Boolean",
                vec![
                    "True".into(),
                    " ".into(),
                    "".into(),
                    "NA".into(),
                    "N.A.".into(),
                    "None".into(),
                    true.into(),
                    false.into(),
                    false.into(),
                    Cell::Null,
                ],
            )
        })
        .and_then(|t| {
            t.with_column(
                "Character",
                vec![
                    "abc".into(),
                    " ".into(),
                    "".into(),
                    "NA".into(),
                    "N.A.".into(),
                    "None".into(),
                    "cde".into(),
                    1234_i64.into(),
                    "234".into(),
                    12_i64.into(),
                ],
            )
        })
        .and_then(|t| {
            t.with_column(
                "Date",
                vec![
                    "2023-06-28".into(),
                    " ".into(),
                    "".into(),
                    "NA".into(),
                    "N.A.".into(),
                    "None".into(),
                    20230629_i64.into(),
                    20230630_i64.into(),
                    "20230630".into(),
                    Cell::Null,
                ],
            )
        })
        .expect("fixture table is well formed")
}

pub fn single_column(name: &str, cells: Vec<Cell>) -> Table {
    Table::default()
        .with_column(name, cells)
        .expect("single column table is well formed")
}
