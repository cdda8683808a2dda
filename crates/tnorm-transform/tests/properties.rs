//! Property tests for normalization and classification invariants.

use chrono::NaiveDate;
use proptest::prelude::*;
use tnorm_model::{Cell, Column, Table};
use tnorm_transform::classify::parse_date;
use tnorm_transform::{
    BooleanCase, CellRule, DateRule, OwnershipMode, PipelineOptions, SentinelMode, TypePipeline,
    normalize_cell,
};

fn raw_cell() -> impl Strategy<Value = Cell> {
    prop_oneof![
        Just(Cell::Null),
        any::<bool>().prop_map(Cell::Bool),
        any::<f64>().prop_map(Cell::Number),
        "(True|FALSE|NA|n/a|None|null\\.| |[0-9]{1,4}|-?[0-9]{1,3}\\.[0-9]{1,2}|2023-0[1-9]-1[0-9]|2024[01][0-9]2[0-8]|[a-z]{1,4})"
            .prop_map(Cell::Text),
    ]
}

fn raw_table() -> impl Strategy<Value = Table> {
    (1usize..6, 1usize..4).prop_flat_map(|(rows, width)| {
        prop::collection::vec(prop::collection::vec(raw_cell(), rows), width).prop_map(|columns| {
            let columns = columns
                .into_iter()
                .enumerate()
                .map(|(idx, cells)| Column::new(format!("c{idx}"), cells))
                .collect();
            Table::new(columns).expect("generated columns share a height")
        })
    })
}

fn ce_date() -> impl Strategy<Value = NaiveDate> {
    // Years 1000 through 9999 keep %Y at four digits.
    (365_000i32..3_650_000).prop_filter_map("day out of range", NaiveDate::from_num_days_from_ce_opt)
}

proptest! {
    #[test]
    fn normalize_cell_is_idempotent(cell in raw_cell()) {
        for mode in [SentinelMode::Basic, SentinelMode::ForceText] {
            for case in [BooleanCase::Insensitive, BooleanCase::Sensitive] {
                let once = normalize_cell(&cell, mode, case);
                prop_assert_eq!(normalize_cell(&once, mode, case), once);
            }
        }
    }

    #[test]
    fn date_layouts_agree(date in ce_date()) {
        let dashed = date.format("%Y-%m-%d").to_string();
        let compact = date.format("%Y%m%d").to_string();
        prop_assert_eq!(parse_date(&dashed), Some(date));
        prop_assert_eq!(parse_date(&compact), Some(date));

        let rule = DateRule::default();
        prop_assert_eq!(rule.convert(&Cell::Text(compact)), Ok(Cell::Text(dashed)));
    }

    #[test]
    fn exclusive_owners_are_unique(table in raw_table()) {
        let mut pipeline = TypePipeline::default();
        let state = pipeline.fit(&table).unwrap();
        for name in &state.columns {
            prop_assert!(state.owners(name).len() <= 1);
        }
    }

    #[test]
    fn fitted_table_always_transforms(table in raw_table(), independent in any::<bool>()) {
        let mode = if independent {
            OwnershipMode::Independent
        } else {
            OwnershipMode::Exclusive
        };
        let mut pipeline = TypePipeline::new(PipelineOptions::default().with_ownership_mode(mode));
        let output = pipeline.fit_transform(&table);
        prop_assert!(output.is_ok(), "{:?}", output.as_ref().err());
        let output = output.unwrap();
        prop_assert_eq!(output.height(), table.height());
        prop_assert_eq!(output.column_names(), table.column_names());
    }
}
