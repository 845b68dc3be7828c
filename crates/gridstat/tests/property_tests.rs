//! Property-based tests for the Gridstat engines.
//!
//! These tests use proptest to generate random tabular inputs and verify
//! that the engines maintain their invariants under all conditions:
//!
//! 1. **No panics**: engines never crash on any input
//! 2. **Determinism**: same input always produces same output
//! 3. **Bounded outputs**: percentages stay in range, coefficients in [-1, 1]
//! 4. **Purity**: transforms never touch their input dataset

use proptest::prelude::*;

use gridstat::{
    Dataset, QualityReport, SortOrder, TransformTask, Workbench,
};

// =============================================================================
// Test Strategies
// =============================================================================

/// A cell: numeric, text, or empty.
fn cell() -> impl Strategy<Value = String> {
    prop_oneof![
        (-1000i32..1000).prop_map(|v| v.to_string()),
        (-100.0f64..100.0).prop_map(|v| format!("{:.2}", v)),
        "[a-z]{1,8}",
        Just(String::new()),
    ]
}

/// A two-column dataset with 1..30 rows.
fn dataset() -> impl Strategy<Value = Dataset> {
    prop::collection::vec((cell(), cell()), 1..30).prop_map(|pairs| {
        Dataset::new(
            vec!["a".to_string(), "b".to_string()],
            pairs.into_iter().map(|(a, b)| vec![a, b]).collect(),
        )
    })
}

fn sorted_rows(report: &QualityReport) -> (Vec<String>, f64) {
    (
        report.issues().iter().map(|s| s.to_string()).collect(),
        report.completeness,
    )
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_quality_assessment_is_bounded_and_deterministic(dataset in dataset()) {
        let workbench = Workbench::new();
        let first = workbench.assess(&dataset);
        let second = workbench.assess(&dataset);

        prop_assert!(first.completeness >= 0.0 && first.completeness <= 100.0);
        prop_assert!(first.duplicate_rows <= dataset.row_count());
        prop_assert_eq!(sorted_rows(&first), sorted_rows(&second));
    }

    #[test]
    fn prop_filter_is_idempotent(dataset in dataset(), pattern in "[a-z0-9]{0,3}") {
        let workbench = Workbench::new();
        let task = TransformTask::Filter { column: "a".to_string(), pattern };

        let once = workbench.apply(&dataset, std::slice::from_ref(&task));
        let twice = workbench.apply(&once, std::slice::from_ref(&task));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_sort_preserves_rows(dataset in dataset()) {
        let workbench = Workbench::new();
        let task = TransformTask::Sort {
            column: "a".to_string(),
            order: SortOrder::Ascending,
        };
        let sorted = workbench.apply(&dataset, &[task]);

        prop_assert_eq!(sorted.row_count(), dataset.row_count());
        let mut before = dataset.rows.clone();
        let mut after = sorted.rows.clone();
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn prop_transforms_never_mutate_input(dataset in dataset()) {
        let workbench = Workbench::new();
        let snapshot = dataset.clone();
        let tasks = vec![
            TransformTask::Log { column: "a".to_string() },
            TransformTask::normalize_unit("b"),
            TransformTask::RemoveMissing { column: "a".to_string() },
        ];
        let _ = workbench.apply(&dataset, &tasks);
        prop_assert_eq!(dataset, snapshot);
    }

    #[test]
    fn prop_correlation_is_bounded(dataset in dataset()) {
        let workbench = Workbench::new();
        let matrix = workbench
            .correlate(&dataset, &["a".to_string(), "b".to_string()])
            .unwrap();

        for entry in &matrix.entries {
            prop_assert!(entry.coefficient.is_finite());
            prop_assert!(entry.coefficient >= -1.0 - 1e-9);
            prop_assert!(entry.coefficient <= 1.0 + 1e-9);
        }
        prop_assert_eq!(matrix.coefficient("a", "a"), Some(1.0));
        prop_assert_eq!(matrix.coefficient("a", "b"), matrix.coefficient("b", "a"));
    }

    #[test]
    fn prop_describe_never_panics(dataset in dataset()) {
        let workbench = Workbench::new();
        // Either a summary or "no data"; never a crash, never NaN.
        if let Some(summary) = workbench.describe(&dataset, "a") {
            prop_assert!(summary.mean.is_finite());
            prop_assert!(summary.std_dev >= 0.0);
        }
    }

    #[test]
    fn prop_normalize_round_trip(values in prop::collection::vec(-1000.0f64..1000.0, 2..20)) {
        // Normalizing to [0,1] and scaling back to [min,max] recovers the
        // original values within the 4-decimal rounding tolerance.
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        prop_assume!(max - min > 0.01);

        let dataset = Dataset::new(
            vec!["v".to_string()],
            values.iter().map(|v| vec![format!("{}", v)]).collect(),
        );

        let workbench = Workbench::new();
        let normalized = workbench.apply(&dataset, &[TransformTask::normalize_unit("v")]);
        let restored = workbench.apply(
            &normalized,
            &[TransformTask::Normalize {
                column: "v".to_string(),
                low: min,
                high: max,
            }],
        );

        for (row, original) in values.iter().enumerate() {
            let cell: f64 = restored.get(row, 0).unwrap().parse().unwrap();
            // Rounding happens twice at 4 decimals; allow span-scaled slack.
            let tolerance = (max - min).abs() * 2e-4 + 1e-3;
            prop_assert!((cell - original).abs() <= tolerance);
        }
    }
}
