//! Integration tests for Gridstat.

use std::io::Write;
use tempfile::NamedTempFile;

use gridstat::{
    export, FillMethod, FindingKind, ModelSpec, SortOrder, TrainConfig, TransformTask, Workbench,
};

/// Helper to create a temporary file with given content.
fn create_test_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn test_load_basic_csv() {
    let content = "id,name,age\n1,Alice,30\n2,Bob,25\n3,Carol,28\n";
    let file = create_test_file(content);

    let workbench = Workbench::new();
    let (dataset, source) = workbench.load(file.path()).expect("Load failed");

    assert_eq!(source.row_count, 3);
    assert_eq!(source.column_count, 3);
    assert_eq!(source.format, "csv");
    assert!(source.hash.starts_with("sha256:"));
    assert_eq!(dataset.headers, vec!["id", "name", "age"]);
}

#[test]
fn test_load_tsv_auto_detect() {
    let content = "sample\tvalue\nS001\t25\nS002\t30\n";
    let file = create_test_file(content);

    let workbench = Workbench::new();
    let (_, source) = workbench.load(file.path()).expect("Load failed");
    assert_eq!(source.format, "tsv");
}

// =============================================================================
// Statistics
// =============================================================================

#[test]
fn test_describe_reference_values() {
    let content = "v\n1\n2\n2\n3\n4\n";
    let file = create_test_file(content);

    let workbench = Workbench::new();
    let (dataset, _) = workbench.load(file.path()).unwrap();
    let summary = workbench.describe(&dataset, "v").unwrap();

    assert!((summary.mean - 2.4).abs() < 1e-12);
    assert_eq!(summary.median, 2.0);
    assert_eq!(summary.mode, 2.0);
    assert!((summary.std_dev - 1.0198039027185569).abs() < 1e-9);
}

#[test]
fn test_describe_mixed_column_uses_numeric_view() {
    // Text cells are excluded from aggregates, never coerced to zero.
    let content = "v\n10\nnot-a-number\n20\n";
    let file = create_test_file(content);

    let workbench = Workbench::new();
    let (dataset, _) = workbench.load(file.path()).unwrap();
    let summary = workbench.describe(&dataset, "v").unwrap();
    assert!((summary.mean - 15.0).abs() < 1e-12);
}

// =============================================================================
// Quality
// =============================================================================

#[test]
fn test_quality_completeness_and_findings() {
    let content = "a,b\n1,x\n,y\n3,z\n";
    let file = create_test_file(content);

    let workbench = Workbench::new();
    let (dataset, _) = workbench.load(file.path()).unwrap();
    let report = workbench.assess(&dataset);

    assert!((report.completeness - 5.0 / 6.0 * 100.0).abs() < 1e-9);
    assert!(report
        .findings
        .iter()
        .any(|f| f.kind == FindingKind::MissingValues));
    // Column "a" mixes numbers with an empty cell only: not inconsistent.
    assert!(!report
        .findings
        .iter()
        .any(|f| f.kind == FindingKind::InconsistentTypes && f.column.as_deref() == Some("a")));
}

#[test]
fn test_quality_duplicates_and_outliers() {
    let mut content = String::from("v\n");
    for _ in 0..6 {
        content.push_str("10\n");
    }
    content.push_str("9999\n");
    let file = create_test_file(&content);

    let workbench = Workbench::new();
    let (dataset, _) = workbench.load(file.path()).unwrap();
    let report = workbench.assess(&dataset);

    assert!(report.duplicate_rows >= 5);
    assert!(report
        .findings
        .iter()
        .any(|f| f.kind == FindingKind::Outliers));
}

// =============================================================================
// Correlation
// =============================================================================

#[test]
fn test_correlation_grid() {
    let content = "x,y\n1,2\n2,4\n3,6\n4,8\n";
    let file = create_test_file(content);

    let workbench = Workbench::new();
    let (dataset, _) = workbench.load(file.path()).unwrap();
    let matrix = workbench
        .correlate(&dataset, &["x".into(), "y".into()])
        .unwrap();

    assert_eq!(matrix.entries.len(), 4);
    assert_eq!(matrix.coefficient("x", "x"), Some(1.0));
    assert!((matrix.coefficient("x", "y").unwrap() - 1.0).abs() < 1e-9);
    assert_eq!(matrix.coefficient("x", "y"), matrix.coefficient("y", "x"));
}

// =============================================================================
// Transform pipeline
// =============================================================================

#[test]
fn test_transform_pipeline_end_to_end() {
    let content = "name,score\nalice,10\nbob,\ncarol,30\ndan,20\n";
    let file = create_test_file(content);

    let workbench = Workbench::new();
    let (dataset, _) = workbench.load(file.path()).unwrap();

    let tasks = vec![
        TransformTask::FillMissing {
            column: "score".into(),
            fill: FillMethod::Mean,
        },
        TransformTask::normalize_unit("score"),
        TransformTask::Sort {
            column: "score".into(),
            order: SortOrder::Descending,
        },
    ];
    let out = workbench.apply(&dataset, &tasks);

    assert_eq!(out.row_count(), 4);
    assert_eq!(out.headers, dataset.headers);
    // Max lands first after the descending sort.
    assert_eq!(out.get(0, 1), Some("1.0000"));
    // The original dataset is untouched.
    assert_eq!(dataset.get(1, 1), Some(""));
}

#[test]
fn test_normalize_round_trip_recovers_values() {
    let content = "v\n3\n7\n11\n";
    let file = create_test_file(content);

    let workbench = Workbench::new();
    let (dataset, _) = workbench.load(file.path()).unwrap();

    let normalized = workbench.apply(&dataset, &[TransformTask::normalize_unit("v")]);
    let restored = workbench.apply(
        &normalized,
        &[TransformTask::Normalize {
            column: "v".into(),
            low: 3.0,
            high: 11.0,
        }],
    );

    for (row, expected) in [(0usize, 3.0), (1, 7.0), (2, 11.0)] {
        let cell: f64 = restored.get(row, 0).unwrap().parse().unwrap();
        assert!((cell - expected).abs() < 1e-4);
    }
}

// =============================================================================
// ML harness
// =============================================================================

#[test]
fn test_linear_regression_end_to_end() {
    let content = "x,y\n1,2\n2,4\n3,6\n4,8\n";
    let file = create_test_file(content);

    let workbench = Workbench::new();
    let (dataset, _) = workbench.load(file.path()).unwrap();

    let config = TrainConfig::new("y", vec!["x".into()], ModelSpec::LinearRegression);
    let result = workbench.train(&dataset, &config).unwrap();

    // slope ~2, intercept ~0, R^2 ~1
    assert!((result.predict(&[10.0]).unwrap() - 20.0).abs() < 1e-6);
    assert!((result.r2 - 1.0).abs() < 1e-9);
    assert!(result.rmse < 1e-6);
}

#[test]
fn test_training_is_repeatable() {
    let mut content = String::from("x,y\n");
    for i in 0..50 {
        content.push_str(&format!("{},{}\n", i, i * 3 + 1));
    }
    let file = create_test_file(&content);

    let workbench = Workbench::new();
    let (dataset, _) = workbench.load(file.path()).unwrap();
    let config = TrainConfig::new(
        "y",
        vec!["x".into()],
        ModelSpec::RandomForest {
            n_estimators: 5,
            max_depth: 4,
        },
    );

    let a = workbench.train(&dataset, &config).unwrap();
    let b = workbench.train(&dataset, &config).unwrap();
    assert_eq!(a.rmse, b.rmse);
    assert_eq!(a.fold_mean, b.fold_mean);
    assert_eq!(
        a.predict(&[25.0]).unwrap(),
        b.predict(&[25.0]).unwrap()
    );
}

// =============================================================================
// Export
// =============================================================================

#[test]
fn test_export_round_trip() {
    let content = "a,b\n1,x\n2,y\n";
    let file = create_test_file(content);

    let workbench = Workbench::new();
    let (dataset, _) = workbench.load(file.path()).unwrap();

    assert_eq!(export::to_csv(&dataset), "a,b\n1,x\n2,y");

    let json: serde_json::Value =
        serde_json::from_str(&export::to_json(&dataset).unwrap()).unwrap();
    assert_eq!(json[1]["b"], "y");
}
