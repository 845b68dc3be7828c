//! Engine performance benchmarks.
//!
//! Measures statistics, quality assessment, correlation, and transform
//! throughput over generated datasets.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{Rng, SeedableRng};

use gridstat::{Dataset, ModelSpec, TrainConfig, TransformTask, Workbench};

/// Generate a mixed numeric/categorical dataset.
fn generate_dataset(rows: usize) -> Dataset {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let categories = ["alpha", "beta", "gamma", "delta"];

    let data_rows = (0..rows)
        .map(|i| {
            vec![
                format!("{}", i),
                format!("{:.3}", rng.gen_range(-50.0..50.0)),
                format!("{:.3}", rng.gen_range(0.0..1.0)),
                categories[i % categories.len()].to_string(),
                if i % 17 == 0 {
                    String::new()
                } else {
                    format!("{}", rng.gen_range(18..90))
                },
            ]
        })
        .collect();

    Dataset::new(
        vec![
            "id".into(),
            "signal".into(),
            "ratio".into(),
            "group".into(),
            "age".into(),
        ],
        data_rows,
    )
}

fn bench_describe(c: &mut Criterion) {
    let workbench = Workbench::new();
    let mut group = c.benchmark_group("describe");

    for rows in [100, 1_000, 10_000] {
        let dataset = generate_dataset(rows);
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &dataset, |b, d| {
            b.iter(|| workbench.describe(black_box(d), "signal"));
        });
    }
    group.finish();
}

fn bench_quality(c: &mut Criterion) {
    let workbench = Workbench::new();
    let mut group = c.benchmark_group("quality");

    for rows in [100, 1_000, 10_000] {
        let dataset = generate_dataset(rows);
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &dataset, |b, d| {
            b.iter(|| workbench.assess(black_box(d)));
        });
    }
    group.finish();
}

fn bench_correlate(c: &mut Criterion) {
    let workbench = Workbench::new();
    let dataset = generate_dataset(5_000);
    let columns: Vec<String> = vec!["signal".into(), "ratio".into(), "age".into()];

    c.bench_function("correlate_3x3_5k", |b| {
        b.iter(|| workbench.correlate(black_box(&dataset), &columns));
    });
}

fn bench_transform_pipeline(c: &mut Criterion) {
    let workbench = Workbench::new();
    let dataset = generate_dataset(5_000);
    let tasks = vec![
        TransformTask::Filter {
            column: "group".into(),
            pattern: "a".into(),
        },
        TransformTask::normalize_unit("signal"),
        TransformTask::Sort {
            column: "age".into(),
            order: gridstat::SortOrder::Ascending,
        },
    ];

    c.bench_function("transform_pipeline_5k", |b| {
        b.iter(|| workbench.apply(black_box(&dataset), &tasks));
    });
}

fn bench_train_linear(c: &mut Criterion) {
    let workbench = Workbench::new();
    let dataset = generate_dataset(2_000);
    let config = TrainConfig::new("ratio", vec!["signal".into()], ModelSpec::LinearRegression);

    c.bench_function("train_linear_2k", |b| {
        b.iter(|| workbench.train(black_box(&dataset), &config));
    });
}

criterion_group!(
    benches,
    bench_describe,
    bench_quality,
    bench_correlate,
    bench_transform_pipeline,
    bench_train_linear
);
criterion_main!(benches);
