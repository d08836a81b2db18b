//! Benchmarks for diagram loop construction

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use member_diagrams::prelude::*;

/// A wavy series with several sign reversals, like a multi-span deflection
fn wavy_series(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| (i as f64 * 0.3).sin() * 100.0)
        .collect()
}

fn benchmark_small_member(c: &mut Criterion) {
    let values = wavy_series(5);
    c.bench_function("diagram_5_samples", |b| {
        b.iter(|| {
            let (raw, _) =
                member_diagram_coords(black_box(&values), 1.5, 0.02, DEFAULT_ZERO_TOL);
            black_box(compose_face_loops(&raw));
        })
    });
}

fn benchmark_dense_member(c: &mut Criterion) {
    let values = wavy_series(50);
    c.bench_function("diagram_50_samples", |b| {
        b.iter(|| {
            let (raw, _) =
                member_diagram_coords(black_box(&values), 0.15, 0.02, DEFAULT_ZERO_TOL);
            black_box(compose_face_loops(&raw));
        })
    });
}

fn benchmark_labels(c: &mut Criterion) {
    let values = wavy_series(50);
    let scaled: Vec<f64> = values.iter().map(|v| v * 0.02).collect();
    c.bench_function("labels_50_samples", |b| {
        b.iter(|| {
            black_box(label_positions(
                black_box(&scaled),
                black_box(&values),
                0.15,
                100.0,
                2,
                0.1,
            ));
        })
    });
}

fn benchmark_full_build(c: &mut Criterion) {
    let mut results = MemberResultSet::new(7.5);
    results
        .add_series(DiagramKind::MomentZ, wavy_series(50))
        .unwrap();
    let builder = DiagramBuilder::new().with_scale(0.02).with_label_offset(0.1);

    c.bench_function("build_moment_diagram_50_samples", |b| {
        b.iter(|| {
            black_box(builder.build(&results, DiagramKind::MomentZ).unwrap());
        })
    });
}

criterion_group!(
    benches,
    benchmark_small_member,
    benchmark_dense_member,
    benchmark_labels,
    benchmark_full_build,
);

criterion_main!(benches);
