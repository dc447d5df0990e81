//! Benchmarks for corner/center relocation.
//!
//! Run with: `cargo bench --bench staggering_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dfm_post::grid::GridArray;
use dfm_post::staggering::{center_to_corner, corner_to_center};

/// Build a smooth corner field so the kernels see realistic values.
fn setup_corners(rows: usize, cols: usize) -> GridArray {
    let mut data = Vec::with_capacity(rows * cols);
    for i in 0..rows {
        for j in 0..cols {
            let x = i as f64 * 0.01;
            let y = j as f64 * 0.01;
            data.push((x.sin() + y.cos()) * 50.0 + 0.1 * x * y);
        }
    }
    GridArray::from_shape_vec(vec![rows, cols], data).unwrap()
}

fn bench_corner_to_center(c: &mut Criterion) {
    let mut group = c.benchmark_group("corner_to_center");

    for (rows, cols) in [(64, 64), (256, 256), (1024, 1024)] {
        let corners = setup_corners(rows, cols);

        group.bench_with_input(
            BenchmarkId::new("2d", format!("{}x{}", rows, cols)),
            &corners,
            |b, corners| {
                b.iter(|| corner_to_center(black_box(corners)).unwrap());
            },
        );
    }

    for len in [1_000, 100_000] {
        let edges = GridArray::from_vec((0..len).map(|i| i as f64 * 0.5).collect());

        group.bench_with_input(
            BenchmarkId::new("1d", format!("{}", len)),
            &edges,
            |b, edges| {
                b.iter(|| corner_to_center(black_box(edges)).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_center_to_corner(c: &mut Criterion) {
    let mut group = c.benchmark_group("center_to_corner");

    for (rows, cols) in [(64, 64), (256, 256), (1024, 1024)] {
        let centers = corner_to_center(&setup_corners(rows + 1, cols + 1)).unwrap();

        group.bench_with_input(
            BenchmarkId::new("2d", format!("{}x{}", rows, cols)),
            &centers,
            |b, centers| {
                b.iter(|| center_to_corner(black_box(centers)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_corner_to_center, bench_center_to_corner);
criterion_main!(benches);
