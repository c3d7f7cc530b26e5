//! Criterion micro-benchmarks for the surface solver.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use prism_bench::{corner_profile, query_profile};
use prism_core::Query;
use prism_surface::{canonical_distance, canonicalize, classify, surface_distance, unfold};

fn bench_surface_distance_mixed_1k(c: &mut Criterion) {
    let queries = query_profile(1000, 1000, 42);
    c.bench_function("surface_distance_mixed_1k", |b| {
        b.iter(|| {
            let mut total = 0.0;
            for q in &queries {
                total += surface_distance(black_box(q));
            }
            black_box(total)
        });
    });
}

fn bench_canonical_distance_mixed_1k(c: &mut Criterion) {
    let queries = query_profile(1000, 1000, 42);
    c.bench_function("canonical_distance_mixed_1k", |b| {
        b.iter(|| {
            let mut total = 0.0;
            for q in &queries {
                total += canonical_distance(black_box(q));
            }
            black_box(total)
        });
    });
}

fn bench_surface_distance_corners(c: &mut Criterion) {
    // Corners sit on three faces: nine pairings per query.
    let queries = corner_profile(100);
    c.bench_function("surface_distance_corners_100", |b| {
        b.iter(|| {
            let mut total = 0.0;
            for q in &queries {
                total += surface_distance(black_box(q));
            }
            black_box(total)
        });
    });
}

fn bench_unfold_opposite(c: &mut Criterion) {
    let query = Query::new([30, 12, 10], [4, 3, 0], [20, 9, 10]).unwrap();
    let frame = canonicalize(&query);
    let relation = classify(&frame);
    c.bench_function("unfold_opposite_20", |b| {
        b.iter(|| unfold(black_box(&frame), black_box(relation)));
    });
}

criterion_group!(
    benches,
    bench_surface_distance_mixed_1k,
    bench_canonical_distance_mixed_1k,
    bench_surface_distance_corners,
    bench_unfold_opposite,
);
criterion_main!(benches);
