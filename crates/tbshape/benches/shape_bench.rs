//! Criterion benchmarks for polygon construction and point containment.
//! Focus sizes: n in {4, 16, 64, 256} vertices.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nalgebra::Vector2;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tbshape::shape::{regular_polygon, Polygon, Shape};

fn random_points(m: usize, seed: u64) -> Vec<Vector2<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..m)
        .map(|_| Vector2::new(rng.gen_range(-1.2..1.2), rng.gen_range(-1.2..1.2)))
        .collect()
}

fn bench_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon");
    for &n in &[4usize, 16, 64, 256] {
        group.bench_with_input(BenchmarkId::new("regular_polygon", n), &n, |b, &n| {
            b.iter(|| regular_polygon(n, 1.0, 0.0).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("new_from_vertices", n), &n, |b, &n| {
            let verts = regular_polygon(n, 1.0, 0.0).unwrap().vertices();
            b.iter_batched(
                || verts.clone(),
                |v| Polygon::new(v).unwrap(),
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("contains_1k", n), &n, |b, &n| {
            let poly = regular_polygon(n, 1.0, 0.0).unwrap();
            let pts = random_points(1000, 43);
            b.iter(|| pts.iter().filter(|&&p| poly.contains(p)).count())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_shapes);
criterion_main!(benches);
