//! Criterion benchmarks for the projective hot paths: closed-form 3×3
//! inversion against the generic solver, four-point fitting, and conic
//! scan lines (one solve per screen column).

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use homogebra::prelude::*;
use homogebra::sample::{random_point, random_transformation};
use rand::{rngs::StdRng, SeedableRng};

fn bench_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("inverse3");
    group.bench_function("closed_form", |b| {
        b.iter_batched(
            || *random_transformation(5).matrix(),
            |m| {
                let _inv = m.inverse();
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("gauss_jordan", |b| {
        b.iter_batched(
            || {
                let m = random_transformation(5);
                let rows = m.matrix().rows().iter().map(|r| r.to_vec()).collect();
                SquaredMatrix::from_rows(rows).unwrap()
            },
            |m| {
                let _inv = m.inverse();
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("four_point");
    group.bench_function("from_correspondences", |b| {
        b.iter_batched(
            || {
                let mut rng = StdRng::seed_from_u64(17);
                let h = random_transformation(17);
                let pre = [(); 4].map(|_| random_point(&mut rng));
                let img = pre.map(|p| h.apply(&p));
                (pre, img)
            },
            |(pre, img)| {
                let _t = Transformation::from_correspondences(&pre, &img);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_conic(c: &mut Criterion) {
    let mut group = c.benchmark_group("conic_scan");
    let ellipse = ConicEquation::new(
        [Complex::real(1.0), Complex::real(4.0), Complex::real(-1.0)],
        [Complex::real(0.5), Complex::ZERO, Complex::real(0.1)],
    );
    for &columns in &[100usize, 1000, 4000] {
        group.bench_with_input(BenchmarkId::new("trace", columns), &columns, |b, &columns| {
            let solver = ConicRootSolver::new(&ellipse);
            let step = 3.0 / columns as f64;
            b.iter(|| solver.trace(Axis::X, (0..columns).map(|i| -1.5 + step * i as f64)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_inverse, bench_fit, bench_conic);
criterion_main!(benches);
