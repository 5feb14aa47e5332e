//! Criterion benchmarks for the generic Gauss-Jordan solver.
//! Sizes: n in {3, 6, 12, 24}; the 3×3 closed form is compared in
//! `projective_bench`.
//! Results land under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use homogebra::sample::{random_complex, random_squared_matrix};
use homogebra::{Complex, SquaredMatrix};
use rand::{rngs::StdRng, SeedableRng};

fn complex_system(n: usize, seed: u64) -> SquaredMatrix<Complex> {
    let mut rng = StdRng::seed_from_u64(seed);
    let real = random_squared_matrix(&mut rng, n);
    // Perturb a diagonally dominant real draw so it stays regular.
    let rows: Vec<Vec<Complex>> = real
        .rows()
        .map(|row| {
            row.iter()
                .map(|&v| Complex::real(v) + random_complex(&mut rng, 0.1))
                .collect::<Vec<_>>()
        })
        .collect();
    let aug: Vec<Complex> = (0..n).map(|_| random_complex(&mut rng, 1.0)).collect();
    SquaredMatrix::new(rows, aug).unwrap()
}

fn bench_squared(c: &mut Criterion) {
    let mut group = c.benchmark_group("squared");
    for &n in &[3usize, 6, 12, 24] {
        group.bench_with_input(BenchmarkId::new("inverse_f64", n), &n, |b, &n| {
            b.iter_batched(
                || random_squared_matrix(&mut StdRng::seed_from_u64(41), n),
                |m| {
                    let _inv = m.inverse();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("solution_complex", n), &n, |b, &n| {
            b.iter_batched(
                || complex_system(n, 42),
                |m| {
                    let _x = m.solution();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("determinant_complex", n), &n, |b, &n| {
            b.iter_batched(
                || complex_system(n, 43),
                |m| {
                    let _det = m.determinant();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_squared);
criterion_main!(benches);
