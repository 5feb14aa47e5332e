//! Seeded random draws for tests, benches and the CLI.
//!
//! Conventions
//! - Every generator takes a caller-owned `Rng` except `random_transformation`,
//!   which is keyed by a seed so a single `u64` replays the draw.
//! - Entries are uniform on `[-bound, bound]` per component.

use crate::complex::Complex;
use crate::matrix::SquaredMatrix;
use crate::projective::{HomogeneousCoordinate, Transformation, TransformationMatrix};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draws below this determinant modulus are rejected by `random_transformation`.
pub const MIN_DET: f64 = 0.2;

/// Complex number with both components uniform on `[-bound, bound]`.
pub fn random_complex<R: Rng + ?Sized>(rng: &mut R, bound: f64) -> Complex {
    Complex::new(rng.gen_range(-bound..=bound), rng.gen_range(-bound..=bound))
}

/// Homogeneous triple with complex entries in the unit box.
pub fn random_point<R: Rng + ?Sized>(rng: &mut R) -> HomogeneousCoordinate {
    HomogeneousCoordinate::new(
        random_complex(rng, 1.0),
        random_complex(rng, 1.0),
        random_complex(rng, 1.0),
    )
}

/// Real `n×n` system, strictly diagonally dominant (hence regular), with a
/// random augmentation.
pub fn random_squared_matrix<R: Rng + ?Sized>(rng: &mut R, n: usize) -> SquaredMatrix<f64> {
    let mut rows: Vec<Vec<f64>> = (0..n)
        .map(|_| (0..n).map(|_| rng.gen_range(-1.0..=1.0)).collect::<Vec<f64>>())
        .collect();
    for (i, row) in rows.iter_mut().enumerate() {
        let off: f64 = row
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(_, v)| v.abs())
            .sum();
        let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        row[i] = sign * (off + rng.gen_range(0.5..=1.5));
    }
    let augmentation: Vec<f64> = (0..n).map(|_| rng.gen_range(-1.0..=1.0)).collect();
    SquaredMatrix::from_parts(rows, augmentation)
}

/// Random homography with entries in the complex unit box and
/// `|det| > MIN_DET`.
pub fn random_transformation(seed: u64) -> Transformation {
    let mut rng = StdRng::seed_from_u64(seed);
    loop {
        let rows = [(); 3].map(|_| [(); 3].map(|_| random_complex(&mut rng, 1.0)));
        let m = TransformationMatrix::from_rows(rows);
        let det = m.determinant();
        if det.norm() > MIN_DET && det.is_finite() {
            break Transformation::new(m);
        }
    }
}
