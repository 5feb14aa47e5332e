//! Incidence constructions solved with the generic linear kernel.
//!
//! Both constructions solve the same 3×3 system
//!
//! ```text
//! | a_x a_y a_z | 0 |
//! | b_x b_y b_z | 0 |
//! | n_x n_y n_z | 1 |
//! ```
//!
//! whose solution is orthogonal (under `dot`) to `a` and `b`. The last row
//! pins the scale; a normalization row orthogonal to the answer makes the
//! system singular, so several rows are tried in turn.

use super::coordinate::HomogeneousCoordinate;
use super::equation::{LineEquation, PointEquation};
use crate::complex::Complex;
use crate::matrix::SquaredMatrix;

const NORMALIZATION_ROWS: [HomogeneousCoordinate; 4] = [
    HomogeneousCoordinate::real(1.0, 1.0, 1.0),
    HomogeneousCoordinate::real(1.0, 0.0, 0.0),
    HomogeneousCoordinate::real(0.0, 1.0, 0.0),
    HomogeneousCoordinate::real(0.0, 0.0, 1.0),
];

/// Line through two points; `None` if the points coincide projectively.
pub fn line_through(a: &PointEquation, b: &PointEquation) -> Option<LineEquation> {
    common_orthogonal(&a.equation, &b.equation).map(LineEquation::new)
}

/// Intersection point of two lines; `None` if the lines coincide.
pub fn intersection(l: &LineEquation, m: &LineEquation) -> Option<PointEquation> {
    common_orthogonal(&l.equation, &m.equation).map(PointEquation::new)
}

fn common_orthogonal(
    a: &HomogeneousCoordinate,
    b: &HomogeneousCoordinate,
) -> Option<HomogeneousCoordinate> {
    for n in &NORMALIZATION_ROWS {
        let system = SquaredMatrix::new(
            vec![a.to_array().to_vec(), b.to_array().to_vec(), n.to_array().to_vec()],
            vec![Complex::ZERO, Complex::ZERO, Complex::ONE],
        )
        .ok()?;
        if let Some(x) = system.solution() {
            return Some(HomogeneousCoordinate::new(x[0], x[1], x[2]));
        }
    }
    tracing::trace!("coincident inputs, no incidence construction");
    None
}
