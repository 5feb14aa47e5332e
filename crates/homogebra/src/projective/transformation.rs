//! Projective transformations of ℂP² (elements of PGL(3, ℂ)).

use std::ops::{Mul, MulAssign};

use super::coordinate::HomogeneousCoordinate;
use super::matrix::TransformationMatrix;
use crate::complex::Complex;
use crate::matrix::SquaredMatrix;

/// Reference frame hit by [`Transformation::from_correspondences`]:
/// `(1,0,0), (0,1,0), (0,0,1), (1,1,1)`.
pub const REFERENCE_FRAME: [HomogeneousCoordinate; 4] = [
    HomogeneousCoordinate::real(1.0, 0.0, 0.0),
    HomogeneousCoordinate::real(0.0, 1.0, 0.0),
    HomogeneousCoordinate::real(0.0, 0.0, 1.0),
    HomogeneousCoordinate::real(1.0, 1.0, 1.0),
];

/// Linear automorphism of ℂP², defined up to an overall scale.
///
/// Composition follows function composition: `(a * b).apply(p) == a.apply(b.apply(p))`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transformation {
    matrix: TransformationMatrix,
}

impl Transformation {
    #[inline]
    pub const fn new(matrix: TransformationMatrix) -> Self {
        Self { matrix }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::new(TransformationMatrix::identity())
    }

    /// Homography sending `preimages[i]` to `images[i]` for `i = 0..4`.
    ///
    /// Built as `Q · P⁻¹` where `P` (resp. `Q`) sends the reference frame to
    /// the preimages (resp. images). The fourth preimage lands on the fourth
    /// image exactly, the other three up to scale.
    ///
    /// Returns `None` when three points of either quadruple are collinear
    /// (within tolerance), a point is the zero triple or a coordinate is not
    /// finite. Every point is scaled to unit length first, so the answer does
    /// not depend on which multiple of a point the caller passes.
    pub fn from_correspondences(
        preimages: &[HomogeneousCoordinate; 4],
        images: &[HomogeneousCoordinate; 4],
    ) -> Option<Self> {
        let Some(p) = unit_quadruple(preimages).as_ref().and_then(frame_map) else {
            tracing::debug!("degenerate preimage quadruple, no homography");
            return None;
        };
        let Some(q) = unit_quadruple(images).as_ref().and_then(frame_map) else {
            tracing::debug!("degenerate image quadruple, no homography");
            return None;
        };
        // Undo the unit scaling of the fourth pair so it maps exactly.
        let scale = images[3].norm() / preimages[3].norm();
        Some(Self::new((q * p.inverse()?).scale(Complex::real(scale))))
    }

    #[inline]
    pub fn matrix(&self) -> &TransformationMatrix {
        &self.matrix
    }

    /// Image of `point`, up to scale (callers normalize as needed).
    #[inline]
    pub fn apply(&self, point: &HomogeneousCoordinate) -> HomogeneousCoordinate {
        self.matrix.mul_vector(point)
    }

    pub fn inverse(&self) -> Option<Self> {
        self.matrix.inverse().map(Self::new)
    }

    /// The matrix is a nonzero multiple of the identity (entries compared
    /// after scaling by `1 / m00`).
    pub fn is_identity(&self, eps: f64) -> bool {
        let s = self.matrix[0][0];
        !s.is_zero()
            && self
                .matrix
                .scale(Complex::ONE / s)
                .approx_eq(&TransformationMatrix::identity(), eps)
    }
}

/// `points` scaled to unit Euclidean length; `None` for a zero or
/// non-finite triple.
fn unit_quadruple(points: &[HomogeneousCoordinate; 4]) -> Option<[HomogeneousCoordinate; 4]> {
    let mut out = *points;
    for p in out.iter_mut() {
        let n = p.norm();
        if !(n.is_finite() && n > 0.0) {
            return None;
        }
        *p = HomogeneousCoordinate::from_array(p.to_array().map(|v| v * (1.0 / n)));
    }
    Some(out)
}

/// Matrix sending the reference frame to `points` (unit-length triples).
///
/// Columns are the first three points scaled by `λ`, the solution of
/// `[p0 p1 p2] λ = p3`, so that `(1,1,1)` maps onto `p3`.
fn frame_map(points: &[HomogeneousCoordinate; 4]) -> Option<TransformationMatrix> {
    let [a, b, c, d] = points;
    let system = SquaredMatrix::new(
        vec![
            vec![a.x, b.x, c.x],
            vec![a.y, b.y, c.y],
            vec![a.z, b.z, c.z],
        ],
        d.to_array().to_vec(),
    )
    .ok()?;
    let lambda = system.solution()?;
    // λ_i = 0 puts p3 on the line through the other two columns.
    if lambda.iter().any(|l| l.is_zero()) {
        return None;
    }
    let scaled = |p: &HomogeneousCoordinate, l: Complex| p.to_array().map(|v| v * l);
    let m = TransformationMatrix::from_columns(
        scaled(a, lambda[0]),
        scaled(b, lambda[1]),
        scaled(c, lambda[2]),
    );
    if m.determinant().is_zero() {
        return None;
    }
    Some(m)
}

impl From<TransformationMatrix> for Transformation {
    fn from(matrix: TransformationMatrix) -> Self {
        Self::new(matrix)
    }
}

impl Mul for Transformation {
    type Output = Transformation;
    #[inline]
    fn mul(self, rhs: Transformation) -> Transformation {
        Transformation::new(self.matrix * rhs.matrix)
    }
}

impl MulAssign for Transformation {
    #[inline]
    fn mul_assign(&mut self, rhs: Transformation) {
        self.matrix *= rhs.matrix;
    }
}

impl Mul<HomogeneousCoordinate> for Transformation {
    type Output = HomogeneousCoordinate;
    #[inline]
    fn mul(self, rhs: HomogeneousCoordinate) -> HomogeneousCoordinate {
        self.apply(&rhs)
    }
}

impl Mul<HomogeneousCoordinate> for &Transformation {
    type Output = HomogeneousCoordinate;
    #[inline]
    fn mul(self, rhs: HomogeneousCoordinate) -> HomogeneousCoordinate {
        self.apply(&rhs)
    }
}
