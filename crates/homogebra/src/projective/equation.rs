//! Point, line and conic equations and how they move under a transformation.
//!
//! - A point `p` maps to `H p`.
//! - A line `l` (all `p` with `l·p = 0`) maps to `H⁻ᵀ l`.
//! - A conic `C` (all `p` with `pᵀ C p = 0`) maps to `H⁻ᵀ C H⁻¹`.
//!
//! With these rules incidence survives: if `p` lies on `l` (or `C`), then the
//! image of `p` lies on the image of `l` (or `C`).

use super::coordinate::{HomogeneousCoordinate, Var};
use super::matrix::TransformationMatrix;
use super::transformation::Transformation;
use crate::complex::Complex;

/// Objects that can be pushed through a projective transformation.
pub trait Transform: Sized {
    /// Image under `t`; `None` if the rule needs `t⁻¹` and `t` is singular.
    fn transformed(&self, t: &Transformation) -> Option<Self>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointEquation {
    pub equation: HomogeneousCoordinate,
}

impl PointEquation {
    #[inline]
    pub const fn new(equation: HomogeneousCoordinate) -> Self {
        Self { equation }
    }
}

impl Transform for PointEquation {
    fn transformed(&self, t: &Transformation) -> Option<Self> {
        Some(Self::new(t.apply(&self.equation)))
    }
}

/// Line `a·x + b·y + c·z = 0` stored as `(a, b, c)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LineEquation {
    pub equation: HomogeneousCoordinate,
}

impl LineEquation {
    #[inline]
    pub const fn new(equation: HomogeneousCoordinate) -> Self {
        Self { equation }
    }

    /// `l·p` vanishes within `EPS` after normalizing both triples to unit length.
    pub fn contains(&self, point: &PointEquation) -> bool {
        let scale = self.equation.norm() * point.equation.norm();
        if scale == 0.0 {
            return false;
        }
        (self.equation.dot(&point.equation) * (1.0 / scale)).is_zero()
    }
}

impl Transform for LineEquation {
    fn transformed(&self, t: &Transformation) -> Option<Self> {
        let inv = t.matrix().inverse()?;
        Some(Self::new(inv.transpose().mul_vector(&self.equation)))
    }
}

/// Unordered pair of distinct variables, naming a mixed monomial.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pair {
    XY,
    YZ,
    XZ,
}

impl Pair {
    /// Slot in `ConicEquation::pair_products`.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Pair::XY => 0,
            Pair::YZ => 1,
            Pair::XZ => 2,
        }
    }

    /// The pair `{a, b}` in either order; `None` when `a == b`.
    pub fn of(a: Var, b: Var) -> Option<Pair> {
        match (a, b) {
            (Var::X, Var::Y) | (Var::Y, Var::X) => Some(Pair::XY),
            (Var::Y, Var::Z) | (Var::Z, Var::Y) => Some(Pair::YZ),
            (Var::X, Var::Z) | (Var::Z, Var::X) => Some(Pair::XZ),
            _ => None,
        }
    }
}

/// Homogeneous quadratic form
/// `s₀x² + s₁y² + s₂z² + q₀xy + q₁yz + q₂xz` with
/// `squares = [s₀, s₁, s₂]` and `pair_products = [q₀, q₁, q₂]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ConicEquation {
    pub squares: [Complex; 3],
    pub pair_products: [Complex; 3],
}

impl ConicEquation {
    pub const fn new(squares: [Complex; 3], pair_products: [Complex; 3]) -> Self {
        Self {
            squares,
            pair_products,
        }
    }

    /// Coefficient of `x²`, `y²` or `z²`.
    #[inline]
    pub fn square(&self, var: Var) -> Complex {
        self.squares[var.index()]
    }

    /// Coefficient of the mixed monomial `xy`, `yz` or `xz`.
    #[inline]
    pub fn pair_product(&self, pair: Pair) -> Complex {
        self.pair_products[pair.index()]
    }

    pub fn evaluate(&self, p: &HomogeneousCoordinate) -> Complex {
        let [s0, s1, s2] = self.squares;
        let [q0, q1, q2] = self.pair_products;
        s0 * p.x * p.x
            + s1 * p.y * p.y
            + s2 * p.z * p.z
            + q0 * p.x * p.y
            + q1 * p.y * p.z
            + q2 * p.x * p.z
    }

    /// Point lies on the conic: the form vanishes within `EPS` relative to
    /// the point's squared length.
    pub fn contains(&self, point: &PointEquation) -> bool {
        let scale = point.equation.norm().powi(2);
        if scale == 0.0 {
            return false;
        }
        (self.evaluate(&point.equation) * (1.0 / scale)).is_zero()
    }

    /// Symmetric `C` with `pᵀ C p` equal to the form.
    pub fn symmetric_matrix(&self) -> TransformationMatrix {
        let [s0, s1, s2] = self.squares;
        let [q0, q1, q2] = self.pair_products.map(|q| q * 0.5);
        TransformationMatrix::new(s0, q0, q2, q0, s1, q1, q2, q1, s2)
    }

    /// Inverse of [`ConicEquation::symmetric_matrix`]; off-diagonal pairs are
    /// summed, so a non-symmetric input denotes the same form.
    pub fn from_symmetric_matrix(m: &TransformationMatrix) -> Self {
        Self::new(
            [m[0][0], m[1][1], m[2][2]],
            [m[0][1] + m[1][0], m[1][2] + m[2][1], m[0][2] + m[2][0]],
        )
    }
}

impl Transform for ConicEquation {
    fn transformed(&self, t: &Transformation) -> Option<Self> {
        let inv = t.matrix().inverse()?;
        let c = inv.transpose() * self.symmetric_matrix() * inv;
        Some(Self::from_symmetric_matrix(&c))
    }
}
