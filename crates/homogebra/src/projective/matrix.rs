//! Fixed 3×3 complex matrix with closed-form determinant and inverse.

use std::ops::{Index, IndexMut, Mul, MulAssign};

use nalgebra::Matrix3;

use super::coordinate::HomogeneousCoordinate;
use crate::complex::Complex;

pub type MatrixRow = [Complex; 3];

/// Row-major 3×3 matrix over ℂ. `Default` is the identity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformationMatrix {
    rows: [MatrixRow; 3],
}

impl Default for TransformationMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl TransformationMatrix {
    pub const fn identity() -> Self {
        let (o, l) = (Complex::ZERO, Complex::ONE);
        Self {
            rows: [[l, o, o], [o, l, o], [o, o, l]],
        }
    }

    /// Row-major entries `a_rc`.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        a00: Complex,
        a01: Complex,
        a02: Complex,
        a10: Complex,
        a11: Complex,
        a12: Complex,
        a20: Complex,
        a21: Complex,
        a22: Complex,
    ) -> Self {
        Self {
            rows: [[a00, a01, a02], [a10, a11, a12], [a20, a21, a22]],
        }
    }

    #[inline]
    pub const fn from_rows(rows: [MatrixRow; 3]) -> Self {
        Self { rows }
    }

    /// Matrix whose columns are `c0, c1, c2`.
    pub fn from_columns(c0: MatrixRow, c1: MatrixRow, c2: MatrixRow) -> Self {
        Self::from_rows([c0, c1, c2]).transpose()
    }

    #[inline]
    pub fn rows(&self) -> &[MatrixRow; 3] {
        &self.rows
    }

    /// Cofactor expansion along the first row.
    pub fn determinant(&self) -> Complex {
        let m = &self.rows;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Adjugate over determinant; `None` iff the determinant is zero within `EPS`.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.is_zero() {
            return None;
        }
        let m = &self.rows;
        Some(Self::new(
            (m[1][1] * m[2][2] - m[1][2] * m[2][1]) / det,
            -(m[0][1] * m[2][2] - m[0][2] * m[2][1]) / det,
            (m[0][1] * m[1][2] - m[0][2] * m[1][1]) / det,
            -(m[1][0] * m[2][2] - m[1][2] * m[2][0]) / det,
            (m[0][0] * m[2][2] - m[0][2] * m[2][0]) / det,
            -(m[0][0] * m[1][2] - m[0][2] * m[1][0]) / det,
            (m[1][0] * m[2][1] - m[1][1] * m[2][0]) / det,
            -(m[0][0] * m[2][1] - m[0][1] * m[2][0]) / det,
            (m[0][0] * m[1][1] - m[0][1] * m[1][0]) / det,
        ))
    }

    pub fn transpose(&self) -> Self {
        let mut out = *self;
        for r in 0..3 {
            for c in 0..3 {
                out.rows[r][c] = self.rows[c][r];
            }
        }
        out
    }

    /// `M · v` on a homogeneous triple.
    pub fn mul_vector(&self, v: &HomogeneousCoordinate) -> HomogeneousCoordinate {
        let v = v.to_array();
        let mut out = [Complex::ZERO; 3];
        for (row, slot) in self.rows.iter().zip(out.iter_mut()) {
            *slot = row[0] * v[0] + row[1] * v[1] + row[2] * v[2];
        }
        HomogeneousCoordinate::from_array(out)
    }

    pub fn scale(&self, factor: Complex) -> Self {
        let mut out = *self;
        for row in out.rows.iter_mut() {
            for v in row.iter_mut() {
                *v *= factor;
            }
        }
        out
    }

    pub fn approx_eq(&self, other: &Self, eps: f64) -> bool {
        self.rows
            .iter()
            .flatten()
            .zip(other.rows.iter().flatten())
            .all(|(a, b)| a.approx_eq(*b, eps))
    }

    pub fn to_nalgebra(&self) -> Matrix3<nalgebra::Complex<f64>> {
        Matrix3::from_fn(|r, c| self.rows[r][c].into())
    }
}

impl From<Matrix3<f64>> for TransformationMatrix {
    fn from(m: Matrix3<f64>) -> Self {
        let mut rows = [[Complex::ZERO; 3]; 3];
        for (r, row) in rows.iter_mut().enumerate() {
            for (c, v) in row.iter_mut().enumerate() {
                *v = Complex::real(m[(r, c)]);
            }
        }
        Self { rows }
    }
}

impl Index<usize> for TransformationMatrix {
    type Output = MatrixRow;
    #[inline]
    fn index(&self, row: usize) -> &MatrixRow {
        &self.rows[row]
    }
}

impl IndexMut<usize> for TransformationMatrix {
    #[inline]
    fn index_mut(&mut self, row: usize) -> &mut MatrixRow {
        &mut self.rows[row]
    }
}

impl Mul for TransformationMatrix {
    type Output = TransformationMatrix;
    fn mul(self, rhs: TransformationMatrix) -> TransformationMatrix {
        let mut out = [[Complex::ZERO; 3]; 3];
        for (r, out_row) in out.iter_mut().enumerate() {
            for (c, slot) in out_row.iter_mut().enumerate() {
                *slot = (0..3).map(|k| self.rows[r][k] * rhs.rows[k][c]).sum();
            }
        }
        TransformationMatrix::from_rows(out)
    }
}

impl MulAssign for TransformationMatrix {
    fn mul_assign(&mut self, rhs: TransformationMatrix) {
        *self = *self * rhs;
    }
}
