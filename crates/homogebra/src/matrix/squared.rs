//! Square matrix with one augmentation column.
//!
//! Invariants (checked by every constructor):
//! - all rows have exactly `size` entries, the augmentation has `size` entries;
//! - no entry is NaN or infinite.
//!
//! The type has no mutable accessors, so a constructed value stays valid.

use std::ops::Index;

use nalgebra::DMatrix;

use super::field::Field;
use crate::complex::Complex;
use crate::error::InvalidArgument;
use crate::tol::PIVOT_EPS;

#[derive(Clone, Debug, PartialEq)]
pub struct SquaredMatrix<T> {
    rows: Vec<Vec<T>>,
    augmentation: Vec<T>,
}

impl<T: Field> SquaredMatrix<T> {
    /// `size × size` zeros with a zero augmentation.
    pub fn zeros(size: usize) -> Self {
        Self {
            rows: vec![vec![T::zero(); size]; size],
            augmentation: vec![T::zero(); size],
        }
    }

    pub fn identity(size: usize) -> Self {
        let mut out = Self::zeros(size);
        for (i, row) in out.rows.iter_mut().enumerate() {
            row[i] = T::one();
        }
        out
    }

    /// Validate and wrap `rows` and `augmentation`.
    pub fn new(rows: Vec<Vec<T>>, augmentation: Vec<T>) -> Result<Self, InvalidArgument> {
        let size = rows.len();
        for (r, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(InvalidArgument::NotSquare {
                    row: r,
                    len: row.len(),
                    size,
                });
            }
        }
        if augmentation.len() != size {
            return Err(InvalidArgument::AugmentationLength {
                len: augmentation.len(),
                size,
            });
        }
        for (r, row) in rows.iter().enumerate() {
            if let Some(c) = row.iter().position(|v| !v.is_finite()) {
                return Err(InvalidArgument::NonFiniteEntry { row: r, col: c });
            }
        }
        if let Some(r) = augmentation.iter().position(|v| !v.is_finite()) {
            return Err(InvalidArgument::NonFiniteAugmentation { row: r });
        }
        Ok(Self { rows, augmentation })
    }

    /// Wrap parts the caller already knows to be square and finite.
    pub(crate) fn from_parts(rows: Vec<Vec<T>>, augmentation: Vec<T>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == rows.len()));
        debug_assert_eq!(augmentation.len(), rows.len());
        debug_assert!(rows.iter().flatten().chain(&augmentation).all(|v| v.is_finite()));
        Self { rows, augmentation }
    }

    /// Like [`SquaredMatrix::new`] with a zero augmentation.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, InvalidArgument> {
        let size = rows.len();
        Self::new(rows, vec![T::zero(); size])
    }

    /// Replace the augmentation column (re-validated).
    pub fn with_augmentation(self, augmentation: Vec<T>) -> Result<Self, InvalidArgument> {
        Self::new(self.rows, augmentation)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn augmentation(&self) -> &[T] {
        &self.augmentation
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Gauss-Jordan elimination with partial pivoting.
    ///
    /// Returns the inverse matrix; its augmentation is the solution `x` of
    /// `self · x = self.augmentation()`. `None` if some pivot has modulus
    /// below `PIVOT_EPS` after row exchange (singular or near-singular).
    pub fn inverse(&self) -> Option<Self> {
        let n = self.size();
        let mut work = self.rows.clone();
        let mut inv = Self::identity(n).rows;
        let mut aug = self.augmentation.clone();

        for step in 0..n {
            let mut pivot = step;
            for row in step + 1..n {
                if work[row][step].modulus() > work[pivot][step].modulus() {
                    pivot = row;
                }
            }
            work.swap(step, pivot);
            inv.swap(step, pivot);
            aug.swap(step, pivot);

            let pivot_value = work[step][step];
            if pivot_value.modulus() < PIVOT_EPS {
                tracing::trace!(
                    step,
                    size = n,
                    pivot = pivot_value.modulus(),
                    "near-singular pivot, elimination aborted"
                );
                return None;
            }

            for col in 0..n {
                work[step][col] /= pivot_value;
                inv[step][col] /= pivot_value;
            }
            aug[step] /= pivot_value;

            let work_row = work[step].clone();
            let inv_row = inv[step].clone();
            let aug_value = aug[step];
            for row in 0..n {
                if row == step {
                    continue;
                }
                let factor = work[row][step];
                for col in 0..n {
                    work[row][col] -= work_row[col] * factor;
                    inv[row][col] -= inv_row[col] * factor;
                }
                aug[row] -= aug_value * factor;
            }
        }

        // Overflow on badly scaled input; the result would break the invariants.
        Self::new(inv, aug).ok()
    }

    /// Solution of `self · x = self.augmentation()`, `None` when singular.
    pub fn solution(&self) -> Option<Vec<T>> {
        self.inverse().map(|inv| inv.augmentation)
    }

    /// Determinant as the product of pivots, one sign flip per row exchange.
    ///
    /// Uses the same pivot rule as [`SquaredMatrix::inverse`] but no
    /// threshold: small pivots are multiplied in, and only a column with no
    /// nonzero candidate gives exactly zero.
    pub fn determinant(&self) -> T {
        let n = self.size();
        let mut work = self.rows.clone();
        let mut det = T::one();

        for step in 0..n {
            let mut pivot = step;
            for row in step + 1..n {
                if work[row][step].modulus() > work[pivot][step].modulus() {
                    pivot = row;
                }
            }
            if pivot != step {
                work.swap(step, pivot);
                det = -det;
            }

            let pivot_value = work[step][step];
            if pivot_value.modulus() == 0.0 {
                return T::zero();
            }
            det *= pivot_value;

            let pivot_row = work[step].clone();
            for row in work.iter_mut().skip(step + 1) {
                let factor = row[step] / pivot_value;
                for col in step..n {
                    row[col] -= pivot_row[col] * factor;
                }
            }
        }
        det
    }

    /// Matrix product `self · other`. The result carries a zero augmentation.
    pub fn try_mul(&self, other: &Self) -> Result<Self, InvalidArgument> {
        let n = self.size();
        if other.size() != n {
            return Err(InvalidArgument::DimensionMismatch {
                left: n,
                right: other.size(),
            });
        }
        let mut out = Self::zeros(n);
        for i in 0..n {
            for j in 0..n {
                let mut sum = T::zero();
                for k in 0..n {
                    sum += self.rows[i][k] * other.rows[k][j];
                }
                out.rows[i][j] = sum;
            }
        }
        Ok(out)
    }

    /// Matrix-vector product `self · v`.
    pub fn mul_vector(&self, v: &[T]) -> Result<Vec<T>, InvalidArgument> {
        let n = self.size();
        if v.len() != n {
            return Err(InvalidArgument::DimensionMismatch {
                left: n,
                right: v.len(),
            });
        }
        Ok(self
            .rows
            .iter()
            .map(|row| {
                let mut sum = T::zero();
                for (a, b) in row.iter().zip(v) {
                    sum += *a * *b;
                }
                sum
            })
            .collect())
    }

    /// Entry-wise comparison of the matrices (augmentations ignored).
    pub fn approx_eq(&self, other: &Self, eps: f64) -> bool {
        self.size() == other.size()
            && self
                .rows
                .iter()
                .zip(&other.rows)
                .all(|(a, b)| a.iter().zip(b).all(|(x, y)| (*x - *y).modulus() < eps))
    }
}

impl<T> Index<usize> for SquaredMatrix<T> {
    type Output = [T];
    #[inline]
    fn index(&self, row: usize) -> &[T] {
        &self.rows[row]
    }
}

impl SquaredMatrix<f64> {
    pub fn to_dmatrix(&self) -> DMatrix<f64> {
        let n = self.size();
        DMatrix::from_fn(n, n, |r, c| self.rows[r][c])
    }
}

impl SquaredMatrix<Complex> {
    pub fn to_dmatrix(&self) -> DMatrix<nalgebra::Complex<f64>> {
        let n = self.size();
        DMatrix::from_fn(n, n, |r, c| self.rows[r][c].into())
    }
}
