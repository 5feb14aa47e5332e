//! Roots of a conic along an axis-parallel line in the chart `z = 1`.
//!
//! Purpose
//! - Fix one affine coordinate of a `ConicEquation` and solve the remaining
//!   quadratic for the other; scanning the fixed value over a range traces
//!   the real part of the curve.
//!
//! Conventions
//! - With `u` the unknown and `w` the fixed value, the form reduces to
//!   `A·u² + B·u + C` where `A = s[u]`, `B = q(u,w)·w + q(u,z)` and
//!   `C = s[w]·w² + q(w,z)·w + s[z]`.
//! - `A.is_zero()` (within `EPS`) drops to the linear case; `A` and `B` both
//!   zero gives no roots, even when `C` vanishes too.
//! - For two roots, `(-B + √Δ) / 2A` comes first (principal `sqrt`).

use crate::complex::Complex;
use crate::projective::{ConicEquation, Pair, Var};

/// Affine axis held fixed while solving for the other one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    #[inline]
    pub fn var(self) -> Var {
        match self {
            Axis::X => Var::X,
            Axis::Y => Var::Y,
        }
    }

    #[inline]
    pub fn other(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

/// Zero, one or two roots, in solver order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Roots {
    None,
    One(Complex),
    Two(Complex, Complex),
}

impl Roots {
    pub fn len(&self) -> usize {
        match self {
            Roots::None => 0,
            Roots::One(_) => 1,
            Roots::Two(..) => 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Roots::None)
    }

    pub fn first(&self) -> Option<Complex> {
        self.iter().next()
    }

    pub fn iter(&self) -> impl Iterator<Item = Complex> {
        (*self).into_iter()
    }
}

impl IntoIterator for Roots {
    type Item = Complex;
    type IntoIter = std::iter::Chain<std::option::IntoIter<Complex>, std::option::IntoIter<Complex>>;

    fn into_iter(self) -> Self::IntoIter {
        let (a, b) = match self {
            Roots::None => (None, None),
            Roots::One(r) => (Some(r), None),
            Roots::Two(r, s) => (Some(r), Some(s)),
        };
        a.into_iter().chain(b)
    }
}

/// Solve `a·v² + b·v + c = 0` over ℂ.
pub fn solve_quadratic(a: Complex, b: Complex, c: Complex) -> Roots {
    if a.is_zero() {
        if b.is_zero() {
            return Roots::None;
        }
        return Roots::One(-c / b);
    }
    let sqrt_disc = (b * b - a * c * 4.0).sqrt();
    let two_a = a * 2.0;
    Roots::Two((-b + sqrt_disc) / two_a, (-b - sqrt_disc) / two_a)
}

/// Borrowing view of a conic that answers scan-line queries.
#[derive(Clone, Copy, Debug)]
pub struct ConicRootSolver<'a> {
    conic: &'a ConicEquation,
}

impl<'a> ConicRootSolver<'a> {
    pub fn new(conic: &'a ConicEquation) -> Self {
        Self { conic }
    }

    pub fn conic(&self) -> &ConicEquation {
        self.conic
    }

    /// Values of the free axis on the line `fixed = value`.
    pub fn solve(&self, fixed: Axis, value: Complex) -> Roots {
        let (u, w) = (fixed.other().var(), fixed.var());
        let (uz, wz) = match fixed {
            Axis::X => (Pair::YZ, Pair::XZ),
            Axis::Y => (Pair::XZ, Pair::YZ),
        };
        let c = self.conic;
        let a = c.square(u);
        let b = c.pair_product(Pair::XY) * value + c.pair_product(uz);
        let k = c.square(w) * value * value + c.pair_product(wz) * value + c.square(Var::Z);
        solve_quadratic(a, b, k)
    }

    /// Real affine points `(x, y)` found by scanning `fixed` over `samples`.
    ///
    /// Non-real roots are dropped, so a sample contributes zero to two points.
    pub fn trace<I>(&self, fixed: Axis, samples: I) -> Vec<(f64, f64)>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut points = Vec::new();
        for s in samples {
            for root in self.solve(fixed, Complex::real(s)) {
                let Some(v) = root.try_real() else { continue };
                points.push(match fixed {
                    Axis::X => (s, v),
                    Axis::Y => (v, s),
                });
            }
        }
        tracing::trace!(points = points.len(), "conic scan finished");
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> Complex {
        Complex::new(re, im)
    }

    /// `x² + y² - z²`
    fn unit_circle() -> ConicEquation {
        ConicEquation::new([c(1.0, 0.0), c(1.0, 0.0), c(-1.0, 0.0)], [Complex::ZERO; 3])
    }

    #[test]
    fn hyperbola_pair_of_lines() {
        // x² - z² = 0: the lines x = ±1 for every y.
        let conic = ConicEquation::new([c(1.0, 0.0), Complex::ZERO, c(-1.0, 0.0)], [Complex::ZERO; 3]);
        let roots = ConicRootSolver::new(&conic).solve(Axis::Y, c(0.3, 0.0));
        assert_eq!(roots.len(), 2);
        let got: Vec<f64> = roots.iter().map(Complex::to_real).collect();
        assert!((got[0] - 1.0).abs() < 1e-12 && (got[1] + 1.0).abs() < 1e-12);
    }

    #[test]
    fn quadratic_with_complex_coefficients() {
        let roots = solve_quadratic(c(1.0, 2.0), c(3.0, 4.0), c(5.0, 6.0));
        let Roots::Two(r0, r1) = roots else {
            panic!("expected two roots, got {roots:?}")
        };
        assert!(r0.approx_eq(c(-1.22014865711964, -1.29814408512921), 1e-10), "{r0}");
        assert!(r1.approx_eq(c(-0.97985134288036, 1.69814408512921), 1e-10), "{r1}");
    }

    #[test]
    fn linear_and_empty_cases() {
        let roots = solve_quadratic(Complex::ZERO, c(1.0, 2.0), c(3.0, 4.0));
        assert_eq!(roots.len(), 1);
        assert!(roots.first().unwrap().approx_eq(c(-2.2, 0.4), 1e-12));

        assert_eq!(solve_quadratic(Complex::ZERO, Complex::ZERO, Complex::ZERO), Roots::None);
        assert!(solve_quadratic(Complex::ZERO, Complex::ZERO, c(1.0, 0.0)).is_empty());
    }

    #[test]
    fn double_root_is_reported_twice() {
        // (v - 2)²
        let roots = solve_quadratic(c(1.0, 0.0), c(-4.0, 0.0), c(4.0, 0.0));
        let vals: Vec<Complex> = roots.into_iter().collect();
        assert_eq!(vals.len(), 2);
        assert!(vals.iter().all(|v| v.approx_eq(c(2.0, 0.0), 1e-12)));
    }

    #[test]
    fn circle_scan_lines() {
        let circle = unit_circle();
        let solver = ConicRootSolver::new(&circle);

        let roots = solver.solve(Axis::X, c(0.6, 0.0));
        let ys: Vec<f64> = roots.iter().map(Complex::to_real).collect();
        assert!((ys[0] - 0.8).abs() < 1e-12 && (ys[1] + 0.8).abs() < 1e-12);

        // Outside the circle the roots leave the real line.
        let outside = solver.solve(Axis::X, c(2.0, 0.0));
        assert!(outside.iter().all(|r| !r.is_real()));

        let samples = (0..=20).map(|i| -1.5 + 0.15 * i as f64);
        let pts = solver.trace(Axis::Y, samples);
        assert!(!pts.is_empty());
        for (x, y) in &pts {
            assert!(y.abs() <= 1.0 + 1e-12);
            assert!((x * x + y * y - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn mixed_terms_enter_linear_coefficient() {
        // xy - z² = 0, i.e. y = 1/x.
        let conic = ConicEquation::new(
            [Complex::ZERO, Complex::ZERO, c(-1.0, 0.0)],
            [c(1.0, 0.0), Complex::ZERO, Complex::ZERO],
        );
        let roots = ConicRootSolver::new(&conic).solve(Axis::X, c(4.0, 0.0));
        assert_eq!(roots.len(), 1);
        assert!(roots.first().unwrap().approx_eq(c(0.25, 0.0), 1e-12));
    }
}
