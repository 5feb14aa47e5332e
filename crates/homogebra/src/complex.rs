//! Epsilon-aware complex scalar.
//!
//! `Complex` is a plain value type over two `f64` fields. Arithmetic is
//! implemented directly; the principal square root delegates to
//! `nalgebra::Complex` (num-complex), which handles the branch cut.
//!
//! Zero and realness are tolerance-based (`tol::EPS`); exact equality via
//! `PartialEq` is only meaningful for literal values.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::tol::EPS;

/// Complex number `re + im·i`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Complex = Complex { re: 0.0, im: 0.0 };
    pub const ONE: Complex = Complex { re: 1.0, im: 0.0 };
    pub const I: Complex = Complex { re: 0.0, im: 1.0 };

    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    #[inline]
    pub const fn real(re: f64) -> Self {
        Self { re, im: 0.0 }
    }

    /// Modulus `|z|`.
    #[inline]
    pub fn norm(self) -> f64 {
        self.re.hypot(self.im)
    }

    #[inline]
    pub fn conj(self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// `|z| < EPS`.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.norm() < EPS
    }

    /// `|Im z| < EPS`.
    #[inline]
    pub fn is_real(self) -> bool {
        self.im.abs() < EPS
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    /// Real part of a number that must be real.
    ///
    /// Panics if `!self.is_real()`; the imaginary part is never dropped
    /// silently. Use [`Complex::try_real`] where non-real input is expected.
    #[inline]
    #[track_caller]
    pub fn to_real(self) -> f64 {
        assert!(
            self.is_real(),
            "converting non-real complex number {self} to a real scalar"
        );
        self.re
    }

    #[inline]
    pub fn try_real(self) -> Option<f64> {
        self.is_real().then_some(self.re)
    }

    /// Principal square root (branch cut along the negative real axis).
    #[inline]
    pub fn sqrt(self) -> Self {
        nalgebra::Complex::<f64>::from(self).sqrt().into()
    }

    /// Component-wise comparison with absolute tolerance `eps`.
    #[inline]
    pub fn approx_eq(self, other: Self, eps: f64) -> bool {
        (self.re - other.re).abs() < eps && (self.im - other.im).abs() < eps
    }
}

impl From<f64> for Complex {
    #[inline]
    fn from(re: f64) -> Self {
        Self::real(re)
    }
}

impl From<nalgebra::Complex<f64>> for Complex {
    #[inline]
    fn from(z: nalgebra::Complex<f64>) -> Self {
        Self::new(z.re, z.im)
    }
}

impl From<Complex> for nalgebra::Complex<f64> {
    #[inline]
    fn from(z: Complex) -> Self {
        nalgebra::Complex::new(z.re, z.im)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im.is_sign_negative() {
            write!(f, "{}-{}i", self.re, -self.im)
        } else {
            write!(f, "{}+{}i", self.re, self.im)
        }
    }
}

impl Add for Complex {
    type Output = Complex;
    #[inline]
    fn add(self, rhs: Complex) -> Complex {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Complex;
    #[inline]
    fn sub(self, rhs: Complex) -> Complex {
        Complex::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Complex;
    #[inline]
    fn mul(self, rhs: Complex) -> Complex {
        // (a + bi)(c + di) = (ac - bd) + (ad + bc)i
        Complex::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl Div for Complex {
    type Output = Complex;
    #[inline]
    fn div(self, rhs: Complex) -> Complex {
        let denom = rhs.re * rhs.re + rhs.im * rhs.im;
        Complex::new(
            (self.re * rhs.re + self.im * rhs.im) / denom,
            (self.im * rhs.re - self.re * rhs.im) / denom,
        )
    }
}

impl Neg for Complex {
    type Output = Complex;
    #[inline]
    fn neg(self) -> Complex {
        Complex::new(-self.re, -self.im)
    }
}

impl Mul<f64> for Complex {
    type Output = Complex;
    #[inline]
    fn mul(self, rhs: f64) -> Complex {
        Complex::new(self.re * rhs, self.im * rhs)
    }
}

impl AddAssign for Complex {
    #[inline]
    fn add_assign(&mut self, rhs: Complex) {
        *self = *self + rhs;
    }
}

impl SubAssign for Complex {
    #[inline]
    fn sub_assign(&mut self, rhs: Complex) {
        *self = *self - rhs;
    }
}

impl MulAssign for Complex {
    #[inline]
    fn mul_assign(&mut self, rhs: Complex) {
        *self = *self * rhs;
    }
}

impl DivAssign for Complex {
    #[inline]
    fn div_assign(&mut self, rhs: Complex) {
        *self = *self / rhs;
    }
}

impl std::iter::Sum for Complex {
    fn sum<I: Iterator<Item = Complex>>(iter: I) -> Complex {
        iter.fold(Complex::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_matches_hand_computation() {
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(3.0, 4.0);
        assert_eq!(a + b, Complex::new(4.0, 6.0));
        assert_eq!(a - b, Complex::new(-2.0, -2.0));
        // (1 + 2i)(3 + 4i) = -5 + 10i
        assert_eq!(a * b, Complex::new(-5.0, 10.0));
        // (1 + 2i)/(3 + 4i) = (11 + 2i)/25
        assert!((a / b).approx_eq(Complex::new(0.44, 0.08), 1e-15));
        assert_eq!(-a, Complex::new(-1.0, -2.0));
        assert!(((a / b) * b).approx_eq(a, 1e-15));
    }

    #[test]
    fn zero_and_real_are_tolerance_based() {
        assert!(Complex::new(1e-11, -1e-11).is_zero());
        assert!(!Complex::new(1e-9, 0.0).is_zero());
        assert!(Complex::new(5.0, 1e-11).is_real());
        assert!(!Complex::new(5.0, 1e-9).is_real());
    }

    #[test]
    fn sqrt_is_principal_branch() {
        assert!(Complex::real(4.0).sqrt().approx_eq(Complex::real(2.0), 1e-15));
        assert!(Complex::real(-1.0).sqrt().approx_eq(Complex::I, 1e-15));
        // sqrt(2i) = 1 + i
        assert!(Complex::new(0.0, 2.0)
            .sqrt()
            .approx_eq(Complex::new(1.0, 1.0), 1e-15));
        let z = Complex::new(-3.0, -4.0);
        let r = z.sqrt();
        assert!(r.re >= 0.0);
        assert!((r * r).approx_eq(z, 1e-12));
    }

    #[test]
    fn real_conversion_checked_and_unchecked() {
        assert_eq!(Complex::new(2.5, 1e-12).to_real(), 2.5);
        assert_eq!(Complex::new(2.5, 0.5).try_real(), None);
        assert_eq!(Complex::real(-1.0).try_real(), Some(-1.0));
    }

    #[test]
    #[should_panic(expected = "non-real")]
    fn to_real_panics_on_imaginary_part() {
        let _ = Complex::new(1.0, 1.0).to_real();
    }

    #[test]
    fn display_and_nalgebra_roundtrip() {
        assert_eq!(Complex::new(1.5, -2.0).to_string(), "1.5-2i");
        assert_eq!(Complex::new(0.0, 3.0).to_string(), "0+3i");
        let z = Complex::new(0.25, -7.0);
        let n: nalgebra::Complex<f64> = z.into();
        assert_eq!(Complex::from(n), z);
    }
}
