//! Homogeneous coordinates of the complex projective plane ℂP².

use std::ops::{Index, IndexMut};

use crate::complex::Complex;

/// Axis/variable names of a homogeneous triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Var {
    X,
    Y,
    Z,
}

impl Var {
    pub const ALL: [Var; 3] = [Var::X, Var::Y, Var::Z];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Var::X => 0,
            Var::Y => 1,
            Var::Z => 2,
        }
    }
}

/// Triple `(x, y, z)`; nonzero scalar multiples denote the same point (or line).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HomogeneousCoordinate {
    pub x: Complex,
    pub y: Complex,
    pub z: Complex,
}

/// A point of the visible real plane, as handed to the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RealPosition {
    pub x: f64,
    pub y: f64,
    /// `(x, y)` is then a direction, not a position.
    pub at_infinity: bool,
}

impl HomogeneousCoordinate {
    #[inline]
    pub const fn new(x: Complex, y: Complex, z: Complex) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn real(x: f64, y: f64, z: f64) -> Self {
        Self::new(Complex::real(x), Complex::real(y), Complex::real(z))
    }

    #[inline]
    pub fn to_array(self) -> [Complex; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    pub fn from_array([x, y, z]: [Complex; 3]) -> Self {
        Self::new(x, y, z)
    }

    /// All three components are zero within `EPS`; such a triple is not a
    /// projective entity.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero() && self.z.is_zero()
    }

    /// Bilinear pairing `x·x' + y·y' + z·z'` (point-on-line test).
    #[inline]
    pub fn dot(&self, other: &Self) -> Complex {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Scale so that the first nonzero of `z`, `y`, `x` becomes one.
    ///
    /// The divisor slot is set to exactly one and the slots skipped as zero
    /// to exactly zero. The zero triple is left unchanged.
    pub fn normalize(&mut self) -> &mut Self {
        let (o, l) = (Complex::ZERO, Complex::ONE);
        if !self.z.is_zero() {
            let d = self.z;
            *self = Self::new(self.x / d, self.y / d, l);
        } else if !self.y.is_zero() {
            let d = self.y;
            *self = Self::new(self.x / d, l, o);
        } else if !self.x.is_zero() {
            *self = Self::new(l, o, o);
        }
        self
    }

    pub fn normalized(&self) -> Self {
        let mut copy = *self;
        copy.normalize();
        copy
    }

    /// Same projective entity: all 2×2 minors vanish (relative to `eps`).
    pub fn is_proportional(&self, other: &Self, eps: f64) -> bool {
        let scale = self.norm() * other.norm();
        let minors = self.cross(other);
        minors.x.norm() <= eps * scale
            && minors.y.norm() <= eps * scale
            && minors.z.norm() <= eps * scale
    }

    /// Euclidean length of the triple in ℂ³.
    pub fn norm(&self) -> f64 {
        (self.x.norm().powi(2) + self.y.norm().powi(2) + self.z.norm().powi(2)).sqrt()
    }

    pub fn approx_eq(&self, other: &Self, eps: f64) -> bool {
        self.x.approx_eq(other.x, eps)
            && self.y.approx_eq(other.y, eps)
            && self.z.approx_eq(other.z, eps)
    }

    /// Position on the real plane seen by the renderer, or `None` when the
    /// normalized point is not real (or is the zero triple).
    pub fn real_position(&self) -> Option<RealPosition> {
        if self.is_zero() {
            return None;
        }
        let n = self.normalized();
        Some(RealPosition {
            x: n.x.try_real()?,
            y: n.y.try_real()?,
            at_infinity: n.z.is_zero(),
        })
    }
}

impl Index<Var> for HomogeneousCoordinate {
    type Output = Complex;
    #[inline]
    fn index(&self, var: Var) -> &Complex {
        match var {
            Var::X => &self.x,
            Var::Y => &self.y,
            Var::Z => &self.z,
        }
    }
}

impl IndexMut<Var> for HomogeneousCoordinate {
    #[inline]
    fn index_mut(&mut self, var: Var) -> &mut Complex {
        match var {
            Var::X => &mut self.x,
            Var::Y => &mut self.y,
            Var::Z => &mut self.z,
        }
    }
}
