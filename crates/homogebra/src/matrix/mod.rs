//! Generic N×N linear-system kernel.
//!
//! Purpose
//! - Invert small dense matrices and solve the associated linear system in a
//!   single Gauss-Jordan pass (the augmentation column rides along).
//! - Work over any [`Field`]: `f64` for auxiliary real helpers and
//!   [`Complex`](crate::Complex) for the projective code.
//!
//! Conventions
//! - Structural problems are `Err(InvalidArgument)` at construction or call time.
//! - Singular systems are `None`, never an error: callers branch on absence.
//! - Singularity threshold is `tol::PIVOT_EPS` on the pivot modulus.

mod field;
mod squared;

pub use field::Field;
pub use squared::SquaredMatrix;
